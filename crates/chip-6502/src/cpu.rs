//! 6502 register and flag engine.

use emu_core::{Bus, Observable, Value};

use crate::flags::{C, N, V, Z};
use crate::{Behavior, CpuError, Register, Registers, Status};

/// The 6502 execution core.
///
/// Owns the data registers, the status flags and its bus. Instructions are
/// invoked with already-decoded operands; there is no program counter here.
///
/// Every register write goes through [`Chip6502::set_register`], which is the
/// one place the 8-bit check and the zero/negative update happen.
#[derive(Debug)]
pub struct Chip6502<B: Bus> {
    pub(crate) regs: Registers,
    pub(crate) p: Status,
    pub(crate) behavior: Behavior,
    pub(crate) bus: B,
}

impl<B: Bus> Chip6502<B> {
    /// Create a core over `bus` with every register and flag zero.
    #[must_use]
    pub fn new(bus: B) -> Self {
        Self::with_behavior(bus, Behavior::default())
    }

    #[must_use]
    pub fn with_behavior(bus: B, behavior: Behavior) -> Self {
        Self {
            regs: Registers::new(),
            p: Status::new(),
            behavior,
            bus,
        }
    }

    // =========================================================================
    // Public register accessors
    // =========================================================================

    #[must_use]
    pub fn accumulator(&self) -> u8 {
        self.regs.a
    }

    #[must_use]
    pub fn x_register(&self) -> u8 {
        self.regs.x
    }

    #[must_use]
    pub fn y_register(&self) -> u8 {
        self.regs.y
    }

    #[must_use]
    pub fn register(&self, register: Register) -> u8 {
        self.regs.get(register)
    }

    #[must_use]
    pub fn registers(&self) -> Registers {
        self.regs
    }

    #[must_use]
    pub fn carry_flag(&self) -> u8 {
        self.p.bit(C)
    }

    #[must_use]
    pub fn overflow_flag(&self) -> u8 {
        self.p.bit(V)
    }

    #[must_use]
    pub fn zero_flag(&self) -> u8 {
        self.p.bit(Z)
    }

    #[must_use]
    pub fn negative_flag(&self) -> u8 {
        self.p.bit(N)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.p
    }

    /// Overwrite the status register, e.g. from a debugger or a host that
    /// restores saved state.
    pub fn set_status(&mut self, status: Status) {
        self.p = status;
    }

    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[must_use]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    #[must_use]
    pub fn into_bus(self) -> B {
        self.bus
    }

    // =========================================================================
    // Register writes
    // =========================================================================

    /// Commit `value` to `register` and update Z and N.
    ///
    /// Fails with [`CpuError::RegisterOverflow`] for values above `$FF`; the
    /// register and flags are then left untouched. C and V are never changed
    /// here.
    pub fn set_register(&mut self, register: Register, value: u16) -> Result<u8, CpuError> {
        let Ok(byte) = u8::try_from(value) else {
            log::debug!("rejected {register} <- {value:#X}");
            return Err(CpuError::RegisterOverflow { register, value });
        };
        *self.regs.slot_mut(register) = byte;
        self.update_nz(byte);
        Ok(byte)
    }

    /// Update Z and N from a value just produced.
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.p.set_if(Z, value == 0);
        self.p.set_if(N, self.behavior.negative.is_negative(value));
    }
}

impl<B: Bus> Observable for Chip6502<B> {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "p" | "status" => Some(self.p.0.into()),
            "flags.c" | "c" => Some(self.carry_flag().into()),
            "flags.z" | "z" => Some(self.zero_flag().into()),
            "flags.v" | "v" => Some(self.overflow_flag().into()),
            "flags.n" | "n" => Some(self.negative_flag().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["a", "x", "y", "p", "flags.c", "flags.z", "flags.v", "flags.n"]
    }
}
