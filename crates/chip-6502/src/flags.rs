//! 6502 processor status register (P).
//!
//! Only the flags this core drives are defined. Bit positions match the
//! hardware so the raw byte can be handed to a debugger unchanged.

/// Carry flag - set on unsigned carry out of an add, or no borrow on subtract.
pub const C: u8 = 0x01;

/// Zero flag - set if the last register write was zero.
pub const Z: u8 = 0x02;

/// Overflow flag - see `OverflowRule` for how it is computed.
pub const V: u8 = 0x40;

/// Negative flag - see `NegativeRule` for how it is computed.
pub const N: u8 = 0x80;

/// Processor status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status(pub u8);

impl Status {
    /// All flags clear.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// A flag as the 0/1 value the ALU consumes.
    #[must_use]
    pub fn bit(self, flag: u8) -> u8 {
        u8::from(self.is_set(flag))
    }

    /// Set a flag.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}
