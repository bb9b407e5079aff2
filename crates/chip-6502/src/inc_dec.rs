//! Increment and decrement instructions: INC, DEC, INX, INY, DEX, DEY.

use emu_core::Bus;

use crate::{Chip6502, CpuError, Index, Mode, Register};

impl<B: Bus> Chip6502<B> {
    /// INC on a direct address, without flag updates.
    ///
    /// The sum is not wrapped: incrementing a cell holding `$FF` hands `$100`
    /// to the bus, which rejects it with `MemoryOverflow` and leaves the cell
    /// as it was.
    pub fn inc_immediate(&mut self, address: u32) -> Result<(), CpuError> {
        let value = self.bus.read(address)?;
        self.bus.write(address, u16::from(value) + 1)?;
        Ok(())
    }

    pub fn inc_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.read_modify_write(Mode::Absolute(address), Self::increment)
    }

    pub fn inc_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.read_modify_write(Mode::AbsoluteIndexed(address, index), Self::increment)
    }

    pub fn inc_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.read_modify_write(Mode::IndexedIndirect(address), Self::increment)
    }

    pub fn inc_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.read_modify_write(Mode::IndirectIndexed(address), Self::increment)
    }

    pub fn dec_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.read_modify_write(Mode::Absolute(address), Self::decrement)
    }

    pub fn dec_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.read_modify_write(Mode::AbsoluteIndexed(address, index), Self::decrement)
    }

    pub fn dec_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.read_modify_write(Mode::IndexedIndirect(address), Self::decrement)
    }

    pub fn dec_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.read_modify_write(Mode::IndirectIndexed(address), Self::decrement)
    }

    /// INX - Increment X (wraps)
    pub fn inx(&mut self) -> Result<(), CpuError> {
        self.step_register(Register::X, Self::increment)
    }

    /// INY - Increment Y (wraps)
    pub fn iny(&mut self) -> Result<(), CpuError> {
        self.step_register(Register::Y, Self::increment)
    }

    /// DEX - Decrement X (wraps)
    pub fn dex(&mut self) -> Result<(), CpuError> {
        self.step_register(Register::X, Self::decrement)
    }

    /// DEY - Decrement Y (wraps)
    pub fn dey(&mut self) -> Result<(), CpuError> {
        self.step_register(Register::Y, Self::decrement)
    }

    /// 8-bit read-modify-write on memory, then Z/N from the new value.
    fn read_modify_write(&mut self, mode: Mode, op: fn(u8) -> u8) -> Result<(), CpuError> {
        let address = self.effective_address(mode)?;
        let value = op(self.bus.read(address)?);
        log::trace!("RMW {mode:?} -> ${address:04X} = {value:#04X}");
        self.bus.write(address, u16::from(value))?;
        self.update_nz(value);
        Ok(())
    }

    fn step_register(&mut self, register: Register, op: fn(u8) -> u8) -> Result<(), CpuError> {
        let value = op(self.regs.get(register));
        self.set_register(register, u16::from(value))?;
        Ok(())
    }

    fn increment(value: u8) -> u8 {
        value.wrapping_add(1)
    }

    fn decrement(value: u8) -> u8 {
        value.wrapping_sub(1)
    }
}
