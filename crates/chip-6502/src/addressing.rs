//! 6502 addressing modes.
//!
//! Immediate operands never touch the bus, so they are not a [`Mode`]; each
//! instruction family takes them directly. The remaining modes:
//! - Absolute: $nnnn
//! - Absolute,X / Absolute,Y: $nnnn + index (no wraparound)
//! - Indexed Indirect: ($nn,X) (pointer at operand + X)
//! - Indirect Indexed: ($nn),Y (pointer at operand, then + Y)

use emu_core::Bus;

use crate::{Chip6502, CpuError, Index};

/// A memory operand, with its already-decoded address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute(u32),
    AbsoluteIndexed(u32, Index),
    IndexedIndirect(u32),
    IndirectIndexed(u32),
}

impl<B: Bus> Chip6502<B> {
    /// Resolve `mode` to the address it reads or writes.
    pub fn effective_address(&self, mode: Mode) -> Result<u32, CpuError> {
        let address = match mode {
            Mode::Absolute(address) => address,
            Mode::AbsoluteIndexed(address, index) => self
                .bus
                .resolve_absolute_indexed(address, self.regs.get(index.into())),
            Mode::IndexedIndirect(address) => {
                self.bus.resolve_indexed_indirect(address, self.regs.x)?
            }
            Mode::IndirectIndexed(address) => {
                self.bus.resolve_indirect_indexed(address, self.regs.y)?
            }
        };
        Ok(address)
    }

    /// Fetch the operand byte `mode` points at.
    pub(crate) fn read_operand(&self, mode: Mode) -> Result<u8, CpuError> {
        let address = self.effective_address(mode)?;
        Ok(self.bus.read(address)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Register;
    use nes_memory::NesMemory;

    fn chip() -> Chip6502<NesMemory> {
        Chip6502::new(NesMemory::new(0xFFFF))
    }

    #[test]
    fn test_absolute_indexed_uses_named_register() {
        let mut cpu = chip();
        cpu.set_register(Register::X, 0x01).unwrap();
        cpu.set_register(Register::Y, 0x02).unwrap();
        assert_eq!(
            cpu.effective_address(Mode::AbsoluteIndexed(0x3000, Index::X)),
            Ok(0x3001)
        );
        assert_eq!(
            cpu.effective_address(Mode::AbsoluteIndexed(0x3000, Index::Y)),
            Ok(0x3002)
        );
    }

    #[test]
    fn test_indexed_indirect_uses_x() {
        let mut cpu = chip();
        cpu.set_register(Register::X, 0x03).unwrap();
        cpu.set_register(Register::Y, 0x09).unwrap();
        cpu.bus_mut().write(0x0F, 0x11).unwrap();
        cpu.bus_mut().write(0x10, 0xFF).unwrap();
        assert_eq!(cpu.effective_address(Mode::IndexedIndirect(0x0C)), Ok(0xFF11));
    }

    #[test]
    fn test_indirect_indexed_uses_y() {
        let mut cpu = chip();
        cpu.set_register(Register::X, 0x09).unwrap();
        cpu.set_register(Register::Y, 0x02).unwrap();
        cpu.bus_mut().write(0x02, 0x01).unwrap();
        cpu.bus_mut().write(0x03, 0x12).unwrap();
        assert_eq!(cpu.effective_address(Mode::IndirectIndexed(0x02)), Ok(0x1203));
    }

    #[test]
    fn test_pointer_outside_memory_is_an_error() {
        let cpu = Chip6502::new(NesMemory::new(0x10));
        assert!(matches!(
            cpu.effective_address(Mode::IndirectIndexed(0x0F)),
            Err(CpuError::Bus(emu_core::BusError::OutOfRange { address: 0x10, .. }))
        ));
    }
}
