//! Load and store instructions: LDA, LDX, LDY, STA, STX, STY.
//!
//! Loads go through `set_register`, so Z and N follow the loaded value.
//! Stores never touch flags.
//!
//! STX and STY have no indirect forms on the 6502 and none are provided.
//! Their only indexed forms are STX abs,Y and STY abs,X.
//! "Immediate" stores write the register to the operand address.

use emu_core::Bus;

use crate::{Chip6502, CpuError, Index, Mode, Register};

impl<B: Bus> Chip6502<B> {
    fn load(&mut self, register: Register, mode: Mode) -> Result<(), CpuError> {
        let value = self.read_operand(mode)?;
        log::trace!("LD{register} {mode:?} = {value:#04X}");
        self.set_register(register, u16::from(value))?;
        Ok(())
    }

    fn load_immediate(&mut self, register: Register, value: u16) -> Result<(), CpuError> {
        log::trace!("LD{register} #{value:#04X}");
        self.set_register(register, value)?;
        Ok(())
    }

    fn store(&mut self, register: Register, mode: Mode) -> Result<(), CpuError> {
        let address = self.effective_address(mode)?;
        let value = self.regs.get(register);
        log::trace!("ST{register} {mode:?} -> ${address:04X} = {value:#04X}");
        self.bus.write(address, u16::from(value))?;
        Ok(())
    }

    // =========================================================================
    // LDA
    // =========================================================================

    pub fn lda_immediate(&mut self, value: u16) -> Result<(), CpuError> {
        self.load_immediate(Register::A, value)
    }

    pub fn lda_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::A, Mode::Absolute(address))
    }

    pub fn lda_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.load(Register::A, Mode::AbsoluteIndexed(address, index))
    }

    pub fn lda_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::A, Mode::IndexedIndirect(address))
    }

    pub fn lda_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::A, Mode::IndirectIndexed(address))
    }

    // =========================================================================
    // LDX
    // =========================================================================

    pub fn ldx_immediate(&mut self, value: u16) -> Result<(), CpuError> {
        self.load_immediate(Register::X, value)
    }

    pub fn ldx_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::X, Mode::Absolute(address))
    }

    pub fn ldx_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.load(Register::X, Mode::AbsoluteIndexed(address, index))
    }

    pub fn ldx_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::X, Mode::IndexedIndirect(address))
    }

    pub fn ldx_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::X, Mode::IndirectIndexed(address))
    }

    // =========================================================================
    // LDY
    // =========================================================================

    pub fn ldy_immediate(&mut self, value: u16) -> Result<(), CpuError> {
        self.load_immediate(Register::Y, value)
    }

    pub fn ldy_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::Y, Mode::Absolute(address))
    }

    pub fn ldy_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.load(Register::Y, Mode::AbsoluteIndexed(address, index))
    }

    pub fn ldy_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::Y, Mode::IndexedIndirect(address))
    }

    pub fn ldy_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.load(Register::Y, Mode::IndirectIndexed(address))
    }

    // =========================================================================
    // STA
    // =========================================================================

    pub fn sta_immediate(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::A, Mode::Absolute(address))
    }

    pub fn sta_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::A, Mode::Absolute(address))
    }

    pub fn sta_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.store(Register::A, Mode::AbsoluteIndexed(address, index))
    }

    pub fn sta_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::A, Mode::IndexedIndirect(address))
    }

    pub fn sta_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::A, Mode::IndirectIndexed(address))
    }

    // =========================================================================
    // STX / STY
    // =========================================================================

    pub fn stx_immediate(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::X, Mode::Absolute(address))
    }

    pub fn stx_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::X, Mode::Absolute(address))
    }

    /// STX $nnnn,Y - the only indexed STX form.
    pub fn stx_absolute_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::X, Mode::AbsoluteIndexed(address, Index::Y))
    }

    pub fn sty_immediate(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::Y, Mode::Absolute(address))
    }

    pub fn sty_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::Y, Mode::Absolute(address))
    }

    /// STY $nnnn,X - the only indexed STY form.
    pub fn sty_absolute_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.store(Register::Y, Mode::AbsoluteIndexed(address, Index::X))
    }
}
