//! ADC, SBC and the carry/overflow flag instructions.
//!
//! Binary mode only; there is no decimal flag in this core.

use emu_core::Bus;

use crate::flags::{C, V};
use crate::{Chip6502, CpuError, Index, Mode, OverflowRule, Register, SumRule};

#[derive(Debug, Clone, Copy)]
enum AluOp {
    Add,
    Subtract,
}

impl<B: Bus> Chip6502<B> {
    // =========================================================================
    // ALU operations
    // =========================================================================

    /// ADC - Add with Carry
    ///
    /// C is set when `A + M + C` exceeds `$FF`. What is committed past `$FF`
    /// depends on the configured `SumRule`.
    pub fn adc(&mut self, operand: u8) -> Result<(), CpuError> {
        let raw = i16::from(self.regs.a) + i16::from(operand) + i16::from(self.p.bit(C));
        self.p.set_if(C, raw > 0xFF);

        let result = match self.behavior.sum {
            SumRule::Saturate => raw.min(0xFF),
            SumRule::Wrap => raw & 0xFF,
        };
        log::trace!("ADC {operand:#04X}: raw {raw:#X}");
        self.commit_arithmetic(AluOp::Add, operand, result)
    }

    /// SBC - Subtract with Carry
    ///
    /// C is the inverted borrow: set when `A - M - (1 - C)` does not go
    /// negative. A negative difference is committed as its two's-complement
    /// byte.
    pub fn sbc(&mut self, operand: u8) -> Result<(), CpuError> {
        let borrow = 1 - i16::from(self.p.bit(C));
        let raw = i16::from(self.regs.a) - i16::from(operand) - borrow;
        self.p.set_if(C, raw >= 0);

        log::trace!("SBC {operand:#04X}: raw {raw}");
        self.commit_arithmetic(AluOp::Subtract, operand, raw)
    }

    /// Set V from the pre-operation accumulator, then commit to A.
    ///
    /// `result` lies in `-256..=255`; bit 7 of that range is the same as bit
    /// 7 of its low byte, so V does not depend on whether the result is
    /// wrapped first.
    fn commit_arithmetic(&mut self, op: AluOp, operand: u8, result: i16) -> Result<(), CpuError> {
        let a = self.regs.a;
        let result = result as u8;

        let overflow = match self.behavior.overflow {
            OverflowRule::AccumulatorSignChange => (a ^ result) & 0x80 != 0,
            OverflowRule::Signed => match op {
                AluOp::Add => (!(a ^ operand) & (a ^ result) & 0x80) != 0,
                AluOp::Subtract => ((a ^ operand) & (a ^ result) & 0x80) != 0,
            },
        };
        self.p.set_if(V, overflow);

        self.set_register(Register::A, u16::from(result))?;
        Ok(())
    }

    pub fn adc_immediate(&mut self, operand: u8) -> Result<(), CpuError> {
        self.adc(operand)
    }

    pub fn adc_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.adc_mode(Mode::Absolute(address))
    }

    pub fn adc_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.adc_mode(Mode::AbsoluteIndexed(address, index))
    }

    pub fn adc_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.adc_mode(Mode::IndexedIndirect(address))
    }

    pub fn adc_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.adc_mode(Mode::IndirectIndexed(address))
    }

    fn adc_mode(&mut self, mode: Mode) -> Result<(), CpuError> {
        let operand = self.read_operand(mode)?;
        self.adc(operand)
    }

    pub fn sbc_immediate(&mut self, operand: u8) -> Result<(), CpuError> {
        self.sbc(operand)
    }

    pub fn sbc_absolute(&mut self, address: u32) -> Result<(), CpuError> {
        self.sbc_mode(Mode::Absolute(address))
    }

    pub fn sbc_absolute_indexed(&mut self, address: u32, index: Index) -> Result<(), CpuError> {
        self.sbc_mode(Mode::AbsoluteIndexed(address, index))
    }

    pub fn sbc_indexed_indirect(&mut self, address: u32) -> Result<(), CpuError> {
        self.sbc_mode(Mode::IndexedIndirect(address))
    }

    pub fn sbc_indirect_indexed(&mut self, address: u32) -> Result<(), CpuError> {
        self.sbc_mode(Mode::IndirectIndexed(address))
    }

    fn sbc_mode(&mut self, mode: Mode) -> Result<(), CpuError> {
        let operand = self.read_operand(mode)?;
        self.sbc(operand)
    }

    // =========================================================================
    // Flag instructions (implied)
    // =========================================================================

    /// CLC - Clear Carry
    pub fn clc(&mut self) {
        self.p.clear(C);
    }

    /// SEC - Set Carry
    pub fn sec(&mut self) {
        self.p.set(C);
    }

    /// CLV - Clear Overflow
    pub fn clv(&mut self) {
        self.p.clear(V);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Behavior, Status};
    use nes_memory::NesMemory;

    fn chip() -> Chip6502<NesMemory> {
        Chip6502::new(NesMemory::new(0xFFFF))
    }

    #[test]
    fn test_adc_simple() {
        let mut cpu = chip();
        cpu.lda_immediate(0x01).unwrap();
        cpu.adc(0x02).unwrap();
        assert_eq!(cpu.accumulator(), 0x03);
        assert_eq!(cpu.carry_flag(), 0);
    }

    #[test]
    fn test_adc_carry_saturates() {
        let mut cpu = chip();
        cpu.lda_immediate(0xFD).unwrap();
        cpu.adc(0x03).unwrap();
        assert_eq!(cpu.carry_flag(), 1);
        assert_eq!(cpu.accumulator(), 0xFF);
        assert_eq!(cpu.overflow_flag(), 0);
        assert_eq!(cpu.negative_flag(), 1);
    }

    #[test]
    fn test_adc_carry_wraps_under_nmos_rules() {
        let mut cpu = Chip6502::with_behavior(NesMemory::new(0x100), Behavior::nmos());
        cpu.lda_immediate(0xFF).unwrap();
        cpu.adc(0x01).unwrap();
        assert_eq!(cpu.accumulator(), 0x00);
        assert_eq!(cpu.carry_flag(), 1);
        assert_eq!(cpu.zero_flag(), 1);
        assert_eq!(cpu.overflow_flag(), 0);
    }

    #[test]
    fn test_signed_overflow_rule() {
        let mut cpu = Chip6502::with_behavior(NesMemory::new(0x100), Behavior::nmos());
        // $50 + $50 = $A0: two positives giving a negative.
        cpu.lda_immediate(0x50).unwrap();
        cpu.adc(0x50).unwrap();
        assert_eq!(cpu.overflow_flag(), 1);
        assert_eq!(cpu.negative_flag(), 1);

        // $FF + $01 flips bit 7 but is -1 + 1 = 0, no signed overflow.
        cpu.clc();
        cpu.lda_immediate(0xFF).unwrap();
        cpu.adc(0x01).unwrap();
        assert_eq!(cpu.overflow_flag(), 0);

        // $80 - $01 = $7F: negative minus positive giving a positive.
        cpu.sec();
        cpu.lda_immediate(0x80).unwrap();
        cpu.sbc(0x01).unwrap();
        assert_eq!(cpu.accumulator(), 0x7F);
        assert_eq!(cpu.overflow_flag(), 1);
    }

    #[test]
    fn test_sbc_negative_result_commits_twos_complement() {
        let mut cpu = chip();
        cpu.sec();
        cpu.lda_immediate(0x04).unwrap();
        cpu.sbc(0x06).unwrap();
        assert_eq!(cpu.accumulator(), 0xFE);
        assert_eq!(cpu.carry_flag(), 0);
        assert_eq!(cpu.overflow_flag(), 1);
    }

    #[test]
    fn test_sbc_without_carry_borrows_one() {
        let mut cpu = chip();
        cpu.lda_immediate(0x05).unwrap();
        cpu.sbc(0x02).unwrap();
        assert_eq!(cpu.accumulator(), 0x02);
        assert_eq!(cpu.carry_flag(), 1);
    }

    #[test]
    fn test_sbc_zero_minus_max_with_borrow() {
        let mut cpu = chip();
        cpu.sbc(0xFF).unwrap();
        assert_eq!(cpu.accumulator(), 0x00);
        assert_eq!(cpu.carry_flag(), 0);
        assert_eq!(cpu.zero_flag(), 1);
    }

    #[test]
    fn test_flag_instructions_touch_only_their_flag() {
        let mut cpu = chip();
        cpu.set_status(Status(0xFF));
        cpu.clc();
        assert_eq!(cpu.status(), Status(0xFE));
        cpu.clv();
        assert_eq!(cpu.status(), Status(0xBE));
        cpu.sec();
        assert_eq!(cpu.status(), Status(0xBF));
    }
}
