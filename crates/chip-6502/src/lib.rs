//! 6502 register, flag and ALU execution core.
//!
//! The core executes already-decoded instructions: an opcode dispatcher
//! calls `lda_indexed_indirect(0x0C)` rather than feeding it `A1 0C`. It
//! covers loads, stores, ADC/SBC, increments and decrements, and the carry
//! and overflow flag instructions. There is no program counter, stack,
//! branching, interrupt handling, cycle timing or decimal mode.
//!
//! # Flag rules
//!
//! By default the core uses a simplified rule set (see [`Behavior`]):
//! - N is set only when a register receives `$FF`
//! - V is set when ADC/SBC changes bit 7 of the accumulator
//! - ADC clamps sums above `$FF` to `$FF`
//!
//! [`Behavior::nmos`] selects the rules real NMOS silicon follows.
//!
//! # Example
//!
//! ```
//! use chip_6502::Chip6502;
//! use emu_core::Bus;
//! use nes_memory::NesMemory;
//!
//! let mut cpu = Chip6502::new(NesMemory::new(0xFFFF));
//! cpu.bus_mut().write(0x0F, 0x11).unwrap();
//! cpu.bus_mut().write(0x10, 0xFF).unwrap();
//! cpu.bus_mut().write(0xFF11, 0x37).unwrap();
//!
//! cpu.ldx_immediate(0x03).unwrap();
//! cpu.lda_indexed_indirect(0x0C).unwrap();
//! assert_eq!(cpu.accumulator(), 0x37);
//! ```

mod addressing;
mod alu;
mod behavior;
mod cpu;
mod error;
pub mod flags;
mod inc_dec;
mod load_store;
mod registers;

pub use addressing::Mode;
pub use behavior::{Behavior, NegativeRule, OverflowRule, SumRule};
pub use cpu::Chip6502;
pub use error::CpuError;
pub use flags::Status;
pub use registers::{Index, Register, Registers};
