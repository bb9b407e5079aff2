use std::fmt;

use emu_core::BusError;

use crate::Register;

/// A rejected instruction.
///
/// The failing write is never committed; registers, flags set before the
/// failure, and memory stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// A register write was handed a value that does not fit in 8 bits.
    RegisterOverflow { register: Register, value: u16 },
    /// The bus rejected a read or write.
    Bus(BusError),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisterOverflow { register, value } => {
                write!(f, "register overflow: {value:#X} does not fit in {register}")
            }
            Self::Bus(err) => write!(f, "bus error: {err}"),
        }
    }
}

impl std::error::Error for CpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RegisterOverflow { .. } => None,
            Self::Bus(err) => Some(err),
        }
    }
}

impl From<BusError> for CpuError {
    fn from(err: BusError) -> Self {
        Self::Bus(err)
    }
}
