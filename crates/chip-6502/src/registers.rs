//! 6502 data registers.

use std::fmt;

/// One of the three data registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator.
    A,
    /// X index register.
    X,
    /// Y index register.
    Y,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::X => "X",
            Self::Y => "Y",
        })
    }
}

/// Index register named by an Absolute,X / Absolute,Y operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    X,
    Y,
}

impl From<Index> for Register {
    fn from(index: Index) -> Self {
        match index {
            Index::X => Register::X,
            Index::Y => Register::Y,
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Register::from(*self), f)
    }
}

/// Snapshot of the data registers.
///
/// Power-up state is all zero. The chip only writes these through
/// `Chip6502::set_register`, so a snapshot is the only public way in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
}

impl Registers {
    #[must_use]
    pub const fn new() -> Self {
        Self { a: 0, x: 0, y: 0 }
    }

    /// Value of the named register.
    #[must_use]
    pub const fn get(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    pub(crate) fn slot_mut(&mut self, register: Register) -> &mut u8 {
        match register {
            Register::A => &mut self.a,
            Register::X => &mut self.x,
            Register::Y => &mut self.y,
        }
    }
}
