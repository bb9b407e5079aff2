//! Observability trait for inspecting component state.
//!
//! Debuggers and disassemblers read register, flag and memory state through
//! this trait. Queries never affect emulation state.

use std::fmt;

/// A dynamically-typed value for state queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 8-bit unsigned integer (registers, cells, flags as 0/1).
    U8(u8),
    /// 32-bit unsigned integer (addresses, sizes).
    U32(u32),
    /// String value.
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => write!(f, "{v:#04X}"),
            Value::U32(v) => write!(f, "{v:#06X}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are hierarchical, separated by dots:
    /// - `a` - Accumulator
    /// - `flags.z` - Zero flag
    ///
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List the fixed query paths.
    fn query_paths(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_hex() {
        assert_eq!(Value::U8(0x0F).to_string(), "0x0F");
        assert_eq!(Value::U32(0x2000).to_string(), "0x2000");
        assert_eq!(Value::from("bit7").to_string(), "bit7");
    }
}
