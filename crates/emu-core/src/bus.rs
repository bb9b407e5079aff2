//! Memory bus interface and address resolvers.

use std::fmt;

/// A rejected bus access.
///
/// Nothing is committed when a write fails, so the bus is left exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// A write tried to store a value that does not fit in an 8-bit cell.
    MemoryOverflow { address: u32, value: u16 },
    /// The address is past the end of the addressable space.
    OutOfRange { address: u32, size: usize },
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryOverflow { address, value } => write!(
                f,
                "memory overflow: {value:#X} does not fit in the cell at ${address:04X}"
            ),
            Self::OutOfRange { address, size } => write!(
                f,
                "address ${address:04X} is out of range (memory size {size:#X})"
            ),
        }
    }
}

impl std::error::Error for BusError {}

/// Memory bus interface.
///
/// Components access memory through this trait. Reads are side-effect free;
/// writes validate the value before anything is stored.
///
/// Values are passed as `u16` so that a caller handing over an out-of-range
/// result (e.g. an unguarded increment of `$FF`) is rejected instead of
/// silently truncated.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&self, address: u32) -> Result<u8, BusError>;

    /// Write a byte to the given address.
    fn write(&mut self, address: u32, value: u16) -> Result<(), BusError>;

    /// Read a little-endian pointer: the byte at `address` is the low byte,
    /// the byte at `address + 1` the high byte.
    fn read_pointer(&self, address: u32) -> Result<u32, BusError> {
        let low = self.read(address)?;
        let high = self.read(address.saturating_add(1))?;
        Ok(u32::from(low) | (u32::from(high) << 8))
    }

    /// Absolute,X / Absolute,Y: `base + offset`.
    ///
    /// No wraparound is applied. The sum saturates so an absurd base shows up
    /// as an out-of-range access rather than a panic.
    fn resolve_absolute_indexed(&self, base_address: u32, offset: u8) -> u32 {
        base_address.saturating_add(u32::from(offset))
    }

    /// Indexed indirect: ($nn,X)
    ///
    /// The pointer lives at `address + x_offset`.
    ///
    /// e.g. `LDA ($0C,X)` with X = 3 reads the pointer from `$000F/$0010`.
    /// If those hold `$11` and `$FF` the effective address is `$FF11`.
    fn resolve_indexed_indirect(&self, address: u32, x_offset: u8) -> Result<u32, BusError> {
        self.read_pointer(address.saturating_add(u32::from(x_offset)))
    }

    /// Indirect indexed: ($nn),Y
    ///
    /// The pointer lives at `address`; Y is added to the pointer.
    ///
    /// e.g. `LDA ($02),Y` with `$02/$03` holding `$01/$12` and Y = 2 gives
    /// `$1201 + 2 = $1203`.
    fn resolve_indirect_indexed(&self, address: u32, y_offset: u8) -> Result<u32, BusError> {
        Ok(self.read_pointer(address)?.saturating_add(u32::from(y_offset)))
    }
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn read(&self, address: u32) -> Result<u8, BusError> {
        (**self).read(address)
    }

    fn write(&mut self, address: u32, value: u16) -> Result<(), BusError> {
        (**self).write(address, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat 64KB bus with no mirroring.
    struct TestBus {
        ram: Vec<u8>,
    }

    impl TestBus {
        fn new() -> Self {
            Self {
                ram: vec![0; 0x10000],
            }
        }
    }

    impl Bus for TestBus {
        fn read(&self, address: u32) -> Result<u8, BusError> {
            self.ram
                .get(address as usize)
                .copied()
                .ok_or(BusError::OutOfRange {
                    address,
                    size: self.ram.len(),
                })
        }

        fn write(&mut self, address: u32, value: u16) -> Result<(), BusError> {
            let value = u8::try_from(value).map_err(|_| BusError::MemoryOverflow { address, value })?;
            self.ram[address as usize] = value;
            Ok(())
        }
    }

    #[test]
    fn test_absolute_indexed_adds_offset() {
        let bus = TestBus::new();
        assert_eq!(bus.resolve_absolute_indexed(0x02, 0x01), 0x03);
        assert_eq!(bus.resolve_absolute_indexed(0xFFFF, 0x01), 0x10000);
    }

    #[test]
    fn test_pointer_is_little_endian() {
        let mut bus = TestBus::new();
        bus.ram[0x10] = 0x02;
        bus.ram[0x11] = 0x22;
        assert_eq!(bus.read_pointer(0x10), Ok(0x2202));
    }

    #[test]
    fn test_indexed_indirect() {
        let mut bus = TestBus::new();
        bus.ram[0x0F] = 0x11;
        bus.ram[0x10] = 0xFF;
        assert_eq!(bus.resolve_indexed_indirect(0x0C, 0x03), Ok(0xFF11));
    }

    #[test]
    fn test_indirect_indexed() {
        let mut bus = TestBus::new();
        bus.ram[0x02] = 0x01;
        bus.ram[0x03] = 0x12;
        assert_eq!(bus.resolve_indirect_indexed(0x02, 0x02), Ok(0x1203));
    }

    #[test]
    fn test_pointer_read_past_end_is_out_of_range() {
        let bus = TestBus::new();
        assert_eq!(
            bus.resolve_indirect_indexed(0xFFFF, 0),
            Err(BusError::OutOfRange {
                address: 0x10000,
                size: 0x10000
            })
        );
    }

    #[test]
    fn test_mut_ref_is_a_bus() {
        fn poke<B: Bus>(mut bus: B) {
            bus.write(0x20, 0x42).unwrap();
        }

        let mut bus = TestBus::new();
        poke(&mut bus);
        assert_eq!(bus.read(0x20), Ok(0x42));
    }
}
