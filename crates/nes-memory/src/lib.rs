//! Flat memory with one mirroring rule.
//!
//! Address map:
//! - `$0000-$07FF`: mirrored upward at `address + $0801`
//! - `$0800`: not mirrored
//! - `$0801-$2000`: mirrored downward at `address - $0801`
//! - `$2001-`: plain storage
//!
//! The two ranges are not a fixed 2 KiB mask: a write to `$1500` lands on
//! `$0CFF` as well, which is itself outside the lower range. Every write
//! touches at most two cells.

use std::ops::RangeInclusive;

use emu_core::{Bus, BusError, Observable, Value};

/// Distance between an address and its mirror.
pub const MIRROR_OFFSET: u32 = 0x0801;

/// Addresses mirrored upward to `address + MIRROR_OFFSET`.
pub const LOWER_MIRROR: RangeInclusive<u32> = 0x0000..=0x07FF;

/// Addresses mirrored downward to `address - MIRROR_OFFSET`.
pub const UPPER_MIRROR: RangeInclusive<u32> = 0x0801..=0x2000;

/// Byte-addressable memory, zeroed at power-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NesMemory {
    ram: Vec<u8>,
}

impl NesMemory {
    /// Create `size` zeroed cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { ram: vec![0; size] }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ram.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ram.is_empty()
    }

    /// Raw view of every cell.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }

    /// Write `data` starting at `address`, one cell at a time.
    ///
    /// Each byte goes through [`Bus::write`], so mirroring applies. Stops at
    /// the first failing cell; earlier cells stay written.
    pub fn load(&mut self, address: u32, data: &[u8]) -> Result<(), BusError> {
        for (offset, &byte) in (0u32..).zip(data) {
            self.write(address.saturating_add(offset), u16::from(byte))?;
        }
        Ok(())
    }

    /// The paired address for `address`, if it has one.
    #[must_use]
    pub fn mirror_of(address: u32) -> Option<u32> {
        if LOWER_MIRROR.contains(&address) {
            Some(address + MIRROR_OFFSET)
        } else if UPPER_MIRROR.contains(&address) {
            Some(address - MIRROR_OFFSET)
        } else {
            None
        }
    }

    fn index(&self, address: u32) -> Result<usize, BusError> {
        let index = address as usize;
        if index < self.ram.len() {
            Ok(index)
        } else {
            Err(BusError::OutOfRange {
                address,
                size: self.ram.len(),
            })
        }
    }
}

impl Bus for NesMemory {
    fn read(&self, address: u32) -> Result<u8, BusError> {
        Ok(self.ram[self.index(address)?])
    }

    fn write(&mut self, address: u32, value: u16) -> Result<(), BusError> {
        let Ok(byte) = u8::try_from(value) else {
            log::debug!("rejected write of {value:#X} to ${address:04X}");
            return Err(BusError::MemoryOverflow { address, value });
        };
        let index = self.index(address)?;
        self.ram[index] = byte;

        // A memory smaller than the mirror window simply has no paired cell.
        if let Some(mirror) = Self::mirror_of(address) {
            if let Some(cell) = self.ram.get_mut(mirror as usize) {
                *cell = byte;
                log::trace!("mirrored ${address:04X} -> ${mirror:04X} = {byte:#04X}");
            }
        }
        Ok(())
    }
}

impl Observable for NesMemory {
    /// `size`, or a cell as `$XXXX` (hex).
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "size" => u32::try_from(self.ram.len()).ok().map(Value::U32),
            _ => {
                let hex = path.strip_prefix('$')?;
                let address = u32::from_str_radix(hex, 16).ok()?;
                self.read(address).ok().map(Value::U8)
            }
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["size"]
    }
}
