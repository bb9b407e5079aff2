//! Core traits and types shared by the 6502 execution core.
//!
//! Chips talk to memory through [`Bus`] and expose their state through
//! [`Observable`]. Nothing in here knows about a particular chip.

mod bus;
mod observable;

pub use bus::{Bus, BusError};
pub use observable::{Observable, Value};
