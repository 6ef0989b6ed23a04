//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in heartbeat-core and heartbeat-hal:
//!
//! - MAX7219 chain driver (any [`heartbeat_hal::Transport`])
//! - Peripheral SPI transport (any embedded-hal 1.0 `SpiBus` + chip-select pin)
//! - Bit-banged transport (three GPIO outputs)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod max7219;
pub mod transport;

pub use max7219::{DisplayError, Max7219};
pub use transport::{BitBang, PeripheralSpi, TransportError};
