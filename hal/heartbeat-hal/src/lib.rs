//! Heartbeat Hardware Abstraction Layer
//!
//! This crate defines the thin hardware shim the display code runs on:
//! output pins, a chip-select framed byte transport, and a coarse
//! busy-wait delay. Chip-specific crates implement these traits so the
//! MAX7219 driver and the animations never touch registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  heartbeat-core / heartbeat-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  heartbeat-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ PeripheralSpi │       │    BitBang    │
//! │ (SPI1 block)  │       │  (GPIO pins)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`spi::Transport`] - Chip-select framed byte transmission
//! - [`delay::TickDelay`] - Approximate busy-wait in coarse ticks

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::TickDelay;
pub use gpio::OutputPin;
pub use spi::Transport;
