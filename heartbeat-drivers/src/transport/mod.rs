//! Transports for the MAX7219 chain
//!
//! Two interchangeable ways to clock frames out. The driver only sees
//! [`heartbeat_hal::Transport`], so the choice is made once at board setup.

mod bitbang;
mod spi;

pub use bitbang::BitBang;
pub use spi::{PeripheralSpi, TransportError};
