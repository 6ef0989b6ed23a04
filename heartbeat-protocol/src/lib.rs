//! MAX7219 wire protocol for a chain of LED matrix drivers
//!
//! The matrix is four MAX7219 chips wired in series. While chip-select is
//! low they behave as one long shift register; on the rising edge each chip
//! latches the last 16 bits it holds. Every transaction therefore carries
//! exactly one 2-byte frame per chip.
//!
//! ```text
//!  MCU ──DIN──▶ [chip 3] ──▶ [chip 2] ──▶ [chip 1] ──▶ [chip 0]
//!               nearest                               farthest
//! ```
//!
//! The first frame sent ends up in the farthest chip, so row data is sent
//! most-significant byte first.
//!
//! This crate is `no_std` and only builds byte sequences; the transport that
//! clocks them out lives elsewhere.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod frame;

pub use command::{Command, Register};
pub use frame::{Frame, FrameError, Transaction, TRANSACTION_LEN};

/// Number of MAX7219 chips in the chain
pub const CHAIN_LEN: usize = 4;

/// Rows per matrix (digit registers 1..=8)
pub const ROW_COUNT: usize = 8;

/// Columns across the whole chain
pub const COLUMN_COUNT: usize = CHAIN_LEN * 8;
