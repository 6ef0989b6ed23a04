//! MAX7219 LED matrix driver (daisy chain)
//!
//! Four MAX7219 chips share one chip-select line and are fed through each
//! other's DOUT → DIN. Every write is one chip-select bracket holding one
//! 16-bit frame per chip:
//!
//! - Control commands repeat the same frame for every chip
//! - Row writes carry one byte of the 32-bit row per chip, farthest chip first
//!
//! The chips latch on the rising edge of chip-select, so the transport's
//! `deselect()` must wait for the bus to drain first.

use heartbeat_core::traits::MatrixDisplay;
use heartbeat_hal::Transport;
use heartbeat_protocol::{Command, Transaction};

/// Errors from the chain driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// The transport failed
    Transport(E),
    /// Row index outside 0-7; nothing was sent
    InvalidRow(u8),
}

/// MAX7219 chain driver
pub struct Max7219<T> {
    transport: T,
}

impl<T: Transport> Max7219<T> {
    /// Wrap a transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Initialise the transport (chip-select ends up deasserted)
    pub fn init(&mut self) -> Result<(), DisplayError<T::Error>> {
        self.transport.init().map_err(DisplayError::Transport)
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Send one transaction inside a chip-select bracket
    ///
    /// Chip-select is released even if a send fails, so the chain is not
    /// left selected; the first error wins.
    fn transmit(&mut self, transaction: &Transaction) -> Result<(), DisplayError<T::Error>> {
        self.transport.select().map_err(DisplayError::Transport)?;

        let sent = transaction
            .frames
            .iter()
            .try_for_each(|frame| self.transport.send(&frame.encode()));
        let released = self.transport.deselect();

        sent.and(released).map_err(DisplayError::Transport)
    }
}

impl<T: Transport> MatrixDisplay for Max7219<T> {
    type Error = DisplayError<T::Error>;

    fn send_command(&mut self, cmd: Command, value: u8) -> Result<(), Self::Error> {
        self.transmit(&Transaction::broadcast(cmd, value))
    }

    fn send_row(&mut self, row: u8, bitmap: u32) -> Result<(), Self::Error> {
        let transaction =
            Transaction::row(row, bitmap).map_err(|_| DisplayError::InvalidRow(row))?;
        self.transmit(&transaction)
    }
}
