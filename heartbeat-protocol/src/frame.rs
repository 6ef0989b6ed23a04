//! Frame and transaction encoding for the MAX7219 chain.
//!
//! Frame format (16 bits, MSB first):
//! - ADDRESS (1 byte): register address (0x01..=0x08 rows, 0x09..=0x0F control)
//! - DATA (1 byte): register value
//!
//! Transaction format (one chip-select bracket):
//! - CHAIN_LEN frames, the first one for the farthest chip

use crate::command::{Command, Register};
use crate::CHAIN_LEN;

/// Encoded size of a single frame
pub const FRAME_LEN: usize = 2;

/// Encoded size of a full transaction
pub const TRANSACTION_LEN: usize = FRAME_LEN * CHAIN_LEN;

/// Errors that can occur while building or decoding transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Row index outside 0..ROW_COUNT
    InvalidRow(u8),
    /// Address byte is not a MAX7219 register
    InvalidAddress(u8),
    /// Byte count is not exactly one frame per chip
    InvalidLength(usize),
}

/// A single 16-bit register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Register address byte
    pub address: u8,
    /// Register value
    pub data: u8,
}

impl Frame {
    /// Create a frame for a register
    pub fn new(register: Register, data: u8) -> Self {
        Self {
            address: register.address(),
            data,
        }
    }

    /// Wire bytes, address first
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        [self.address, self.data]
    }

    /// Register this frame addresses
    pub fn register(&self) -> Result<Register, FrameError> {
        Register::from_address(self.address).ok_or(FrameError::InvalidAddress(self.address))
    }
}

/// One chip-select bracket: a frame for every chip in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transaction {
    /// Frames in transmission order (farthest chip first)
    pub frames: [Frame; CHAIN_LEN],
}

impl Transaction {
    /// Same command and value for every chip
    pub fn broadcast(cmd: Command, value: u8) -> Self {
        Self {
            frames: [Frame::new(Register::Control(cmd), value); CHAIN_LEN],
        }
    }

    /// One row of the whole chain
    ///
    /// `row` is 0-based. The most significant byte of `bitmap` goes to the
    /// farthest chip, so it is sent first.
    pub fn row(row: u8, bitmap: u32) -> Result<Self, FrameError> {
        let register = Register::row(row).ok_or(FrameError::InvalidRow(row))?;
        let bytes = bitmap.to_be_bytes();

        let mut frames = [Frame::new(register, 0); CHAIN_LEN];
        for (frame, byte) in frames.iter_mut().zip(bytes) {
            frame.data = byte;
        }

        Ok(Self { frames })
    }

    /// Serialise the transaction into wire order
    pub fn as_bytes(&self) -> [u8; TRANSACTION_LEN] {
        let mut buffer = [0u8; TRANSACTION_LEN];
        for (chunk, frame) in buffer.chunks_exact_mut(FRAME_LEN).zip(self.frames.iter()) {
            chunk.copy_from_slice(&frame.encode());
        }
        buffer
    }

    /// Rebuild a transaction from captured wire bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() != TRANSACTION_LEN {
            return Err(FrameError::InvalidLength(bytes.len()));
        }

        let mut frames = [Frame {
            address: 0,
            data: 0,
        }; CHAIN_LEN];
        for (frame, chunk) in frames.iter_mut().zip(bytes.chunks_exact(FRAME_LEN)) {
            *frame = Frame {
                address: chunk[0],
                data: chunk[1],
            };
            frame.register()?;
        }

        Ok(Self { frames })
    }

    /// If every frame writes the same register, that register
    pub fn common_register(&self) -> Option<Register> {
        let first = self.frames[0];
        if self.frames.iter().all(|f| f.address == first.address) {
            first.register().ok()
        } else {
            None
        }
    }

    /// Reassemble the row bitmap carried by a row transaction
    pub fn row_bitmap(&self) -> Option<(u8, u32)> {
        match self.common_register()? {
            Register::Row(row) => {
                let bytes = [
                    self.frames[0].data,
                    self.frames[1].data,
                    self.frames[2].data,
                    self.frames[3].data,
                ];
                Some((row, u32::from_be_bytes(bytes)))
            }
            Register::Control(_) => None,
        }
    }
}
