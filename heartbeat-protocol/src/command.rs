//! MAX7219 register map
//!
//! See the MAX7219 datasheet, table 2 ("Register Address Map").

use crate::ROW_COUNT;

/// Control registers that are written identically to every chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// No operation, used to pad frames for chips that should not change
    NoOp = 0x00,
    /// BCD decode per digit (0x00 = raw segment data)
    DecodeMode = 0x09,
    /// Intensity (brightness), 0x00..=0x0F
    Intensity = 0x0A,
    /// Number of scanned rows minus one
    ScanLimit = 0x0B,
    /// 0x00 = shutdown, 0x01 = normal operation
    Shutdown = 0x0C,
    /// 0x01 = all LEDs on, 0x00 = normal operation
    DisplayTest = 0x0F,
}

impl Command {
    /// Register address of this command
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Command::NoOp),
            0x09 => Ok(Command::DecodeMode),
            0x0A => Ok(Command::Intensity),
            0x0B => Ok(Command::ScanLimit),
            0x0C => Ok(Command::Shutdown),
            0x0F => Ok(Command::DisplayTest),
            other => Err(other),
        }
    }
}

/// Any addressable MAX7219 register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// A control register
    Control(Command),
    /// Digit register for a 0-based row (wire address `row + 1`)
    ///
    /// Rows past the last one address the no-op register, which every
    /// chip ignores. Use [`Register::row`] to reject them instead.
    Row(u8),
}

impl Register {
    /// Register for a 0-based row, or `None` if the row does not exist
    pub fn row(index: u8) -> Option<Self> {
        if (index as usize) < ROW_COUNT {
            Some(Register::Row(index))
        } else {
            None
        }
    }

    /// Address byte sent on the wire
    pub fn address(self) -> u8 {
        match self {
            Register::Control(cmd) => cmd.opcode(),
            Register::Row(index) if (index as usize) < ROW_COUNT => index + 1,
            Register::Row(_) => Command::NoOp.opcode(),
        }
    }

    /// Decode an address byte received on the wire
    pub fn from_address(address: u8) -> Option<Self> {
        match address {
            0x01..=0x08 => Some(Register::Row(address - 1)),
            other => Command::try_from(other).ok().map(Register::Control),
        }
    }
}
