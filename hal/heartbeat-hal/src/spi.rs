//! SPI link abstractions
//!
//! Provides the chip-select framed transport the MAX7219 chain is driven
//! through, plus the link configuration shared by every implementation.

/// Blocking byte transport with explicit chip-select
///
/// A transaction is `select()`, one or more `send()` calls, then
/// `deselect()`. Implementations never time out: a link that stops
/// accepting bytes blocks the caller.
pub trait Transport {
    /// Error type for link operations
    type Error;

    /// Configure the link and leave chip-select deasserted
    ///
    /// Call once at boot. Re-initialising is only safe if the
    /// underlying hardware supports it.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Assert chip-select (active low)
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Wait for the link to go idle, then deassert chip-select
    ///
    /// The rising edge latches data in the receiving devices, so it must
    /// never happen while a byte is still being clocked out.
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Queue bytes for transmission
    ///
    /// Blocks until every byte has been accepted by the link. The last
    /// byte may still be on the wire when this returns; `deselect()` is
    /// the completion barrier.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
    /// Bit order within each byte
    pub bit_order: BitOrder,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl SpiConfig {
    /// Build a config from a combined SPI mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        let (polarity, phase) = mode.into();
        self.polarity = polarity;
        self.phase = phase;
        self
    }

    /// Combined SPI mode of this config
    pub fn mode(&self) -> Mode {
        match (self.polarity, self.phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// Order in which bits of a word are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first (MAX7219 expects this)
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
