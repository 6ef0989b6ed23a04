//! Bit-banged SPI transport
//!
//! Drives clock, data and chip-select directly as GPIO outputs. Every bit
//! is shifted out synchronously, so the bus is already idle when `send`
//! returns and `deselect` only has to raise chip-select.
//!
//! The clock rate is whatever the pin writes achieve, which on a
//! Cortex-M3 stays well below the MAX7219's 10 MHz limit. No half-period
//! wait is inserted.

use core::convert::Infallible;

use heartbeat_hal::spi::{BitOrder, Phase, Polarity, SpiConfig};
use heartbeat_hal::{OutputPin, Transport};

/// SPI transport on three GPIO outputs
pub struct BitBang<SCK, MOSI, CS> {
    sck: SCK,
    mosi: MOSI,
    cs: CS,
    config: SpiConfig,
}

impl<SCK, MOSI, CS> BitBang<SCK, MOSI, CS>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    CS: OutputPin,
{
    /// Create a mode 0, MSB-first transport
    pub fn new(sck: SCK, mosi: MOSI, cs: CS) -> Self {
        Self::with_config(sck, mosi, cs, SpiConfig::default())
    }

    /// Create a transport with explicit clock polarity, phase and bit order
    ///
    /// `config.frequency` is ignored.
    pub fn with_config(sck: SCK, mosi: MOSI, cs: CS, config: SpiConfig) -> Self {
        Self {
            sck,
            mosi,
            cs,
            config,
        }
    }

    /// Give back the pins
    pub fn release(self) -> (SCK, MOSI, CS) {
        (self.sck, self.mosi, self.cs)
    }

    fn clock_idle(&mut self) {
        match self.config.polarity {
            Polarity::IdleLow => self.sck.set_low(),
            Polarity::IdleHigh => self.sck.set_high(),
        }
    }

    fn clock_active(&mut self) {
        match self.config.polarity {
            Polarity::IdleLow => self.sck.set_high(),
            Polarity::IdleHigh => self.sck.set_low(),
        }
    }

    fn shift_out(&mut self, byte: u8) {
        for i in 0..8 {
            let bit = match self.config.bit_order {
                BitOrder::MsbFirst => byte & (0x80 >> i) != 0,
                BitOrder::LsbFirst => byte & (0x01 << i) != 0,
            };

            match self.config.phase {
                // Data valid before the leading edge, sampled on it
                Phase::CaptureOnFirstTransition => {
                    self.mosi.set_state(bit);
                    self.clock_active();
                    self.clock_idle();
                }
                // Data changes on the leading edge, sampled on the trailing one
                Phase::CaptureOnSecondTransition => {
                    self.clock_active();
                    self.mosi.set_state(bit);
                    self.clock_idle();
                }
            }
        }
    }
}

impl<SCK, MOSI, CS> Transport for BitBang<SCK, MOSI, CS>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    CS: OutputPin,
{
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Infallible> {
        self.cs.set_high();
        self.clock_idle();
        self.mosi.set_low();
        Ok(())
    }

    fn select(&mut self) -> Result<(), Infallible> {
        self.cs.set_low();
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Infallible> {
        self.cs.set_high();
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        for &byte in bytes {
            self.shift_out(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heartbeat_hal::spi::Mode;
    use heapless::Vec;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Sck,
        Mosi,
        Cs,
    }

    /// Shared record of (line, level) writes
    type Trace = RefCell<Vec<(Line, bool), 1024>>;

    struct TracePin<'a> {
        line: Line,
        high: bool,
        trace: &'a Trace,
    }

    impl OutputPin for TracePin<'_> {
        fn set_high(&mut self) {
            self.high = true;
            let _ = self.trace.borrow_mut().push((self.line, true));
        }

        fn set_low(&mut self) {
            self.high = false;
            let _ = self.trace.borrow_mut().push((self.line, false));
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn pins(trace: &Trace) -> (TracePin<'_>, TracePin<'_>, TracePin<'_>) {
        let pin = |line| TracePin {
            line,
            high: false,
            trace,
        };
        (pin(Line::Sck), pin(Line::Mosi), pin(Line::Cs))
    }

    /// Replay the trace like a mode 0 receiver: sample data on rising clock
    /// edges while chip-select is low, latch on the chip-select rising edge.
    fn decode_mode0(trace: &Trace) -> Vec<Vec<u8, 16>, 8> {
        let mut transactions = Vec::new();
        let (mut sck, mut mosi, mut cs) = (false, false, true);
        let mut bits: Vec<bool, 128> = Vec::new();

        for &(line, level) in trace.borrow().iter() {
            match line {
                Line::Mosi => mosi = level,
                Line::Sck => {
                    if !sck && level && !cs {
                        bits.push(mosi).unwrap();
                    }
                    sck = level;
                }
                Line::Cs => {
                    if cs && !level {
                        bits.clear();
                    }
                    if !cs && level {
                        let bytes = bits
                            .chunks(8)
                            .map(|c| c.iter().fold(0u8, |acc, &b| acc << 1 | b as u8))
                            .collect();
                        transactions.push(bytes).unwrap();
                    }
                    cs = level;
                }
            }
        }
        transactions
    }

    #[test]
    fn test_init_idles_lines() {
        let trace = Trace::default();
        let (sck, mosi, cs) = pins(&trace);
        let mut spi = BitBang::new(sck, mosi, cs);
        spi.init().unwrap();

        let (sck, mosi, cs) = spi.release();
        assert!(cs.is_set_high());
        assert!(sck.is_set_low());
        assert!(mosi.is_set_low());
    }

    #[test]
    fn test_mode0_msb_first_bytes() {
        let trace = Trace::default();
        let (sck, mosi, cs) = pins(&trace);
        let mut spi = BitBang::new(sck, mosi, cs);

        spi.init().unwrap();
        spi.select().unwrap();
        spi.send(&[0x04, 0xAA]).unwrap();
        spi.send(&[0x04, 0x0F]).unwrap();
        spi.deselect().unwrap();

        let transactions = decode_mode0(&trace);
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].as_slice(), &[0x04, 0xAA, 0x04, 0x0F]);
    }

    #[test]
    fn test_clock_returns_idle_before_deselect() {
        let trace = Trace::default();
        let (sck, mosi, cs) = pins(&trace);
        let mut spi = BitBang::new(sck, mosi, cs);

        spi.init().unwrap();
        spi.select().unwrap();
        spi.send(&[0xFF]).unwrap();
        spi.deselect().unwrap();

        let trace = trace.borrow();
        let last_clock = trace.iter().rev().find(|(line, _)| *line == Line::Sck);
        assert_eq!(last_clock, Some(&(Line::Sck, false)));
        assert_eq!(trace.last(), Some(&(Line::Cs, true)));
        // 8 bits, two clock edges each
        assert_eq!(
            trace.iter().filter(|(line, _)| *line == Line::Sck).count(),
            1 + 16
        );
    }

    #[test]
    fn test_lsb_first() {
        let trace = Trace::default();
        let (sck, mosi, cs) = pins(&trace);
        let config = SpiConfig {
            bit_order: BitOrder::LsbFirst,
            ..SpiConfig::default()
        };
        let mut spi = BitBang::with_config(sck, mosi, cs, config);

        spi.init().unwrap();
        spi.select().unwrap();
        spi.send(&[0x01]).unwrap();
        spi.deselect().unwrap();

        // A MSB-first receiver sees the bits reversed
        assert_eq!(decode_mode0(&trace)[0].as_slice(), &[0x80]);
    }

    #[test]
    fn test_mode3_idles_high() {
        let trace = Trace::default();
        let (sck, mosi, cs) = pins(&trace);
        let config = SpiConfig::default().with_mode(Mode::Mode3);
        let mut spi = BitBang::with_config(sck, mosi, cs, config);

        spi.init().unwrap();
        spi.select().unwrap();
        spi.send(&[0x55]).unwrap();
        spi.deselect().unwrap();

        let (sck, _, _) = spi.release();
        assert!(sck.is_set_high());
    }

    proptest! {
        #[test]
        fn prop_mode0_bytes_arrive_intact(a in any::<u8>(), b in any::<u8>()) {
            let trace = Trace::default();
            let (sck, mosi, cs) = pins(&trace);
            let mut spi = BitBang::new(sck, mosi, cs);

            spi.init().unwrap();
            spi.select().unwrap();
            spi.send(&[a, b]).unwrap();
            spi.deselect().unwrap();

            let transactions = decode_mode0(&trace);
            prop_assert_eq!(transactions[0].as_slice(), &[a, b]);
        }
    }
}
