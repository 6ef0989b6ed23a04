//! Peripheral SPI transport
//!
//! Uses a hardware SPI block through the embedded-hal 1.0 `SpiBus` trait
//! and a plain GPIO as software chip-select. The bus must already be set
//! up for mode 0, MSB first, 8-bit words; the board crate does that when it
//! builds the peripheral.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heartbeat_hal::Transport;

/// Error from the SPI transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<B, P> {
    /// The SPI bus reported an error
    Bus(B),
    /// The chip-select pin could not be driven
    Pin(P),
}

/// Hardware SPI plus a chip-select GPIO
pub struct PeripheralSpi<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> PeripheralSpi<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Create a new transport from a configured bus and a chip-select pin
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Give back the bus and the pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for PeripheralSpi<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = TransportError<SPI::Error, CS::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(TransportError::Pin)
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(TransportError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        // flush() spins on the busy flag until the last byte is out.
        // Chip-select goes high even if it fails so the next bracket starts clean.
        let flushed = self.spi.flush();
        let released = self.cs.set_high();

        flushed.map_err(TransportError::Bus)?;
        released.map_err(TransportError::Pin)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes).map_err(TransportError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorKind, ErrorType};
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Write(u8),
        Flush,
        CsLow,
        CsHigh,
    }

    type Log = RefCell<Vec<Event, 64>>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    impl embedded_hal::spi::Error for BusFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Overrun
        }
    }

    struct MockBus<'a> {
        log: &'a Log,
        fail_flush: bool,
    }

    impl ErrorType for MockBus<'_> {
        type Error = BusFault;
    }

    impl SpiBus<u8> for MockBus<'_> {
        fn read(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), BusFault> {
            let mut log = self.log.borrow_mut();
            for &word in words {
                log.push(Event::Write(word)).map_err(|_| BusFault)?;
            }
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), BusFault> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
            self.write(words)?;
            words.fill(0);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), BusFault> {
            if self.fail_flush {
                return Err(BusFault);
            }
            self.log.borrow_mut().push(Event::Flush).map_err(|_| BusFault)
        }
    }

    struct MockCs<'a> {
        log: &'a Log,
    }

    impl embedded_hal::digital::ErrorType for MockCs<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockCs<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let _ = self.log.borrow_mut().push(Event::CsLow);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            let _ = self.log.borrow_mut().push(Event::CsHigh);
            Ok(())
        }
    }

    fn transport(log: &Log, fail_flush: bool) -> PeripheralSpi<MockBus<'_>, MockCs<'_>> {
        PeripheralSpi::new(MockBus { log, fail_flush }, MockCs { log })
    }

    #[test]
    fn test_init_deasserts_cs() {
        let log = Log::default();
        transport(&log, false).init().unwrap();
        assert_eq!(log.borrow().as_slice(), &[Event::CsHigh]);
    }

    #[test]
    fn test_flush_before_cs_release() {
        let log = Log::default();
        let mut spi = transport(&log, false);

        spi.select().unwrap();
        spi.send(&[0x01, 0x80]).unwrap();
        spi.deselect().unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::CsLow,
                Event::Write(0x01),
                Event::Write(0x80),
                Event::Flush,
                Event::CsHigh,
            ]
        );
    }

    #[test]
    fn test_flush_error_still_releases_cs() {
        let log = Log::default();
        let mut spi = transport(&log, true);

        spi.select().unwrap();
        spi.send(&[0x0C, 0x01]).unwrap();
        assert_eq!(spi.deselect(), Err(TransportError::Bus(BusFault)));
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::CsLow,
                Event::Write(0x0C),
                Event::Write(0x01),
                Event::CsHigh,
            ]
        );

        // The next bracket starts from a released line
        spi.select().unwrap();
        assert_eq!(log.borrow().last(), Some(&Event::CsLow));
    }
}
