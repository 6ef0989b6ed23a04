//! Blue pill wiring
//!
//! | Signal   | Pin |
//! |----------|-----|
//! | CLK      | PA5 |
//! | CS/LOAD  | PA6 |
//! | DIN      | PA7 |

use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::Peripherals;

#[cfg(all(feature = "transport-spi", feature = "transport-bitbang"))]
compile_error!("enable only one of `transport-spi` and `transport-bitbang`");

#[cfg(not(any(feature = "transport-spi", feature = "transport-bitbang")))]
compile_error!("enable one of `transport-spi` or `transport-bitbang`");

#[cfg(feature = "transport-spi")]
mod link {
    use super::*;
    use embassy_stm32::spi::Spi;
    use heartbeat_drivers::PeripheralSpi;
    use heartbeat_hal::spi::SpiConfig;
    use heartbeat_hal_stm32f1::spi::{embassy_config, TxSpi};

    pub type Link = PeripheralSpi<TxSpi<'static>, Output<'static>>;

    /// SPI1 at 1 MHz, mode 0, MSB first, software chip-select
    pub fn build(p: Peripherals) -> Link {
        let config = embassy_config(&SpiConfig::default());
        let spi = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, config);
        let cs = Output::new(p.PA6, Level::High, Speed::Low);
        PeripheralSpi::new(spi, cs)
    }
}

#[cfg(feature = "transport-bitbang")]
mod link {
    use super::*;
    use heartbeat_drivers::BitBang;
    use heartbeat_hal_stm32f1::Pin;

    pub type Link = BitBang<Pin<'static>, Pin<'static>, Pin<'static>>;

    /// Software SPI on the same pins
    pub fn build(p: Peripherals) -> Link {
        let sck = Pin::new(Output::new(p.PA5, Level::Low, Speed::Low));
        let mosi = Pin::new(Output::new(p.PA7, Level::Low, Speed::Low));
        let cs = Pin::new(Output::new(p.PA6, Level::High, Speed::Low));
        BitBang::new(sck, mosi, cs)
    }
}

pub use link::build as transport;
