//! SPI setup for STM32F1
//!
//! The matrix chain hangs off SPI1 with the default pinout:
//! PA5 = SCK (CLK), PA7 = MOSI (DIN), PA6 = chip-select (CS/LOAD) as a
//! plain output. MISO is not connected.

use embassy_stm32::mode::Blocking;
use embassy_stm32::spi::mode::Master;
use embassy_stm32::spi::{self, Spi, MODE_0, MODE_1, MODE_2, MODE_3};
use embassy_stm32::time::Hertz;
use heartbeat_hal::spi::{BitOrder, Mode, SpiConfig};

/// Convert a link configuration into an embassy SPI configuration
pub fn embassy_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = Hertz(config.frequency);
    out.mode = match config.mode() {
        Mode::Mode0 => MODE_0,
        Mode::Mode1 => MODE_1,
        Mode::Mode2 => MODE_2,
        Mode::Mode3 => MODE_3,
    };
    out.bit_order = match config.bit_order {
        BitOrder::MsbFirst => spi::BitOrder::MsbFirst,
        BitOrder::LsbFirst => spi::BitOrder::LsbFirst,
    };
    out
}

/// Blocking, transmit-only SPI bus
pub type TxSpi<'d> = Spi<'d, Blocking, Master>;
