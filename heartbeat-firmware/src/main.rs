//! Heartbeat Firmware
//!
//! Heart animation on an 8x32 LED matrix made of four daisy-chained
//! MAX7219 drivers, for STM32F103C8 boards.
//!
//! After boot the show runs once through its script and then pulses the
//! finished heart forever. There is no input and nothing persists across
//! resets.

#![no_std]
#![no_main]

mod board;

use defmt::*;
use embassy_executor::Spawner;
use heartbeat_core::Show;
use heartbeat_drivers::Max7219;
use heartbeat_hal_stm32f1::CycleDelay;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Heartbeat firmware starting...");

    let p = embassy_stm32::init(Default::default());

    let mut display = Max7219::new(board::transport(p));
    if let Err(e) = display.init() {
        error!("Failed to set up transport: {:?}", e);
    }

    let mut show = Show::new(display, CycleDelay::default());

    match show.boot() {
        Ok(()) => info!("Driver chain booted"),
        Err(e) => error!("Failed to boot driver chain: {:?}", e),
    }

    for phase in show.script() {
        debug!("Phase {:?}", phase);
        if let Err(e) = show.run_phase(phase) {
            warn!("Phase {:?} failed: {:?}", phase, e);
        }
    }

    info!("Show complete, idling");

    loop {
        if let Err(e) = show.idle() {
            warn!("Pulse failed: {:?}", e);
        }
    }
}
