//! GPIO adapter for STM32F1
//!
//! Wraps an embassy `Output` so it can drive the bit-banged transport.

use embassy_stm32::gpio::Output;
use heartbeat_hal::OutputPin;

/// Output pin usable through `heartbeat_hal::OutputPin`
pub struct Pin<'d> {
    output: Output<'d>,
}

impl<'d> Pin<'d> {
    /// Wrap an already configured output
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl OutputPin for Pin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
