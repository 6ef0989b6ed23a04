//! Show orchestration
//!
//! Sequences the whole display program: boot the driver chain, play the
//! three heart animations with brightness pulses in between, fill the
//! outline, then pulse. The firmware loops [`Show::idle`] forever.
//!
//! Every operation blocks until the display and the delay return. Errors
//! abort the current operation and are handed back; nothing retries.

use heartbeat_hal::TickDelay;
use heartbeat_protocol::{Command, ROW_COUNT};

use crate::animation::{
    DoubleHeart, FrameSequence, MergeHearts, OneHeart, PulseCurve, RowTransform,
};
use crate::config::ShowConfig;
use crate::image::ImageBuffer;
use crate::traits::{MatrixDisplay, MatrixDisplayExt};

/// One entry of the animation script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Single heart closing in to the center
    OneHeart,
    /// Two hearts converging
    DoubleHeart,
    /// The two hearts sliding into one
    MergeHearts,
    /// Brightness sweeps, repeated the given number of times
    Pulse(u32),
    /// Fill the outline downwards into a solid heart
    FillSilhouette,
}

/// Number of phases in the script
pub const SCRIPT_LEN: usize = 6;

/// The heart show driving a matrix display
pub struct Show<D, W> {
    display: D,
    delay: W,
    image: ImageBuffer,
    config: ShowConfig,
}

impl<D, W> Show<D, W>
where
    D: MatrixDisplay,
    W: TickDelay,
{
    /// Create a show with the default timings
    pub fn new(display: D, delay: W) -> Self {
        Self::with_config(display, delay, ShowConfig::default())
    }

    /// Create a show with custom timings
    pub fn with_config(display: D, delay: W, config: ShowConfig) -> Self {
        Self {
            display,
            delay,
            image: ImageBuffer::new(),
            config,
        }
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    /// Current image buffer (unmirrored)
    pub fn image(&self) -> &ImageBuffer {
        &self.image
    }

    /// Give back the display and delay
    pub fn into_parts(self) -> (D, W) {
        (self.display, self.delay)
    }

    /// Bring the driver chain into a known state
    ///
    /// Test mode off, scan all rows, lowest brightness, raw data, then
    /// leave shutdown. Nothing else is sent before this completes.
    pub fn boot(&mut self) -> Result<(), D::Error> {
        self.display.set_test_mode(false)?;
        self.display.set_scan_rows(self.config.scan_rows)?;
        self.display.set_brightness(self.config.boot_intensity)?;
        self.display.set_decode(false)?;
        self.display.set_power(true)
    }

    /// Send the whole image buffer, then hold it for one frame dwell
    pub fn flush(&mut self) -> Result<(), D::Error> {
        flush_frame(
            &mut self.display,
            &mut self.delay,
            self.config.frame_dwell,
            &self.image,
        )
    }

    /// Run an animation from frame `start` down to frame 0
    ///
    /// Each frame is computed for all rows before it is flushed.
    pub fn step<T: RowTransform>(&mut self, start: u8, transform: T) -> Result<(), D::Error> {
        let dwell = self.config.frame_dwell;
        for (_frame, image) in FrameSequence::new(&mut self.image, start, transform) {
            flush_frame(&mut self.display, &mut self.delay, dwell, &image)?;
        }
        Ok(())
    }

    /// OR each row into the one below it, one row per frame
    ///
    /// Turns the heart outline into a solid shape over six frames.
    pub fn fill_silhouette(&mut self) -> Result<(), D::Error> {
        for row in 1..ROW_COUNT - 1 {
            self.image.merge_from_above(row);
            self.flush()?;
        }
        Ok(())
    }

    /// Sweep the brightness up and back down `count` times
    pub fn pulse(&mut self, count: u32) -> Result<(), D::Error> {
        for _ in 0..count {
            for step in PulseCurve::new() {
                self.display.send_command(Command::Intensity, step.level)?;
                self.delay.delay_ticks(step.dwell);
            }
            self.delay.delay_ticks(self.config.pulse_pause);
        }
        Ok(())
    }

    /// The animation script, in playing order
    pub fn script(&self) -> [Phase; SCRIPT_LEN] {
        [
            Phase::OneHeart,
            Phase::Pulse(self.config.pulses_after_one_heart),
            Phase::DoubleHeart,
            Phase::Pulse(self.config.pulses_after_double_heart),
            Phase::MergeHearts,
            Phase::FillSilhouette,
        ]
    }

    /// Run a single phase
    pub fn run_phase(&mut self, phase: Phase) -> Result<(), D::Error> {
        match phase {
            Phase::OneHeart => self.step(self.config.one_heart_start, OneHeart),
            Phase::DoubleHeart => self.step(self.config.double_heart_start, DoubleHeart),
            Phase::MergeHearts => self.step(self.config.merge_start, MergeHearts),
            Phase::Pulse(count) => self.pulse(count),
            Phase::FillSilhouette => self.fill_silhouette(),
        }
    }

    /// Play the whole script, stopping at the first error
    pub fn play(&mut self) -> Result<(), D::Error> {
        for phase in self.script() {
            self.run_phase(phase)?;
        }
        Ok(())
    }

    /// One iteration of the idle state
    pub fn idle(&mut self) -> Result<(), D::Error> {
        self.pulse(self.config.idle_pulses)
    }
}

fn flush_frame<D, W>(
    display: &mut D,
    delay: &mut W,
    dwell: u32,
    image: &ImageBuffer,
) -> Result<(), D::Error>
where
    D: MatrixDisplay,
    W: TickDelay,
{
    display.draw(image)?;
    delay.delay_ticks(dwell);
    Ok(())
}
