//! Coarse busy-wait delay
//!
//! The animations are timed in "ticks" rather than real time units. A tick
//! is a fixed amount of spinning (roughly 7 ms on the reference board), so
//! every dwell is an approximate minimum, never a deadline.

/// Approximate nominal length of one tick in milliseconds
pub const TICK_MS: u32 = 7;

/// Blocking delay measured in ticks
pub trait TickDelay {
    /// Spin for about `ticks` ticks
    ///
    /// Cannot be cancelled. `0` returns immediately.
    fn delay_ticks(&mut self, ticks: u32);
}

impl<T: TickDelay + ?Sized> TickDelay for &mut T {
    fn delay_ticks(&mut self, ticks: u32) {
        (**self).delay_ticks(ticks)
    }
}
