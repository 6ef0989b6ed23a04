//! Brightness "breathing" curve
//!
//! One sweep walks `v` over 1..=31 and sends intensity
//! `v ^ (0xF * (v >> 4))`. For `v < 16` that is just `v`; once the high
//! nibble is set the low nibble is inverted, so the driver (which only
//! looks at the low nibble) sees the brightness ramp back down. The second
//! half is also held twice as long.

/// Steps in one sweep
pub const PULSE_STEPS: usize = 31;

/// One intensity write and the dwell after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseStep {
    /// Intensity register argument
    pub level: u8,
    /// Dwell after the write, in ticks
    pub dwell: u32,
}

impl PulseStep {
    /// Step for sweep position `v` (1..=31)
    pub const fn at(v: u8) -> Self {
        let upper = v >> 4;
        Self {
            level: v ^ (0x0F * upper),
            dwell: 2u32 << upper,
        }
    }
}

/// Iterator over one full sweep
#[derive(Debug, Clone)]
pub struct PulseCurve {
    next: u8,
}

impl PulseCurve {
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for PulseCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PulseCurve {
    type Item = PulseStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next as usize > PULSE_STEPS {
            return None;
        }
        let step = PulseStep::at(self.next);
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (PULSE_STEPS + 1).saturating_sub(self.next as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PulseCurve {}
