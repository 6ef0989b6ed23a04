//! Show configuration
//!
//! Everything here is compile-time; the firmware has no runtime settings.
//! `Default` reproduces the reference animation timings.

use heartbeat_protocol::ROW_COUNT;

/// Timing and sequencing of the heart show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShowConfig {
    /// First frame index of the single heart animation
    pub one_heart_start: u8,
    /// First frame index of the converging hearts animation
    pub double_heart_start: u8,
    /// First frame index of the merge animation
    pub merge_start: u8,
    /// Pulses after the single heart
    pub pulses_after_one_heart: u32,
    /// Pulses after the converging hearts
    pub pulses_after_double_heart: u32,
    /// Pulses per idle iteration
    pub idle_pulses: u32,
    /// Dwell after every flushed frame (ticks)
    pub frame_dwell: u32,
    /// Dwell after a full brightness sweep (ticks)
    pub pulse_pause: u32,
    /// Intensity written at boot (0x00-0x0F, upper bits dropped)
    pub boot_intensity: u8,
    /// Scanned rows (clamped to 1-8)
    pub scan_rows: u8,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            one_heart_start: 15,
            double_heart_start: 7,
            merge_start: 7,
            pulses_after_one_heart: 1,
            pulses_after_double_heart: 2,
            idle_pulses: 1,
            frame_dwell: 16,
            pulse_pause: 200,
            boot_intensity: 0x00,
            scan_rows: ROW_COUNT as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_timings() {
        let config = ShowConfig::default();
        assert_eq!(
            (config.one_heart_start, config.double_heart_start, config.merge_start),
            (15, 7, 7)
        );
        assert_eq!(config.frame_dwell, 16);
        assert_eq!(config.pulse_pause, 200);
        assert_eq!(config.scan_rows as usize, ROW_COUNT);
    }
}
