//! Cycle-counting tick delay
//!
//! Spins the core with `cortex_m::asm::delay`. Accuracy depends on flash
//! wait states and is only good enough for animation pacing.

use heartbeat_hal::delay::TICK_MS;
use heartbeat_hal::TickDelay;

/// Core clock after `embassy_stm32::init(Default::default())` (HSI)
pub const DEFAULT_SYSCLK_HZ: u32 = 8_000_000;

/// Busy-wait delay in ticks
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    cycles_per_tick: u32,
}

impl CycleDelay {
    /// Delay for a core running at `sysclk_hz`
    pub const fn new(sysclk_hz: u32) -> Self {
        Self {
            cycles_per_tick: sysclk_hz / 1_000 * TICK_MS,
        }
    }
}

impl Default for CycleDelay {
    fn default() -> Self {
        Self::new(DEFAULT_SYSCLK_HZ)
    }
}

impl TickDelay for CycleDelay {
    fn delay_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            cortex_m::asm::delay(self.cycles_per_tick);
        }
    }
}
