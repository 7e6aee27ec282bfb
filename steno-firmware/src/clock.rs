use embassy_time::Instant;
use steno_common::Clock;

/// Milliseconds since boot from the embassy time driver, truncated to 32 bits.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
