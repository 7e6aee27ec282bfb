/// Monotonic millisecond counter.
///
/// The reading is a free running 32 bit counter, so it wraps roughly every 49.7 days. Compare
/// readings only through [reached] (or `wrapping_sub`), never with `<`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// True once `now` is at or past `deadline`. Valid while the two are less than 2^31 ms apart.
pub fn reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}
