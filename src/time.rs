//! Time abstraction for platform-agnostic timing.
//!
//! Buttons only need a free-running millisecond counter. The counter is
//! expected to wrap at 32 bits (about 49.7 days), which is what most HAL
//! tick counters do.

/// Trait for abstracting time sources.
pub trait TimeSource {
    /// Returns milliseconds since boot, wrapping at `u32::MAX`.
    fn now_ms(&self) -> u32;

    /// Returns microseconds since boot, wrapping at `u32::MAX`.
    ///
    /// The default derives it from [`now_ms`](Self::now_ms). Override it if
    /// your platform has a finer counter.
    fn now_us(&self) -> u32 {
        self.now_ms().wrapping_mul(1000)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

/// Returns the instant `delay_ms` after `now`, wrapping on overflow.
#[inline]
pub fn deadline_after(now: u32, delay_ms: u32) -> u32 {
    now.wrapping_add(delay_ms)
}

/// Returns true once `now` is at or past `deadline`.
///
/// Compares the wrapped difference as a signed value, so the result stays
/// correct when the counter rolls over between arming and checking. Valid
/// while the two instants are less than `i32::MAX` ms apart.
#[inline]
pub fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}
