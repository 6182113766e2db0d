// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Monotonic millisecond time source.
//!
//! Everything that needs time (debouncing, tone sequencing, demo pacing) reads it through this
//! trait so the board timer can be swapped for a simulated clock in tests.

/// A free-running millisecond counter.
///
/// The counter wraps at `u32::MAX`; consumers must compare instants with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed between `since` and `now`, tolerant of counter wraparound.
#[inline]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_survives_wraparound() {
        assert_eq!(elapsed_ms(10, u32::MAX - 4), 15);
        assert_eq!(elapsed_ms(500, 250), 250);
    }
}
