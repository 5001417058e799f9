//! Fixed-rate frame pacing
//!
//! [`Ticker`] keeps a deadline that moves forward by a fixed step on every
//! call and sleeps until it. When a frame overruns, the deadline snaps to the
//! current time instead of trying to catch up.
//!
//! ## Example
//!
//! ```
//! use embedded_hal::delay::DelayNs;
//! use pewpew_lcd::tick::{Monotonic, Ticker};
//!
//! struct Clock(u64);
//! impl Monotonic for Clock {
//!     fn now_us(&mut self) -> u64 { self.0 }
//! }
//! struct Sleep;
//! impl DelayNs for Sleep {
//!     fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! let mut ticker = Ticker::new(Clock(0), Sleep);
//! ticker.start();
//! ticker.tick(33_000); // ~30 frames per second
//! assert_eq!(ticker.deadline(), Some(33_000));
//! ```

use embedded_hal::delay::DelayNs;

/// Monotonic microsecond clock
pub trait Monotonic {
    /// Microseconds since an arbitrary fixed point
    fn now_us(&mut self) -> u64;
}

/// Open-loop frame rate limiter
pub struct Ticker<C, D> {
    clock: C,
    delay: D,
    /// Next wake-up time, `None` until started
    deadline: Option<u64>,
}

impl<C, D> Ticker<C, D>
where
    C: Monotonic,
    D: DelayNs,
{
    /// Create a stopped ticker
    pub fn new(clock: C, delay: D) -> Self {
        Self {
            clock,
            delay,
            deadline: None,
        }
    }

    /// Set the deadline to now
    pub fn start(&mut self) {
        self.deadline = Some(self.clock.now_us());
    }

    /// Current deadline in clock microseconds
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Advance the deadline by `delay_us` and sleep until it
    ///
    /// Starts the ticker first if needed. If the new deadline is already in
    /// the past it is moved to now and no sleep happens.
    pub fn tick(&mut self, delay_us: u32) {
        let deadline = match self.deadline {
            Some(deadline) => deadline,
            None => self.clock.now_us(),
        };
        let deadline = deadline.saturating_add(u64::from(delay_us));
        let now = self.clock.now_us();

        if deadline < now {
            self.deadline = Some(now);
        } else {
            self.deadline = Some(deadline);
            let remaining = deadline - now;
            self.delay
                .delay_us(u32::try_from(remaining).unwrap_or(u32::MAX));
        }
    }

    /// Release the clock and delay
    pub fn release(self) -> (C, D) {
        (self.clock, self.delay)
    }
}
