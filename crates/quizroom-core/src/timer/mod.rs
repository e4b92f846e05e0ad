mod clock;
mod countdown;

pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{Countdown, ManualCountdown, TimerToken};

/// Seconds allowed per question unless configured otherwise.
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;
