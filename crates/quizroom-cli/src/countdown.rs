//! Tokio-backed countdown for the interactive loop.

use std::time::Duration;

use quizroom_core::{Countdown, TimerToken};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

/// One `Interval` per armed registration. Disarming drops it, so its
/// pending ticks disappear with it.
pub struct TokioCountdown {
    next: u64,
    active: Option<(TimerToken, Interval)>,
}

impl TokioCountdown {
    pub fn new() -> Self {
        Self {
            next: 0,
            active: None,
        }
    }

    /// Wait for the next tick of the live registration.
    /// Never resolves while nothing is armed. Cancel safe.
    pub async fn tick(&mut self) -> TimerToken {
        match self.active.as_mut() {
            Some((token, interval)) => {
                interval.tick().await;
                *token
            }
            None => std::future::pending().await,
        }
    }
}

impl Default for TokioCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown for TokioCountdown {
    /// Must be called from within a tokio runtime.
    fn arm(&mut self) -> TimerToken {
        self.next += 1;
        let token = TimerToken::new(self.next);
        let mut interval = interval_at(Instant::now() + TICK, TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.active = Some((token, interval));
        token
    }

    fn disarm(&mut self, token: TimerToken) {
        if matches!(&self.active, Some((live, _)) if *live == token) {
            self.active = None;
        }
    }
}
