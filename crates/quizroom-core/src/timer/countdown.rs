//! Per-question tick source.
//!
//! The controller never owns a running timer. It asks a [`Countdown`] to
//! arm a one-second tick source and receives a [`TimerToken`] for it. Every
//! tick the surface feeds back carries that token. On every question
//! boundary the old registration is disarmed before a new one is armed, so
//! a tick that was already in flight for the previous question no longer
//! matches and is dropped.

use serde::{Deserialize, Serialize};

/// Identifies one armed countdown registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

pub trait Countdown {
    /// Start a fresh one-second tick source and return its token.
    fn arm(&mut self) -> TimerToken;

    /// Tear down the registration identified by `token`.
    /// Disarming an unknown or already disarmed token is a no-op.
    fn disarm(&mut self, token: TimerToken);
}

impl<T: Countdown + ?Sized> Countdown for Box<T> {
    fn arm(&mut self) -> TimerToken {
        (**self).arm()
    }

    fn disarm(&mut self, token: TimerToken) {
        (**self).disarm(token)
    }
}

/// Countdown driven by hand; records every arm/disarm for inspection.
#[derive(Debug, Default)]
pub struct ManualCountdown {
    next: u64,
    active: Option<TimerToken>,
    armed: u64,
    disarmed: u64,
}

impl ManualCountdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the live registration, if any.
    pub fn active(&self) -> Option<TimerToken> {
        self.active
    }

    pub fn armed_count(&self) -> u64 {
        self.armed
    }

    pub fn disarmed_count(&self) -> u64 {
        self.disarmed
    }
}

impl Countdown for ManualCountdown {
    fn arm(&mut self) -> TimerToken {
        self.next += 1;
        self.armed += 1;
        let token = TimerToken(self.next);
        self.active = Some(token);
        token
    }

    fn disarm(&mut self, token: TimerToken) {
        if self.active == Some(token) {
            self.active = None;
            self.disarmed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_issues_fresh_tokens() {
        let mut countdown = ManualCountdown::new();
        let a = countdown.arm();
        countdown.disarm(a);
        let b = countdown.arm();
        assert_ne!(a, b);
        assert_eq!(countdown.active(), Some(b));
        assert_eq!(countdown.armed_count(), 2);
        assert_eq!(countdown.disarmed_count(), 1);
    }

    #[test]
    fn disarming_stale_token_is_noop() {
        let mut countdown = ManualCountdown::new();
        let a = countdown.arm();
        countdown.disarm(a);
        let b = countdown.arm();
        countdown.disarm(a);
        assert_eq!(countdown.active(), Some(b));
        assert_eq!(countdown.disarmed_count(), 1);
    }
}
