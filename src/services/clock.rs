// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time source and simulated network latency.
//!
//! Every "network call" in the application is a single suspension point on
//! [`Clock::sleep`]. Tests inject [`ManualClock`] to run those paths instantly
//! and deterministically.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use futures_util::future::BoxFuture;
use std::sync::Mutex;
use std::time::Duration;

/// Injectable wall clock plus sleep.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Suspend for `duration`. Always completes; there is no cancellation.
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Real time, sleeping on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Virtual clock: `sleep` returns immediately and advances `now` by the
/// requested duration. Every requested sleep is recorded.
#[derive(Debug)]
pub struct ManualClock {
    inner: Mutex<ManualState>,
}

#[derive(Debug)]
struct ManualState {
    now: DateTime<Utc>,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            inner: Mutex::new(ManualState {
                now: start,
                sleeps: Vec::new(),
            }),
        }
    }

    /// Move the clock forward without sleeping.
    pub fn advance(&self, duration: Duration) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.now += to_chrono(duration);
    }

    /// Durations passed to `sleep` so far, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .sleeps
            .clone()
    }
}

impl Default for ManualClock {
    /// Starts at 2024-06-01T12:00:00Z.
    fn default() -> Self {
        let start = DateTime::from_timestamp(1_717_243_200, 0).unwrap_or_default();
        Self::new(start)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).now
    }

    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        {
            let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            state.now += to_chrono(duration);
            state.sleeps.push(duration);
        }
        Box::pin(std::future::ready(()))
    }
}

fn to_chrono(duration: Duration) -> ChronoDuration {
    ChronoDuration::from_std(duration).unwrap_or(ChronoDuration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_clock_sleep_advances_time() {
        let clock = ManualClock::default();
        let start = clock.now();

        clock.sleep(Duration::from_millis(1000)).await;
        clock.sleep(Duration::from_millis(500)).await;

        assert_eq!(clock.now() - start, ChronoDuration::milliseconds(1500));
        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_millis(1000), Duration::from_millis(500)]
        );
    }

    #[test]
    fn test_manual_clock_default_start() {
        let clock = ManualClock::default();
        assert_eq!(clock.now().to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }
}
