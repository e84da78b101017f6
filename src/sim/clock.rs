//! Timestamps and fixed-rate tick gating
//!
//! The simulation never reads a clock itself. Drivers pass a [`Timestamp`] from
//! whatever monotonic source they have (`requestAnimationFrame` time on the web,
//! `std::time::Instant` natively, synthetic values in tests) and a [`FrameGate`]
//! decides whether that moment deserves a tick.

use serde::{Deserialize, Serialize};

/// Slack allowed when comparing frame deltas against the tick period, so that
/// timestamps like `k / 60.0` are not rejected by rounding.
const GATE_TOLERANCE_SECS: f64 = 1e-6;

/// A point on a monotonic clock, in seconds from an arbitrary origin
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Timestamp(f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    pub const fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    /// From a millisecond clock (`performance.now()`, animation-frame time)
    pub fn from_millis(millis: f64) -> Self {
        Self(millis / 1000.0)
    }

    pub const fn as_secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed since `earlier` (negative if `earlier` is later)
    pub fn seconds_since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    pub fn after_secs(self, secs: f64) -> Self {
        Self(self.0 + secs)
    }
}

/// Something that can be driven by a free-running frame callback
pub trait Scheduler {
    /// Called as often as the driver likes. Returns true if a tick ran.
    fn on_tick(&mut self, now: Timestamp) -> bool;
}

/// Fixed-rate gate: lets at most one tick through per period
///
/// Calls arriving early are dropped, never queued. A late call still runs
/// exactly one tick; there is no catch-up.
#[derive(Debug, Clone)]
pub struct FrameGate {
    period: f64,
    last_tick: Option<Timestamp>,
}

impl FrameGate {
    pub fn new(tick_rate_hz: f64) -> Self {
        Self {
            period: 1.0 / tick_rate_hz,
            last_tick: None,
        }
    }

    /// Seconds between ticks
    pub fn period(&self) -> f64 {
        self.period
    }

    /// When the last tick was let through
    pub fn last_tick(&self) -> Option<Timestamp> {
        self.last_tick
    }

    /// Returns true (and records `now`) if a tick should run at `now`.
    /// The first poll always ticks.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now.seconds_since(last) + GATE_TOLERANCE_SECS >= self.period,
        };
        if due {
            self.last_tick = Some(now);
        }
        due
    }

    /// Forget the last tick (e.g. after the page was hidden)
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
