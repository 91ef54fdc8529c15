use chrono::Utc;

/// Source of engine timestamps, in nanoseconds since the Unix epoch.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        // timestamp_nanos_opt is None only outside the representable range
        // (~1677..2262); clamp to zero rather than panic.
        Utc::now().timestamp_nanos_opt().unwrap_or(0).max(0) as u64
    }
}

/// Wraps a clock and clamps its readings so that consecutive timestamps
/// never decrease, even if the underlying clock steps backwards.
pub struct MonotonicClock {
    inner: Box<dyn Clock>,
    last: u64,
}

impl MonotonicClock {
    pub fn new(inner: Box<dyn Clock>) -> Self {
        Self { inner, last: 0 }
    }

    pub fn next(&mut self) -> u64 {
        let now = self.inner.now_ns().max(self.last);
        self.last = now;
        now
    }
}
