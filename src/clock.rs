use std::sync::OnceLock;
use std::time::Instant;

/// Clock value in milliseconds. In nodes-as-time mode the same scalar
/// carries node counts instead; the formulas don't care which.
pub type TimePoint = i64;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic clock reading in milliseconds (since first call). Absolute
/// values are arbitrary; only differences are meaningful.
pub fn now() -> TimePoint {
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as TimePoint
}
