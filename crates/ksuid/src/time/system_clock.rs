use std::time::SystemTime;

use super::unix_secs;
use crate::TimeSource;

/// The operating system's wall clock.
///
/// KSUIDs have one-second resolution and no monotonicity guarantee, so the
/// clock is read directly on every call. Zero-sized and `Send + Sync`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<i64> for SystemClock {
    fn current_secs(&self) -> i64 {
        unix_secs(SystemTime::now())
    }
}
