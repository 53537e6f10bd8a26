mod interface;
mod system_clock;

use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

pub use interface::*;
pub use system_clock::*;

use crate::{Error, Result};

/// The KSUID epoch in unix seconds: 2014-05-13T16:53:20Z.
pub const KSUID_EPOCH_SECS: u64 = 1_400_000_000;

/// The KSUID epoch as an offset from the unix epoch.
pub const KSUID_EPOCH: Duration = Duration::from_secs(KSUID_EPOCH_SECS);

/// Converts unix seconds into the stored, epoch-relative timestamp.
pub(crate) fn raw_timestamp(unix_secs: i64) -> Result<u32> {
    unix_secs
        .checked_sub(KSUID_EPOCH_SECS as i64)
        .and_then(|secs| u32::try_from(secs).ok())
        .ok_or(Error::TimestampOutOfRange { unix_secs })
}

/// Whole unix seconds for `time`, rounding toward negative infinity so that
/// instants just before 1970 stay negative.
pub(crate) fn unix_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            let partial = i64::from(before.subsec_nanos() > 0);
            (-secs).saturating_sub(partial)
        }
    }
}
