#[cfg(feature = "std")]
use crate::{SystemClock, ThreadRandom};
use crate::{Ksuid, PAYLOAD_LEN, RandSource, Result, TimeSource};

/// Builder for a [`Ksuid`] where both parts are optional.
///
/// - no timestamp: the time source is read
/// - no payload: 16 bytes are drawn from the random source
///
/// Validation happens in [`KsuidBuilder::build_with`] (or
/// [`KsuidBuilder::build`]); a builder never yields a partially valid id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KsuidBuilder<'a> {
    unix_secs: Option<i64>,
    payload: Option<&'a [u8]>,
}

impl<'a> KsuidBuilder<'a> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unix_secs: None,
            payload: None,
        }
    }

    /// Uses an explicit timestamp in unix seconds.
    #[must_use]
    pub const fn timestamp(mut self, unix_secs: i64) -> Self {
        self.unix_secs = Some(unix_secs);
        self
    }

    /// Uses an explicit payload. It must be 16 bytes long by the time the id
    /// is built.
    #[must_use]
    pub const fn payload(mut self, payload: &'a [u8]) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Builds the id, filling missing parts from the given sources.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPayloadLength`] for a payload that is not 16 bytes
    /// - [`Error::TimestampOutOfRange`] for a timestamp outside the KSUID
    ///   range, whether it was supplied or read from `time`
    ///
    /// ```
    /// use ksuid::{Ksuid, RandSource, TimeSource};
    ///
    /// struct Frozen;
    /// impl TimeSource<i64> for Frozen {
    ///     fn current_secs(&self) -> i64 {
    ///         1_609_459_200
    ///     }
    /// }
    ///
    /// struct Zeros;
    /// impl RandSource<[u8; 16]> for Zeros {
    ///     fn rand(&self) -> [u8; 16] {
    ///         [0; 16]
    ///     }
    /// }
    ///
    /// let id = Ksuid::builder().build_with(&Frozen, &Zeros).unwrap();
    /// assert_eq!(id.to_string(), "1mRb9crkBo16gwLDF7lgpHpJibY");
    /// ```
    ///
    /// [`Error::InvalidPayloadLength`]: crate::Error::InvalidPayloadLength
    /// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
    pub fn build_with<T, R>(self, time: &T, rng: &R) -> Result<Ksuid>
    where
        T: TimeSource<i64>,
        R: RandSource<[u8; PAYLOAD_LEN]>,
    {
        let unix_secs = self.unix_secs.unwrap_or_else(|| time.current_secs());
        match self.payload {
            Some(payload) => Ksuid::from_unix_timestamp(unix_secs, payload),
            None => Ksuid::from_unix_timestamp_and_rand(unix_secs, rng),
        }
    }

    /// Builds the id using the system clock and the thread-local CSPRNG for
    /// any missing part.
    ///
    /// # Errors
    ///
    /// Same as [`KsuidBuilder::build_with`].
    #[cfg(feature = "std")]
    pub fn build(self) -> Result<Ksuid> {
        self.build_with(&SystemClock, &ThreadRandom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, KSUID_EPOCH_SECS};
    use core::cell::Cell;

    struct FixedTime(i64);

    impl TimeSource<i64> for FixedTime {
        fn current_secs(&self) -> i64 {
            self.0
        }
    }

    #[derive(Default)]
    struct CountingRand {
        calls: Cell<usize>,
    }

    impl RandSource<[u8; PAYLOAD_LEN]> for CountingRand {
        fn rand(&self) -> [u8; PAYLOAD_LEN] {
            self.calls.set(self.calls.get() + 1);
            [0xAB; PAYLOAD_LEN]
        }
    }

    #[test]
    fn fills_missing_parts_from_sources() {
        let rng = CountingRand::default();
        let id = KsuidBuilder::new()
            .build_with(&FixedTime(1_609_459_200), &rng)
            .unwrap();
        assert_eq!(id.timestamp(), 1_609_459_200);
        assert_eq!(id.payload(), [0xAB; PAYLOAD_LEN]);
        assert_eq!(rng.calls.get(), 1);
    }

    #[test]
    fn explicit_parts_win() {
        let rng = CountingRand::default();
        let payload = [7; PAYLOAD_LEN];
        let id = Ksuid::builder()
            .timestamp(1_609_459_201)
            .payload(&payload)
            .build_with(&FixedTime(0), &rng)
            .unwrap();
        assert_eq!(id.timestamp(), 1_609_459_201);
        assert_eq!(id.payload(), payload);
        assert_eq!(rng.calls.get(), 0);
    }

    #[test]
    fn validates_supplied_and_observed_parts() {
        let rng = CountingRand::default();
        let clock = FixedTime(1_609_459_200);

        assert_eq!(
            Ksuid::builder().payload(&[1, 2, 3]).build_with(&clock, &rng),
            Err(Error::InvalidPayloadLength { len: 3 })
        );
        assert_eq!(
            Ksuid::builder().timestamp(-5).build_with(&clock, &rng),
            Err(Error::TimestampOutOfRange { unix_secs: -5 })
        );

        let stale_clock = FixedTime(KSUID_EPOCH_SECS as i64 - 1);
        assert!(Ksuid::builder().build_with(&stale_clock, &rng).is_err());
        assert_eq!(rng.calls.get(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn build_uses_system_sources() {
        let payload = [9; PAYLOAD_LEN];
        let id = Ksuid::builder().payload(&payload).build().unwrap();
        assert_eq!(id.payload(), payload);
        assert!(id.timestamp() > 1_700_000_000);
    }
}
