use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{define_fixed_id, utils::Hex};
use crate::{
    Error, ID_LEN, KSUID_EPOCH_SECS, KsuidBuilder, RandSource, Result,
    time::{raw_timestamp, unix_secs},
};

/// Byte length of the timestamp prefix.
pub const TIMESTAMP_LEN: usize = 4;

/// Byte length of the random payload.
pub const PAYLOAD_LEN: usize = 16;

define_fixed_id!(
    /// A K-Sortable Unique Identifier.
    ///
    /// ```text
    ///  Byte:    0         4                                  20
    ///           +---------+-----------------------------------+
    ///  Field:   | ts (4)  |           payload (16)            |
    ///           +---------+-----------------------------------+
    /// ```
    ///
    /// - `ts`: big-endian `u32`, seconds since [`KSUID_EPOCH`]
    ///   (2014-05-13T16:53:20Z)
    /// - `payload`: 128 random (or caller-supplied) bits
    ///
    /// Values order by their 20 bytes, so they sort by creation second and
    /// then by payload. The base62 rendering sorts the same way.
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// let id = Ksuid::from_string("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap();
    /// assert_eq!(id.timestamp(), 1_507_608_047);
    /// assert_eq!(id.to_base36(), "0qyzlcs6br8o5i39m8a82au1x92sg8l");
    /// ```
    ///
    /// Equality holds only between two `Ksuid`s. Comparing with a string,
    /// raw bytes or a [`Token`](crate::Token) does not compile:
    ///
    /// ```compile_fail
    /// use ksuid::Ksuid;
    ///
    /// let _ = Ksuid::NIL == "000000000000000000000000000";
    /// ```
    ///
    /// ```compile_fail
    /// use ksuid::Ksuid;
    ///
    /// let _ = Ksuid::NIL == [0_u8; 20][..];
    /// ```
    ///
    /// ```compile_fail
    /// use ksuid::{Ksuid, Token};
    ///
    /// let _ = Ksuid::NIL == Token::from_byte_array([0; 20]);
    /// ```
    ///
    /// [`KSUID_EPOCH`]: crate::KSUID_EPOCH
    Ksuid
);

impl Ksuid {
    /// The all-zero id.
    pub const NIL: Self = Self([0; ID_LEN]);

    /// The largest id. Renders as `aWgEPTl1tmebfsQzFP4bxwgy80V`.
    pub const MAX: Self = Self([0xFF; ID_LEN]);

    /// Byte length of the timestamp prefix.
    pub const TIMESTAMP_LEN: usize = TIMESTAMP_LEN;

    /// Byte length of the payload.
    pub const PAYLOAD_LEN: usize = PAYLOAD_LEN;

    /// Assembles an id from an epoch-relative timestamp and a payload.
    ///
    /// Both parts are already in range, so this cannot fail.
    #[must_use]
    pub const fn from_parts(raw_timestamp: u32, payload: [u8; PAYLOAD_LEN]) -> Self {
        let ts = raw_timestamp.to_be_bytes();
        let mut bytes = [0; ID_LEN];
        let mut i = 0;
        while i < TIMESTAMP_LEN {
            bytes[i] = ts[i];
            i += 1;
        }
        let mut i = 0;
        while i < PAYLOAD_LEN {
            bytes[TIMESTAMP_LEN + i] = payload[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Builds an id from unix seconds and a caller-supplied payload.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPayloadLength`] if `payload` is not 16 bytes
    /// - [`Error::TimestampOutOfRange`] if `unix_secs` predates the KSUID
    ///   epoch or lies more than `u32::MAX` seconds after it
    ///
    /// ```
    /// use ksuid::{Error, Ksuid};
    ///
    /// let id = Ksuid::from_unix_timestamp(1_609_459_200, &[0; 16]).unwrap();
    /// assert_eq!(id.timestamp(), 1_609_459_200);
    ///
    /// let err = Ksuid::from_unix_timestamp(1_609_459_200, &[0; 15]).unwrap_err();
    /// assert_eq!(err, Error::InvalidPayloadLength { len: 15 });
    /// ```
    pub fn from_unix_timestamp(unix_secs: i64, payload: &[u8]) -> Result<Self> {
        let payload = <[u8; PAYLOAD_LEN]>::try_from(payload)
            .map_err(|_| Error::InvalidPayloadLength { len: payload.len() })?;
        Ok(Self::from_parts(raw_timestamp(unix_secs)?, payload))
    }

    /// Builds an id from unix seconds and a payload drawn from `rng`.
    ///
    /// The random source is only consulted once the timestamp is known to be
    /// in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] for a timestamp outside the
    /// KSUID range.
    pub fn from_unix_timestamp_and_rand<R>(unix_secs: i64, rng: &R) -> Result<Self>
    where
        R: RandSource<[u8; PAYLOAD_LEN]>,
    {
        let raw = raw_timestamp(unix_secs)?;
        Ok(Self::from_parts(raw, rng.rand()))
    }

    /// Builds an id from a wall-clock instant and a caller-supplied payload.
    /// Sub-second precision is truncated.
    ///
    /// # Errors
    ///
    /// Same as [`Ksuid::from_unix_timestamp`].
    pub fn from_datetime(datetime: SystemTime, payload: &[u8]) -> Result<Self> {
        Self::from_unix_timestamp(unix_secs(datetime), payload)
    }

    /// Builds an id from a wall-clock instant and a payload drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`Ksuid::from_unix_timestamp_and_rand`].
    pub fn from_datetime_and_rand<R>(datetime: SystemTime, rng: &R) -> Result<Self>
    where
        R: RandSource<[u8; PAYLOAD_LEN]>,
    {
        Self::from_unix_timestamp_and_rand(unix_secs(datetime), rng)
    }

    /// Starts a builder where the timestamp and the payload are both
    /// optional.
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// let id = Ksuid::builder().timestamp(1_609_459_200).build().unwrap();
    /// assert_eq!(id.timestamp(), 1_609_459_200);
    /// ```
    #[must_use]
    pub const fn builder<'a>() -> KsuidBuilder<'a> {
        KsuidBuilder::new()
    }

    /// Generates an id for the current second with a random payload.
    ///
    /// # Panics
    ///
    /// If the system clock reads a time outside the KSUID range (before
    /// 2014-05-13 or after 2150-06-19). Use [`Ksuid::try_new`] to handle
    /// that case.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        crate::generate()
    }

    /// Generates an id for the current second with a random payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if the system clock reads a
    /// time outside the KSUID range.
    #[cfg(feature = "std")]
    pub fn try_new() -> Result<Self> {
        crate::try_generate()
    }

    /// Returns the timestamp relative to the KSUID epoch, as stored.
    #[must_use]
    pub const fn raw_timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the timestamp as unix seconds.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.raw_timestamp() as u64 + KSUID_EPOCH_SECS
    }

    /// Returns the timestamp as a wall-clock instant.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        UNIX_EPOCH + core::time::Duration::from_secs(self.timestamp())
    }

    /// Returns the 16-byte payload.
    #[must_use]
    pub const fn payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0; PAYLOAD_LEN];
        let mut i = 0;
        while i < PAYLOAD_LEN {
            out[i] = self.0[TIMESTAMP_LEN + i];
            i += 1;
        }
        out
    }
}

#[cfg(feature = "std")]
impl Default for Ksuid {
    /// Same as [`Ksuid::new`]: the current second and a random payload.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ksuid")
            .field("id", &format_args!("{self}"))
            .field("timestamp", &self.timestamp())
            .field("payload", &format_args!("{}", Hex(&self.payload())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, Token};
    use std::collections::HashSet;

    const NEW_YEAR_2021: i64 = 1_609_459_200;
    const COUNTING: [u8; PAYLOAD_LEN] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

    struct FixedRand([u8; PAYLOAD_LEN]);

    impl RandSource<[u8; PAYLOAD_LEN]> for FixedRand {
        fn rand(&self) -> [u8; PAYLOAD_LEN] {
            self.0
        }
    }

    #[test]
    fn layout_is_timestamp_then_payload() {
        let id = Ksuid::from_unix_timestamp(NEW_YEAR_2021, &COUNTING).unwrap();
        assert_eq!(&id.as_bytes()[..TIMESTAMP_LEN], &[0x0c, 0x7c, 0x18, 0x00]);
        assert_eq!(&id.as_bytes()[TIMESTAMP_LEN..], &COUNTING);
        assert_eq!(id.raw_timestamp(), 209_459_200);
        assert_eq!(id.timestamp(), 1_609_459_200);
        assert_eq!(id.payload(), COUNTING);
        assert_eq!(id, Ksuid::from_parts(209_459_200, COUNTING));
    }

    #[test]
    fn known_encodings() {
        let zero_payload = Ksuid::from_unix_timestamp(NEW_YEAR_2021, &[0; PAYLOAD_LEN]).unwrap();
        assert_eq!(zero_payload.to_base62(), "1mRb9crkBo16gwLDF7lgpHpJibY");
        assert_eq!(zero_payload.to_base36(), "1gi13tg1yh975o9qosj9akqek5g2scg");

        let counting = Ksuid::from_unix_timestamp(NEW_YEAR_2021, &COUNTING).unwrap();
        assert_eq!(counting.to_base62(), "1mRb9cte6Kdr7wlu9knug8XnhUO");
        assert_eq!(counting.to_base36(), "1gi13tg43t3ylda9w78kb2gtx0c5wcw");
        assert_eq!(counting.to_string(), counting.to_base62());
    }

    #[test]
    fn parse_entry_points_agree() {
        let from_62 = Ksuid::from_string("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap();
        let from_36 = Ksuid::from_base36("0qyzlcs6br8o5i39m8a82au1x92sg8l").unwrap();
        let from_bytes = Ksuid::from_bytes(&[
            0x06, 0x69, 0xF7, 0xEF, 0xB5, 0xA1, 0xCD, 0x34, 0xB5, 0xF9, 0x9D, 0x11, 0x54, 0xFB,
            0x68, 0x53, 0x34, 0x5C, 0x97, 0x35,
        ])
        .unwrap();

        assert_eq!(from_62, from_36);
        assert_eq!(from_62, from_bytes);
        assert_eq!(from_62.timestamp(), 1_507_608_047);
        assert_eq!(
            "0ujtsYcgvSTl8PAuAdqWYSMnLOv".parse::<Ksuid>().unwrap(),
            from_62
        );
        assert_eq!(Ksuid::try_from("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap(), from_62);
        assert_eq!(Ksuid::try_from(&from_62.to_bytes()[..]).unwrap(), from_62);
        assert_eq!(Ksuid::from(from_62.to_bytes()), from_62);
        assert_eq!(<[u8; ID_LEN]>::from(from_62), from_62.to_bytes());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            Ksuid::from_string("short"),
            Err(Error::Decode(DecodeError::InvalidLength { len: 5, expected: 27 }))
        );
        assert_eq!(
            Ksuid::from_string("aWgEPTl1tmebfsQzFP4bxwgy80W"),
            Err(Error::Decode(DecodeError::Overflow))
        );
        assert_eq!(
            Ksuid::from_base36("twj4yidkw7a8pn4g709kzmfoaol3x8g"),
            Err(Error::Decode(DecodeError::Overflow))
        );
        assert!(Ksuid::from_base36("0ujtsYcgvSTl8PAuAdqWYSMnLOv").is_err());
        assert_eq!(
            Ksuid::from_bytes(&[0; 19]),
            Err(Error::InvalidByteLength { len: 19 })
        );
        assert_eq!(
            Ksuid::from_bytes(&[0; 21]),
            Err(Error::InvalidByteLength { len: 21 })
        );
    }

    #[test]
    fn timestamp_bounds() {
        let epoch = KSUID_EPOCH_SECS as i64;

        let first = Ksuid::from_unix_timestamp(epoch, &[0; PAYLOAD_LEN]).unwrap();
        assert_eq!(first, Ksuid::NIL);
        assert_eq!(first.datetime(), UNIX_EPOCH + crate::KSUID_EPOCH);

        let last = Ksuid::from_unix_timestamp(epoch + i64::from(u32::MAX), &[0xFF; PAYLOAD_LEN])
            .unwrap();
        assert_eq!(last, Ksuid::MAX);

        assert_eq!(
            Ksuid::from_unix_timestamp(epoch - 1, &[0; PAYLOAD_LEN]),
            Err(Error::TimestampOutOfRange { unix_secs: epoch - 1 })
        );
        let too_late = epoch + i64::from(u32::MAX) + 1;
        assert_eq!(
            Ksuid::from_unix_timestamp(too_late, &[0; PAYLOAD_LEN]),
            Err(Error::TimestampOutOfRange { unix_secs: too_late })
        );
        assert_eq!(
            Ksuid::from_unix_timestamp(i64::MIN, &[0; PAYLOAD_LEN]),
            Err(Error::TimestampOutOfRange { unix_secs: i64::MIN })
        );
    }

    #[test]
    fn payload_length_is_checked_before_timestamp() {
        assert_eq!(
            Ksuid::from_unix_timestamp(0, &[0; 17]),
            Err(Error::InvalidPayloadLength { len: 17 })
        );
        assert_eq!(
            Ksuid::from_unix_timestamp(NEW_YEAR_2021, &[]),
            Err(Error::InvalidPayloadLength { len: 0 })
        );
    }

    #[test]
    fn datetime_constructors() {
        let at = UNIX_EPOCH + core::time::Duration::from_millis(1_609_459_200_999);
        let id = Ksuid::from_datetime(at, &COUNTING).unwrap();
        assert_eq!(id.timestamp(), 1_609_459_200);
        assert_eq!(id.datetime(), UNIX_EPOCH + core::time::Duration::from_secs(1_609_459_200));

        let id = Ksuid::from_datetime_and_rand(at, &FixedRand(COUNTING)).unwrap();
        assert_eq!(id.payload(), COUNTING);

        assert_eq!(
            Ksuid::from_datetime(UNIX_EPOCH, &COUNTING),
            Err(Error::TimestampOutOfRange { unix_secs: 0 })
        );
    }

    #[test]
    fn orders_by_timestamp_then_payload() {
        let early = Ksuid::from_unix_timestamp(NEW_YEAR_2021, &[0xFF; PAYLOAD_LEN]).unwrap();
        let late = Ksuid::from_unix_timestamp(NEW_YEAR_2021 + 1, &[0; PAYLOAD_LEN]).unwrap();
        assert!(early < late);
        assert!(early.to_base62() < late.to_base62());
        assert!(early.to_base36() < late.to_base36());

        let a = Ksuid::from_parts(7, [1; PAYLOAD_LEN]);
        let b = Ksuid::from_parts(7, [2; PAYLOAD_LEN]);
        assert!(a < b);
        assert!(Ksuid::NIL < a && b < Ksuid::MAX);
    }

    #[test]
    fn equal_bytes_hash_together() {
        let a = Ksuid::from_parts(42, COUNTING);
        let b = Ksuid::from_bytes(a.as_bytes()).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        assert!(set.insert(a));
        assert!(!set.insert(b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equality_is_between_ksuids() {
        let id = Ksuid::from_string("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap();
        let same = Ksuid::from_base36("0qyzlcs6br8o5i39m8a82au1x92sg8l").unwrap();
        assert_eq!(id, same);
        assert_ne!(id, Ksuid::NIL);

        // text and bytes are checked through explicit conversions
        assert_eq!(id.to_string(), "0ujtsYcgvSTl8PAuAdqWYSMnLOv");
        assert_ne!(id.to_string(), "0qyzlcs6br8o5i39m8a82au1x92sg8l");
        assert_eq!(id.as_bytes()[..4], [0x06, 0x69, 0xF7, 0xEF]);

        // a token over the same bytes is still a different kind of value
        let token = Token::from_byte_array(id.to_bytes());
        assert_eq!(token.as_bytes(), id.as_bytes());
        assert_eq!(token.to_string(), id.to_string());
    }

    #[test]
    fn debug_shows_parts() {
        let id = Ksuid::from_unix_timestamp(NEW_YEAR_2021, &COUNTING).unwrap();
        assert_eq!(
            format!("{id:?}"),
            "Ksuid { id: 1mRb9cte6Kdr7wlu9knug8XnhUO, timestamp: 1609459200, payload: 0102030405060708090a0b0c0d0e0f10 }"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn new_uses_current_time() {
        let before = unix_secs(SystemTime::now()) as u64;
        let id = Ksuid::new();
        let after = unix_secs(SystemTime::now()) as u64;
        assert!((before..=after).contains(&id.timestamp()));
        assert_ne!(Ksuid::try_new().unwrap(), id);
    }

    #[cfg(feature = "std")]
    #[test]
    fn default_is_a_fresh_id() {
        let before = unix_secs(SystemTime::now()) as u64;
        let a = Ksuid::default();
        let b = Ksuid::default();
        let after = unix_secs(SystemTime::now()) as u64;
        assert!((before..=after).contains(&a.timestamp()));
        assert_ne!(a, b);
        assert_ne!(a, Ksuid::NIL);
    }
}
