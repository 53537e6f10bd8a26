#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{ID_LEN, Ksuid, PAYLOAD_LEN, RandSource, Result, TimeSource, Token};

/// A KSUID generator over an injected clock and random source.
///
/// It holds no mutable state: every call reads the clock, draws a 16-byte
/// payload and assembles the id. Ids from the same second are ordered only
/// by their random payload.
///
/// ## Features
/// - ✅ Thread-safe when both sources are
/// - ✅ Probabilistically unique (128 random bits per second)
/// - ✅ Time-ordered at one-second granularity
///
/// # Example
/// ```
/// use ksuid::{KsuidGenerator, SystemClock, ThreadRandom};
///
/// let generator = KsuidGenerator::new(SystemClock, ThreadRandom);
/// let id = generator.next_id();
/// assert_eq!(id.to_string().len(), 27);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KsuidGenerator<T, R>
where
    T: TimeSource<i64>,
    R: RandSource<[u8; PAYLOAD_LEN]>,
{
    time: T,
    rng: R,
}

impl<T, R> KsuidGenerator<T, R>
where
    T: TimeSource<i64>,
    R: RandSource<[u8; PAYLOAD_LEN]>,
{
    /// Creates a generator from a [`TimeSource`] and a [`RandSource`].
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a KSUID for the current second.
    ///
    /// # Panics
    ///
    /// If the clock reads a time outside the KSUID range. Use
    /// [`Self::try_next_id`] to handle that case.
    #[must_use]
    pub fn next_id(&self) -> Ksuid {
        match self.try_next_id() {
            Ok(id) => id,
            Err(e) => panic!("clock outside the ksuid range: {e}"),
        }
    }

    /// Generates a KSUID for the current second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if the clock reads a time before
    /// the KSUID epoch or more than `u32::MAX` seconds after it. Nothing is
    /// drawn from the random source in that case.
    ///
    /// [`Error::TimestampOutOfRange`]: crate::Error::TimestampOutOfRange
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), err))]
    pub fn try_next_id(&self) -> Result<Ksuid> {
        Ksuid::from_unix_timestamp_and_rand(self.time.current_secs(), &self.rng)
    }
}

/// A secure token generator over an injected random source.
///
/// # Example
/// ```
/// use ksuid::{ThreadRandom, TokenGenerator};
///
/// let generator = TokenGenerator::new(ThreadRandom);
/// assert_ne!(generator.next_token(), generator.next_token());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenGenerator<R>
where
    R: RandSource<[u8; ID_LEN]>,
{
    rng: R,
}

impl<R> TokenGenerator<R>
where
    R: RandSource<[u8; ID_LEN]>,
{
    /// Creates a generator from a [`RandSource`].
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a new token.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_token(&self) -> Token {
        Token::from_rand(&self.rng)
    }
}
