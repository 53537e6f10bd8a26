use crate::DecodeError;

/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `ksuid` can produce.
///
/// Every failure is a deterministic function of the input: there is nothing
/// transient to retry. Errors fall into two kinds:
///
/// - decode errors ([`Error::Decode`]), raised while parsing a textual
///   encoding
/// - validation errors (everything else), raised while constructing a value
///   from its parts or from raw bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A base62 or base36 string could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The supplied payload is not exactly 16 bytes long.
    #[error("payload must be exactly 16 bytes, got {len}")]
    InvalidPayloadLength { len: usize },

    /// The supplied raw buffer is not exactly 20 bytes long.
    #[error("ksuid bytes must be exactly 20 bytes, got {len}")]
    InvalidByteLength { len: usize },

    /// The unix timestamp predates the KSUID epoch or lies beyond the 32-bit
    /// range that follows it.
    #[error("unix timestamp {unix_secs} is outside the ksuid range (2014-05-13T16:53:20Z + 2^32 s)")]
    TimestampOutOfRange { unix_secs: i64 },
}

impl Error {
    /// Returns `true` if this error came from decoding a string.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns `true` if this error came from validating constructor input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !self.is_decode()
    }
}
