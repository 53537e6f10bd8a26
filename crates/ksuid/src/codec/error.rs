/// Errors raised while decoding a fixed-width base62 / base36 string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input is not exactly the alphabet's fixed width.
    #[error("invalid length: {len} (expected {expected})")]
    InvalidLength { len: usize, expected: usize },

    /// The input contains a byte outside the alphabet.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    InvalidAscii { byte: u8, index: usize },

    /// The input is well-formed but its value does not fit in 160 bits.
    #[error("decoded value exceeds the 160-bit ksuid range")]
    Overflow,
}
