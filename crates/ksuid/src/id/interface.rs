use core::fmt;
use core::hash::Hash;

/// Byte length of every id in this crate.
pub const ID_LEN: usize = 20;

/// A trait for fixed 20-byte identifiers.
///
/// Both [`Ksuid`] and [`Token`] implement it; the codec, the serde adapters
/// and the generators are written against this trait rather than a concrete
/// type.
///
/// [`Ksuid`]: crate::Ksuid
/// [`Token`]: crate::Token
pub trait Id:
    Copy + Clone + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash + Send + Sync
{
    /// Borrows the raw big-endian bytes.
    fn as_bytes(&self) -> &[u8; ID_LEN];

    /// Wraps raw bytes without validation. Every 20-byte array is a valid id.
    fn from_byte_array(bytes: [u8; ID_LEN]) -> Self;

    /// Copies out the raw big-endian bytes.
    fn to_bytes(&self) -> [u8; ID_LEN] {
        *self.as_bytes()
    }
}
