use core::fmt;

use super::define_fixed_id;
use crate::{ID_LEN, RandSource};

define_fixed_id!(
    /// A secure token: 160 bits from a cryptographically secure random
    /// source, with no timestamp.
    ///
    /// Tokens share the KSUID byte length and text encodings, but carry no
    /// creation time. Use them where a [`Ksuid`](crate::Ksuid) would leak
    /// metadata, e.g. API keys or session ids. The byte ordering exists so
    /// tokens can be stored in sorted containers; it means nothing about
    /// when they were made.
    ///
    /// ```
    /// use ksuid::Token;
    ///
    /// let token = Token::from_byte_array([0xFF; 20]);
    /// assert_eq!(token.to_string(), "aWgEPTl1tmebfsQzFP4bxwgy80V");
    /// ```
    Token
);

impl Token {
    /// Draws a new token from the thread-local CSPRNG.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        Self::from_rand(&crate::ThreadRandom)
    }

    /// Draws a new token from `rng`.
    pub fn from_rand<R: RandSource<[u8; ID_LEN]>>(rng: &R) -> Self {
        Self(rng.rand())
    }
}

#[cfg(feature = "std")]
impl Default for Token {
    /// Same as [`Token::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&format_args!("{self}")).finish()
    }
}
