//! Thread-local KSUID and token generation.
//!
//! Each thread owns its generators, backed by the wall clock and the
//! thread-local CSPRNG, so concurrent callers never share state.
//!
//! # Example
//! ```rust
//! use ksuid::{generate, generate_token};
//!
//! let id = generate();
//! println!("KSUID: {id}");
//! println!("token: {}", generate_token());
//! ```

use crate::{
    Base36, Base62, CodecExt, Ksuid, KsuidGenerator, Result, SystemClock, ThreadRandom,
    TokenGenerator,
};

thread_local! {
    static KSUID_GENERATOR: KsuidGenerator<SystemClock, ThreadRandom> =
        const { KsuidGenerator::new(SystemClock, ThreadRandom) };

    static TOKEN_GENERATOR: TokenGenerator<ThreadRandom> =
        const { TokenGenerator::new(ThreadRandom) };
}

/// Generates a KSUID for the current second.
///
/// # Panics
///
/// If the system clock reads a time outside the KSUID range. See
/// [`try_generate`].
#[must_use]
pub fn generate() -> Ksuid {
    KSUID_GENERATOR.with(KsuidGenerator::next_id)
}

/// Generates a KSUID for the current second.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`](crate::Error::TimestampOutOfRange)
/// if the system clock reads a time outside the KSUID range.
pub fn try_generate() -> Result<Ksuid> {
    KSUID_GENERATOR.with(KsuidGenerator::try_next_id)
}

/// Generates a KSUID and renders it as 31-character lowercase base36.
///
/// # Panics
///
/// Same as [`generate`].
#[must_use]
pub fn generate_lowercase() -> String {
    generate().encode::<Base36>()
}

/// Generates a secure token and renders it as 27-character base62.
#[must_use]
pub fn generate_token() -> String {
    TOKEN_GENERATOR.with(|g| g.next_token().encode::<Base62>())
}

/// Generates a secure token and renders it as 31-character lowercase base36.
#[must_use]
pub fn generate_token_lowercase() -> String {
    TOKEN_GENERATOR.with(|g| g.next_token().encode::<Base36>())
}
