//! K-Sortable Unique Identifiers.
//!
//! A [`Ksuid`] is 20 bytes: a 4-byte big-endian timestamp (seconds since
//! 2014-05-13T16:53:20Z) followed by a 16-byte random payload. Ids sort by
//! creation second, and so do their fixed-width text forms:
//!
//! - base62 (`0-9A-Za-z`), 27 characters: the canonical form
//! - base36 (`0-9a-z`), 31 characters: for case-insensitive contexts
//!
//! A [`Token`] uses the same layout and encodings but is 160 bits of pure
//! randomness, for places where a creation time would leak metadata.
//!
//! ```
//! use ksuid::{Ksuid, generate, generate_token};
//!
//! let id = generate();
//! let parsed: Ksuid = id.to_string().parse().unwrap();
//! assert_eq!(id, parsed);
//!
//! assert_eq!(generate_token().len(), 27);
//! ```
//!
//! Clocks and random sources are traits ([`TimeSource`], [`RandSource`]) so
//! that [`KsuidGenerator`] and [`TokenGenerator`] can run against fakes.

mod codec;
mod error;
mod generator;
mod id;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
mod time;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
