//! Stripe-style prefixed identifiers such as `user_2StGMtcWzRJ8qZqQjbJjGdTkVfv`.
//!
//! The prefix names the entity kind and may itself contain underscores
//! (`payment_intent_...`). Neither KSUID alphabet contains `_`, so the id is
//! always whatever follows the last underscore.

use core::fmt;
use core::str::FromStr;

use ksuid::{Alphabet, Base36, Ksuid};

/// Errors raised while building or parsing a prefixed id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixError {
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    #[error(
        "prefix {0:?} must start with a letter and contain only alphanumeric characters and underscores"
    )]
    InvalidPrefix(String),

    #[error("invalid prefixed ksuid format: expected <prefix>_<ksuid>")]
    MissingSeparator,

    #[error("invalid ksuid part: {0}")]
    Ksuid(#[from] ksuid::Error),
}

/// Checks that `prefix` starts with an ASCII letter and contains only ASCII
/// alphanumerics and underscores.
pub fn validate_prefix(prefix: &str) -> Result<(), PrefixError> {
    let mut chars = prefix.chars();
    match chars.next() {
        None => Err(PrefixError::EmptyPrefix),
        Some(first)
            if first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') =>
        {
            Ok(())
        }
        Some(_) => Err(PrefixError::InvalidPrefix(prefix.to_owned())),
    }
}

/// A KSUID tagged with an entity prefix.
///
/// Renders as `<prefix>_<base62>`. Parsing also accepts a base36 id part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixedKsuid {
    prefix: String,
    ksuid: Ksuid,
}

impl PrefixedKsuid {
    /// Generates a fresh KSUID under `prefix`.
    pub fn new(prefix: &str) -> Result<Self, PrefixError> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_owned(),
            ksuid: Ksuid::try_new()?,
        })
    }

    /// Tags an existing KSUID with `prefix`.
    pub fn with_ksuid(prefix: &str, ksuid: Ksuid) -> Result<Self, PrefixError> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_owned(),
            ksuid,
        })
    }

    /// Splits `s` at its last underscore and parses both halves.
    pub fn parse(s: &str) -> Result<Self, PrefixError> {
        let (prefix, id) = s.rsplit_once('_').ok_or(PrefixError::MissingSeparator)?;
        validate_prefix(prefix)?;
        let ksuid = if id.len() == Base36::WIDTH {
            Ksuid::from_base36(id)?
        } else {
            Ksuid::from_string(id)?
        };
        Ok(Self {
            prefix: prefix.to_owned(),
            ksuid,
        })
    }

    /// Returns `true` if `s` parses, and when `expected_prefix` is given, if
    /// the prefix matches it exactly.
    pub fn validate(s: &str, expected_prefix: Option<&str>) -> bool {
        match Self::parse(s) {
            Ok(parsed) => expected_prefix.is_none_or(|expected| parsed.prefix == expected),
            Err(_) => false,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub const fn ksuid(&self) -> Ksuid {
        self.ksuid
    }
}

impl fmt::Display for PrefixedKsuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix, self.ksuid)
    }
}

impl FromStr for PrefixedKsuid {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
