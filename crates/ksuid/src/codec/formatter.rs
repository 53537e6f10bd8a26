use core::{fmt, marker::PhantomData};

use crate::Alphabet;

/// A stack-allocated, fixed-width encoding of a 20-byte id.
///
/// Produced by [`CodecExt::encoded`]. Renders without touching the heap, so
/// it can be written straight into a formatter or compared against a string.
///
/// [`CodecExt::encoded`]: crate::CodecExt::encoded
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Encoded<A: Alphabet> {
    buf: A::Buf,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> Encoded<A> {
    pub(crate) const fn new(buf: A::Buf) -> Self {
        Self {
            buf,
            _alphabet: PhantomData,
        }
    }

    /// Returns the encoding as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: every alphabet symbol is ASCII
        unsafe { core::str::from_utf8_unchecked(self.buf.as_ref()) }
    }

    /// Returns the raw ASCII buffer.
    pub const fn into_inner(self) -> A::Buf {
        self.buf
    }
}

impl<A: Alphabet> fmt::Display for Encoded<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> fmt::Debug for Encoded<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(A::NAME).field(&self.as_str()).finish()
    }
}

impl<A: Alphabet> AsRef<str> for Encoded<A> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<A: Alphabet> PartialEq<str> for Encoded<A> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<A: Alphabet> PartialEq<&str> for Encoded<A> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<A: Alphabet> PartialEq<String> for Encoded<A> {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<A: Alphabet> From<Encoded<A>> for String {
    fn from(encoded: Encoded<A>) -> Self {
        encoded.as_str().to_owned()
    }
}
