use crate::{Alphabet, Encoded, Id, Result, decode_fixed, encode_fixed};

/// Extension trait for 20-byte ids that encode to fixed-width strings.
///
/// Implemented for every [`Id`]. The alphabet is picked per call, so the same
/// value can be rendered as canonical base62 or as case-insensitive base36:
///
/// ```
/// use ksuid::{Base36, Base62, CodecExt, Ksuid};
///
/// let id = Ksuid::MAX;
/// assert_eq!(id.encode::<Base62>(), "aWgEPTl1tmebfsQzFP4bxwgy80V");
/// assert_eq!(id.encode::<Base36>(), "twj4yidkw7a8pn4g709kzmfoaol3x8f");
///
/// let back = Ksuid::decode::<Base62>("aWgEPTl1tmebfsQzFP4bxwgy80V").unwrap();
/// assert_eq!(back, id);
/// ```
pub trait CodecExt: Id {
    /// Encodes into a stack buffer that can be displayed or compared.
    fn encoded<A: Alphabet>(&self) -> Encoded<A> {
        let mut buf = A::Buf::default();
        encode_fixed::<A>(self.as_bytes(), buf.as_mut());
        Encoded::new(buf)
    }

    /// Encodes into a [`String`] of exactly [`Alphabet::WIDTH`] characters.
    fn encode<A: Alphabet>(&self) -> String {
        self.encoded::<A>().into()
    }

    /// Encodes into a caller-provided buffer and returns it as a `&str`.
    ///
    /// This is the allocation-free alternative to [`CodecExt::encode`].
    ///
    /// ```
    /// use ksuid::{Alphabet, Base62, CodecExt, Ksuid};
    ///
    /// let mut buf = <Base62 as Alphabet>::Buf::default();
    /// assert_eq!(Ksuid::NIL.encode_to_buf::<Base62>(&mut buf), "000000000000000000000000000");
    /// ```
    fn encode_to_buf<'b, A: Alphabet>(&self, buf: &'b mut A::Buf) -> &'b str {
        encode_fixed::<A>(self.as_bytes(), buf.as_mut());
        // SAFETY: every alphabet symbol is ASCII
        unsafe { core::str::from_utf8_unchecked(<A::Buf as AsRef<[u8]>>::as_ref(buf)) }
    }

    /// Decodes a fixed-width string back into an id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the string has the wrong length, contains
    /// a byte outside the alphabet, or describes a value wider than 160 bits.
    ///
    /// [`Error::Decode`]: crate::Error::Decode
    fn decode<A: Alphabet>(s: &str) -> Result<Self> {
        let bytes = decode_fixed::<A>(s)?;
        Ok(Self::from_byte_array(bytes))
    }
}

impl<ID: Id> CodecExt for ID {}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, Base36, Base62, CodecExt, Ksuid, Token};

    #[test]
    fn encode_to_buf_returns_the_written_buffer() {
        let mut buf = <Base62 as Alphabet>::Buf::default();
        let s = Ksuid::MAX.encode_to_buf::<Base62>(&mut buf);
        assert_eq!(s, "aWgEPTl1tmebfsQzFP4bxwgy80V");
        assert_eq!(buf, *b"aWgEPTl1tmebfsQzFP4bxwgy80V");

        // reuse overwrites every position
        let s = Ksuid::NIL.encode_to_buf::<Base62>(&mut buf);
        assert_eq!(s, "0".repeat(27));

        let mut buf = <Base36 as Alphabet>::Buf::default();
        let token = Token::from_byte_array([0xFF; 20]);
        assert_eq!(
            token.encode_to_buf::<Base36>(&mut buf),
            "twj4yidkw7a8pn4g709kzmfoaol3x8f"
        );
    }

    #[test]
    fn encodings_agree() {
        let id = Ksuid::from_string("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap();
        let mut buf = <Base36 as Alphabet>::Buf::default();
        assert_eq!(id.encode_to_buf::<Base36>(&mut buf), id.encode::<Base36>());
        assert_eq!(id.encoded::<Base36>().as_str(), id.to_base36());
        assert_eq!(Ksuid::decode::<Base36>(&id.to_base36()).unwrap(), id);
    }
}
