/// Generates the parsing, rendering and comparison surface shared by every
/// 20-byte id type.
///
/// The type must be a tuple struct over `[u8; ID_LEN]` and provide its own
/// `Debug` impl.
///
/// Equality is only defined between two values of the same id type: there is
/// no `PartialEq` with strings, byte slices or other id types.
macro_rules! define_fixed_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name([u8; $crate::ID_LEN]);

        impl $name {
            /// Byte length of the raw representation.
            pub const LEN: usize = $crate::ID_LEN;

            /// Wraps raw bytes. Every 20-byte array is a valid value.
            #[must_use]
            pub const fn from_byte_array(bytes: [u8; $crate::ID_LEN]) -> Self {
                Self(bytes)
            }

            /// Borrows the raw bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $crate::ID_LEN] {
                &self.0
            }

            /// Copies out the raw bytes.
            #[must_use]
            pub const fn to_bytes(&self) -> [u8; $crate::ID_LEN] {
                self.0
            }

            /// Wraps a raw byte slice, which must be exactly 20 bytes. No
            /// decoding takes place.
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidByteLength`](crate::Error::InvalidByteLength)
            /// for any other length.
            pub fn from_bytes(bytes: &[u8]) -> $crate::Result<Self> {
                <[u8; $crate::ID_LEN]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| $crate::Error::InvalidByteLength { len: bytes.len() })
            }

            /// Parses the canonical 27-character base62 form.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Decode`](crate::Error::Decode) for a wrong
            /// length, a character outside `0-9A-Za-z`, or a value wider than
            /// 160 bits.
            pub fn from_string(s: &str) -> $crate::Result<Self> {
                <Self as $crate::CodecExt>::decode::<$crate::Base62>(s)
            }

            /// Parses the 31-character lowercase base36 form.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Decode`](crate::Error::Decode) for a wrong
            /// length, a character outside `0-9a-z`, or a value wider than
            /// 160 bits.
            pub fn from_base36(s: &str) -> $crate::Result<Self> {
                <Self as $crate::CodecExt>::decode::<$crate::Base36>(s)
            }

            /// Renders the canonical 27-character base62 form.
            #[must_use]
            pub fn to_base62(&self) -> String {
                <Self as $crate::CodecExt>::encode::<$crate::Base62>(self)
            }

            /// Renders the 31-character lowercase base36 form.
            #[must_use]
            pub fn to_base36(&self) -> String {
                <Self as $crate::CodecExt>::encode::<$crate::Base36>(self)
            }
        }

        impl $crate::Id for $name {
            fn as_bytes(&self) -> &[u8; $crate::ID_LEN] {
                &self.0
            }

            fn from_byte_array(bytes: [u8; $crate::ID_LEN]) -> Self {
                Self(bytes)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(
                    &<Self as $crate::CodecExt>::encoded::<$crate::Base62>(self),
                    f,
                )
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::from_string(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(s: &str) -> $crate::Result<Self> {
                Self::from_string(s)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::Error;

            fn try_from(bytes: &[u8]) -> $crate::Result<Self> {
                Self::from_bytes(bytes)
            }
        }

        impl From<[u8; $crate::ID_LEN]> for $name {
            fn from(bytes: [u8; $crate::ID_LEN]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $crate::ID_LEN] {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_base62()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

pub(crate) use define_fixed_id;
