//! `#[serde(with = "...")]` adapters for [`Ksuid`](crate::Ksuid) and
//! [`Token`](crate::Token).
//!
//! - [`as_base62`]: the canonical 27-character string
//! - [`as_base36`]: the 31-character lowercase string
//! - [`as_bytes`]: the raw 20 bytes
//!
//! ```
//! use ksuid::{Ksuid, serde::as_base62};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "as_base62")]
//!     id: Ksuid,
//! }
//! ```

use core::{fmt, marker::PhantomData};

use ::serde::{
    Deserializer, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::{Alphabet, CodecExt, Error, ID_LEN, Id};

fn serialize_encoded<A, ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
where
    A: Alphabet,
    ID: Id,
    S: Serializer,
{
    s.serialize_str(id.encoded::<A>().as_str())
}

fn deserialize_encoded<'de, A, ID, D>(d: D) -> Result<ID, D::Error>
where
    A: Alphabet,
    ID: Id,
    D: Deserializer<'de>,
{
    struct EncodedVisitor<A, ID>(PhantomData<(A, ID)>);

    impl<A: Alphabet, ID: Id> Visitor<'_> for EncodedVisitor<A, ID> {
        type Value = ID;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a {}-character {} string", A::WIDTH, A::NAME)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            ID::decode::<A>(v).map_err(E::custom)
        }
    }

    d.deserialize_str(EncodedVisitor::<A, ID>(PhantomData))
}

pub mod as_base62 {
    use super::{Deserializer, Serializer, deserialize_encoded, serialize_encoded};
    use crate::{Base62, Id};

    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: Id,
        S: Serializer,
    {
        serialize_encoded::<Base62, _, _>(id, s)
    }

    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: Id,
        D: Deserializer<'de>,
    {
        deserialize_encoded::<Base62, _, _>(d)
    }
}

pub mod as_base36 {
    use super::{Deserializer, Serializer, deserialize_encoded, serialize_encoded};
    use crate::{Base36, Id};

    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: Id,
        S: Serializer,
    {
        serialize_encoded::<Base36, _, _>(id, s)
    }

    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: Id,
        D: Deserializer<'de>,
    {
        deserialize_encoded::<Base36, _, _>(d)
    }
}

pub mod as_bytes {
    use super::*;

    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: Id,
        S: Serializer,
    {
        s.serialize_bytes(id.as_bytes())
    }

    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: Id,
        D: Deserializer<'de>,
    {
        struct BytesVisitor<ID>(PhantomData<ID>);

        impl<'de, ID: Id> Visitor<'de> for BytesVisitor<ID> {
            type Value = ID;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{ID_LEN} raw bytes")
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                <[u8; ID_LEN]>::try_from(v)
                    .map(ID::from_byte_array)
                    .map_err(|_| E::custom(Error::InvalidByteLength { len: v.len() }))
            }

            // Self-describing formats without a bytes type (JSON) hand over
            // a sequence of integers instead.
            fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
                let mut bytes = [0_u8; ID_LEN];
                let mut len = 0;
                while let Some(byte) = seq.next_element::<u8>()? {
                    if len < ID_LEN {
                        bytes[len] = byte;
                    }
                    len += 1;
                }
                if len != ID_LEN {
                    return Err(de::Error::custom(Error::InvalidByteLength { len }));
                }
                Ok(ID::from_byte_array(bytes))
            }
        }

        d.deserialize_bytes(BytesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ksuid, Token};
    use ::serde::{Deserialize, Serialize};

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_base62")]
        id: Ksuid,
        #[serde(with = "as_base36")]
        lower: Ksuid,
        #[serde(with = "as_base62")]
        token: Token,
    }

    #[test]
    fn string_adapters_round_trip() {
        let id = Ksuid::from_string("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap();
        let row = Row {
            id,
            lower: id,
            token: Token::from_byte_array([0xFF; ID_LEN]),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":"0ujtsYcgvSTl8PAuAdqWYSMnLOv","lower":"0qyzlcs6br8o5i39m8a82au1x92sg8l","token":"aWgEPTl1tmebfsQzFP4bxwgy80V"}"#
        );
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn string_adapters_reject_bad_input() {
        let err = serde_json::from_str::<Row>(
            r#"{"id":"short","lower":"0qyzlcs6br8o5i39m8a82au1x92sg8l","token":"aWgEPTl1tmebfsQzFP4bxwgy80V"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid length: 5 (expected 27)"), "{err}");

        let err = serde_json::from_str::<Row>(
            r#"{"id":"0ujtsYcgvSTl8PAuAdqWYSMnLOv","lower":"twj4yidkw7a8pn4g709kzmfoaol3x8g","token":"aWgEPTl1tmebfsQzFP4bxwgy80V"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("160-bit"), "{err}");

        let err = serde_json::from_str::<Row>(
            r#"{"id":42,"lower":"0qyzlcs6br8o5i39m8a82au1x92sg8l","token":"aWgEPTl1tmebfsQzFP4bxwgy80V"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("27-character base62 string"), "{err}");
    }

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Raw {
        #[serde(with = "as_bytes")]
        id: Ksuid,
    }

    #[test]
    fn bytes_adapter_round_trip() {
        let raw = Raw {
            id: Ksuid::from_parts(1, [2; 16]),
        };
        let json = serde_json::to_string(&raw).expect("serialize");
        assert_eq!(json, r#"{"id":[0,0,0,1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2]}"#);
        let back: Raw = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, raw);
    }

    #[test]
    fn bytes_adapter_rejects_wrong_length() {
        let err = serde_json::from_str::<Raw>(r#"{"id":[1,2,3]}"#).unwrap_err();
        assert!(err.to_string().contains("exactly 20 bytes, got 3"), "{err}");

        let long = format!("{{\"id\":{:?}}}", [0_u8; 21]);
        let err = serde_json::from_str::<Raw>(&long).unwrap_err();
        assert!(err.to_string().contains("got 21"), "{err}");
    }
}
