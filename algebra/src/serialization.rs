use crate::prelude::*;
use ark_std::fmt;
use serde::de::{SeqAccess, Visitor};

/// The trait for serialization to bytes
pub trait LyraFromToBytes: Sized {
    /// Convert to bytes.
    fn lyra_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn lyra_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Serde visitor accepting either a base64 string or a raw byte sequence.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base64 string or a byte array")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> core::result::Result<Vec<u8>, E> {
        b64dec(v).map_err(serde::de::Error::custom)
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> core::result::Result<Vec<u8>, E> {
        Ok(v)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> core::result::Result<Vec<u8>, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(bytes)
    }
}

/// Implement serde `Serialize`/`Deserialize` for a type implementing `LyraFromToBytes`.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::LyraFromToBytes::lyra_to_bytes(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                <$t as $crate::serialization::LyraFromToBytes>::lyra_from_bytes(&bytes)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Implement `LyraFromToBytes` for a scalar type via its canonical byte encoding.
#[macro_export]
macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl $crate::serialization::LyraFromToBytes for $t {
            fn lyra_to_bytes(&self) -> $crate::prelude::Vec<u8> {
                <$t as $crate::traits::Scalar>::to_bytes(self)
            }
            fn lyra_from_bytes(
                bytes: &[u8],
            ) -> core::result::Result<$t, $crate::errors::AlgebraError> {
                <$t as $crate::traits::Scalar>::from_bytes(bytes)
                    .map_err(|_| $crate::errors::AlgebraError::DeserializationError)
            }
        }
    };
}

/// Implement `LyraFromToBytes` for a group type via its compressed encoding.
#[macro_export]
macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl $crate::serialization::LyraFromToBytes for $g {
            fn lyra_to_bytes(&self) -> $crate::prelude::Vec<u8> {
                <$g as $crate::traits::Group>::to_compressed_bytes(self)
            }
            fn lyra_from_bytes(
                bytes: &[u8],
            ) -> core::result::Result<$g, $crate::errors::AlgebraError> {
                <$g as $crate::traits::Group>::from_compressed_bytes(bytes)
                    .map_err(|_| $crate::errors::AlgebraError::DeserializationError)
            }
        }
    };
}
