//! Serialization of [`BitVector`]s as strings of binary digits.

use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{convert::BinDisplay, BitVector};

impl Serialize for BitVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&BinDisplay(self))
    }
}

struct BitVectorVisitor;

impl Visitor<'_> for BitVectorVisitor {
    type Value = BitVector;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string of binary digits")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BitVector::from_bin(v).map_err(|e| {
            log::debug!("Rejecting serialized bit vector: {e}");
            E::custom(e)
        })
    }
}

impl<'de> Deserialize<'de> for BitVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BitVectorVisitor)
    }
}
