//! `#[serde(with = "bs58_fixed::as_base58")]` compatible module for
//! `[u8; 32]` fields, plus the serde impls of [`Bs58PublicKey`].
//!
//! Keys are always written as base58 strings, for human-readable and binary
//! formats alike.

use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::{Bs58PublicKey, PUBLIC_KEY_LEN, decode, encode};

pub fn serialize<S: Serializer>(bytes: &[u8; PUBLIC_KEY_LEN], ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(encode(bytes).as_str())
}

pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<[u8; PUBLIC_KEY_LEN], D::Error> {
    de.deserialize_str(Base58Visitor)
}

// visit_str covers both borrowed and owned strings
struct Base58Visitor;

impl Visitor<'_> for Base58Visitor {
    type Value = [u8; PUBLIC_KEY_LEN];

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "base58 encoded string of a {PUBLIC_KEY_LEN}-byte public key")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode(v).map_err(de::Error::custom)
    }
}

impl Serialize for Bs58PublicKey {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(self.as_bytes(), ser)
    }
}

impl<'de> Deserialize<'de> for Bs58PublicKey {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(de).map(Self)
    }
}
