//! Fixed-length base58 encoding for 32-byte public keys
//!
//! This crate provides:
//! - [`decode`] / [`encode`] between base58 strings and `[u8; 32]`, without heap allocation
//! - [`zero_last_byte`], which decodes, clears the last byte and re-encodes
//! - [`Bs58PublicKey`], a key type that parses, prints and (de)serializes as base58
//! - [`as_base58`], for `#[serde(with = ...)]` on raw `[u8; 32]` fields

pub mod alphabet;
pub mod as_base58;
mod codec;
mod error;
mod public_key;
mod string;
mod wide;

pub use codec::{
    MAX_ENCODED_LEN, PUBLIC_KEY_LEN, decode, decode_onto, encode, encode_to_string, zero_last_byte,
};
pub use error::DecodeError;
pub use public_key::Bs58PublicKey;
pub use string::Bs58PublicKeyString;
