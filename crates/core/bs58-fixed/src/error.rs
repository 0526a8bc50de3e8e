//! Decoding errors

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Decoded length {0} exceeds the 32-byte public key length")]
    LengthMismatch(usize),
}
