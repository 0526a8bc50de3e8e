//! 32-byte public key that travels as a base58 string

use core::{fmt, str::FromStr};

use crate::{Bs58PublicKeyString, DecodeError, PUBLIC_KEY_LEN, decode, encode};

/// Raw public key bytes. Parsed from and displayed as base58.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Bs58PublicKey(pub [u8; PUBLIC_KEY_LEN]);

impl Bs58PublicKey {
    /// The all-zero key, encoded as 32 `'1'`s
    pub const ZERO: Self = Self([0u8; PUBLIC_KEY_LEN]);

    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; PUBLIC_KEY_LEN] {
        self.0
    }

    /// Canonical base58 form
    pub fn encode(&self) -> Bs58PublicKeyString {
        encode(&self.0)
    }

    /// Returns a copy with the last byte set to zero
    #[must_use]
    pub const fn with_last_byte_zeroed(self) -> Self {
        let mut bytes = self.0;
        bytes[PUBLIC_KEY_LEN - 1] = 0;
        Self(bytes)
    }
}

impl Default for Bs58PublicKey {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Bs58PublicKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).map(Self)
    }
}

impl TryFrom<&str> for Bs58PublicKey {
    type Error = DecodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<[u8; PUBLIC_KEY_LEN]> for Bs58PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Bs58PublicKey> for [u8; PUBLIC_KEY_LEN] {
    fn from(key: Bs58PublicKey) -> Self {
        key.0
    }
}

impl AsRef<[u8]> for Bs58PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bs58PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_str())
    }
}

impl fmt::Debug for Bs58PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bs58PublicKey")
            .field(&self.encode().as_str())
            .finish()
    }
}
