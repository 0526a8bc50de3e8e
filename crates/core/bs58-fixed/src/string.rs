//! Stack-allocated output of [`crate::encode`]

use core::{cmp::Ordering, fmt, hash, ops::Deref};

use crate::MAX_ENCODED_LEN;

/// A base58-encoded public key held in a fixed 44-byte buffer.
///
/// Only ever constructed by the encoder, so the used bytes are always
/// symbols of the base58 alphabet.
#[derive(Clone, Copy)]
pub struct Bs58PublicKeyString {
    buf: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl Bs58PublicKeyString {
    /// `buf[..len]` must contain only base58 alphabet symbols
    pub(crate) const fn from_ascii(buf: [u8; MAX_ENCODED_LEN], len: usize) -> Self {
        Self { buf, len }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: the encoder only writes base58 alphabet symbols, which are ASCII
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for Bs58PublicKeyString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Bs58PublicKeyString {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Bs58PublicKeyString> for String {
    fn from(value: Bs58PublicKeyString) -> Self {
        value.as_str().to_owned()
    }
}

// Comparisons only look at the used part of the buffer

impl PartialEq for Bs58PublicKeyString {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Bs58PublicKeyString {}

impl PartialEq<str> for Bs58PublicKeyString {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Bs58PublicKeyString {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Ord for Bs58PublicKeyString {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for Bs58PublicKeyString {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl hash::Hash for Bs58PublicKeyString {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for Bs58PublicKeyString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Bs58PublicKeyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::encode;

    #[test]
    fn test_eq_ignores_unused_buffer() {
        let a = encode(&[7u8; 32]);
        let b = encode(&[7u8; 32]);
        assert_eq!(a, b);
        assert_eq!(a, a.as_str());
        assert_eq!(a.len(), a.as_str().len());
        assert!(!a.is_empty());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_ordering_matches_str() {
        let low = encode(&[1u8; 32]);
        let high = encode(&[2u8; 32]);
        assert_eq!(low.cmp(&high), low.as_str().cmp(high.as_str()));
    }

    #[test]
    fn test_display_and_debug() {
        let zero = encode(&[0u8; 32]);
        assert_eq!(zero.to_string(), "1".repeat(32));
        assert_eq!(format!("{zero:?}"), format!("{:?}", "1".repeat(32)));
        assert_eq!(String::from(zero), "1".repeat(32));
    }
}
