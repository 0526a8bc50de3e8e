//! Zero-last-byte transform over base58-encoded public keys
//!
//! Every entry point takes the key in a different shape (by value, by
//! reference, optional, as a slice, or as the `arg` field of a record) and
//! delegates to the same transform. An absent key is treated as the all-zero
//! key, so the optional variants return 32 `'1'`s for `None`.

use bs58_fixed::zero_last_byte;
pub use bs58_fixed::{Bs58PublicKey, DecodeError};

mod errors;
mod records;

pub use errors::{Result, ZeroLastError};
pub use records::{
    ZeroLastObj, ZeroLastOptObj, ZeroLastVecObj, zero_last_json, zero_last_obj, zero_last_opt_obj,
    zero_last_vec_obj,
};

/// Base58 public key as passed to the transforms
pub type Bs58Pk = Bs58PublicKey;

/// Sets the last byte of `key` to zero
pub fn zero_last(key: Bs58Pk) -> Bs58Pk {
    key.with_last_byte_zeroed()
}

/// Same as [`zero_last`], but by reference
pub fn zero_last_ref(key: &Bs58Pk) -> Bs58Pk {
    zero_last(*key)
}

/// Same as [`zero_last`], but returns the all-zero key if `key` is `None`
pub fn zero_last_opt(key: Option<Bs58Pk>) -> Bs58Pk {
    key.map(zero_last).unwrap_or_default()
}

/// Same as [`zero_last`], for every key in order
pub fn zero_last_vec(keys: &[Bs58Pk]) -> Vec<Bs58Pk> {
    keys.iter().map(zero_last_ref).collect()
}

/// Same as [`zero_last`], straight from and to the base58 string
pub fn zero_last_str(input: &str) -> Result<String> {
    Ok(zero_last_byte(input)?.into())
}
