//! Base58 codec for 32-byte public keys
//!
//! The string is read as a big-endian base-58 number. Each leading `'1'`
//! stands for one leading zero byte, and the rest of the number is written
//! right-aligned into the 32-byte buffer. Encoding is the exact inverse and
//! always produces the canonical (minimal) string.

use tracing::debug;

use crate::{
    DecodeError,
    alphabet::{ZERO_SYMBOL, digit_of, symbol_of},
    string::Bs58PublicKeyString,
    wide::WideUint,
};

/// Length in bytes of a decoded public key
pub const PUBLIC_KEY_LEN: usize = 32;

/// Longest canonical encoding of a [`PUBLIC_KEY_LEN`]-byte buffer
pub const MAX_ENCODED_LEN: usize = 44;

const BASE: u32 = 58;

// 58^5 is the largest power of 58 that fits in a u32 limb
const CHUNK_DIGITS: usize = 5;
const CHUNK_DIVISOR: u32 = BASE.pow(CHUNK_DIGITS as u32);

/// 36 bytes, enough for any value that could still be a valid key plus one spare byte
type DecodeAccumulator = WideUint<9>;
type EncodeAccumulator = WideUint<8>;

/// 768 bytes, enough for [`MAX_EXACT_DIGITS`] digits (58^1024 < 2^6000)
type ExactAccumulator = WideUint<192>;

/// Longest digit string whose decoded length is reported exactly
const MAX_EXACT_DIGITS: usize = 1024;

/// Decodes a base58 string into a 32-byte public key.
///
/// Strings shorter than canonical are left-padded with zero bytes, so `""`
/// and `"1"` both decode to the all-zero key.
pub fn decode(input: &str) -> Result<[u8; PUBLIC_KEY_LEN], DecodeError> {
    let mut out = [0u8; PUBLIC_KEY_LEN];
    decode_onto(input, &mut out)?;
    Ok(out)
}

/// Same as [`decode`], but writes into `out`. `out` is untouched on error.
pub fn decode_onto(input: &str, out: &mut [u8; PUBLIC_KEY_LEN]) -> Result<(), DecodeError> {
    let mut value = DecodeAccumulator::ZERO;
    let mut leading_zeros = 0;
    let mut in_leading = true;
    let mut overflowed = false;

    for (position, character) in input.char_indices() {
        let digit = lookup(character).ok_or_else(|| {
            debug!(position, ?character, "rejected base58 input");
            DecodeError::InvalidCharacter {
                character,
                position,
            }
        })?;

        if in_leading && digit == 0 {
            leading_zeros += 1;
            continue;
        }
        in_leading = false;

        // Keep scanning after an overflow so that bad characters are still reported
        if !overflowed && value.mul_add_small(BASE, u32::from(digit)) != 0 {
            overflowed = true;
        }
    }

    let decoded_len = if overflowed {
        leading_zeros + overflowed_len(&input.as_bytes()[leading_zeros..])
    } else {
        leading_zeros + value.significant_bytes()
    };
    if decoded_len > PUBLIC_KEY_LEN {
        debug!(decoded_len, "base58 input does not fit a public key");
        return Err(DecodeError::LengthMismatch(decoded_len));
    }

    value.write_be_bytes(out);
    Ok(())
}

/// Encodes a 32-byte public key as its canonical base58 string.
///
/// The all-zero key encodes to 32 `'1'`s.
pub fn encode(bytes: &[u8; PUBLIC_KEY_LEN]) -> Bs58PublicKeyString {
    let leading_zeros = bytes.iter().take_while(|byte| **byte == 0).count();

    // Least significant digit first. Whole chunks are written, so there is
    // room for one chunk past the longest encoding.
    let mut digits = [0u8; MAX_ENCODED_LEN + CHUNK_DIGITS];
    let mut len = 0;
    let mut value = EncodeAccumulator::from_be_bytes(bytes);
    while !value.is_zero() {
        let mut chunk = value.div_rem_small(CHUNK_DIVISOR);
        for digit in &mut digits[len..len + CHUNK_DIGITS] {
            *digit = (chunk % BASE) as u8;
            chunk /= BASE;
        }
        len += CHUNK_DIGITS;
    }
    // The top chunk is zero-padded
    while len > 0 && digits[len - 1] == 0 {
        len -= 1;
    }

    let mut buf = [ZERO_SYMBOL; MAX_ENCODED_LEN];
    for (slot, digit) in buf[leading_zeros..].iter_mut().zip(digits[..len].iter().rev()) {
        *slot = symbol_of(*digit);
    }
    Bs58PublicKeyString::from_ascii(buf, leading_zeros + len)
}

/// Same as [`encode`], returning an owned `String`
pub fn encode_to_string(bytes: &[u8; PUBLIC_KEY_LEN]) -> String {
    encode(bytes).as_str().to_owned()
}

/// Decodes `input`, sets the last byte of the key to zero and re-encodes it
pub fn zero_last_byte(input: &str) -> Result<Bs58PublicKeyString, DecodeError> {
    let mut bytes = decode(input)?;
    bytes[PUBLIC_KEY_LEN - 1] = 0;
    Ok(encode(&bytes))
}

fn lookup(character: char) -> Option<u8> {
    if character.is_ascii() {
        digit_of(character as u8)
    } else {
        None
    }
}

/// Byte length of an already-validated digit string that overflowed the
/// decode accumulator. Only reached for inputs that are going to be rejected.
///
/// Exact up to [`MAX_EXACT_DIGITS`] digits. Longer strings get the smallest
/// length any string of that many digits can have, so the work stays bounded.
fn overflowed_len(symbols: &[u8]) -> usize {
    if symbols.len() > MAX_EXACT_DIGITS {
        return min_len_for_digits(symbols.len());
    }

    let mut value = ExactAccumulator::ZERO;
    for symbol in symbols {
        value.mul_add_small(BASE, digit_of(*symbol).map_or(0, u32::from));
    }
    value.significant_bytes()
}

/// Lower bound on the bytes needed by a number of `digits` base58 digits,
/// the first of them non-zero: `floor((digits - 1) * log256(58)) + 1`.
/// `5857 / 8000` rounds `log2(58) / 8` down, so the bound never overshoots.
fn min_len_for_digits(digits: usize) -> usize {
    digits.saturating_sub(1) * 5857 / 8000 + 1
}
