//! The base58 (Bitcoin) alphabet and its reverse lookup table

/// The 58 symbols in digit order. `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Symbol for digit zero, which also stands for a leading zero byte
pub const ZERO_SYMBOL: u8 = ALPHABET[0];

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the digit value of an ASCII symbol, or `None` if it is not in the alphabet
#[inline]
pub const fn digit_of(symbol: u8) -> Option<u8> {
    if symbol >= 128 {
        return None;
    }
    match DECODE_TABLE[symbol as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

/// Returns the symbol for a digit in `0..58`
#[inline]
pub const fn symbol_of(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}
