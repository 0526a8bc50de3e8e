//! Fixed-width unsigned integer used as the base-conversion accumulator
//!
//! Limbs are `u32`, stored least-significant first, so that a limb times a
//! small factor plus a carry always fits in a `u64`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WideUint<const LIMBS: usize> {
    limbs: [u32; LIMBS],
}

impl<const LIMBS: usize> WideUint<LIMBS> {
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// Capacity in bytes
    pub const BYTES: usize = LIMBS * 4;

    /// Loads a big-endian byte string. Bytes beyond [`Self::BYTES`] are ignored,
    /// callers only pass slices that fit.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut value = Self::ZERO;
        for (i, byte) in bytes.iter().rev().take(Self::BYTES).enumerate() {
            value.limbs[i / 4] |= u32::from(*byte) << ((i % 4) * 8);
        }
        value
    }

    /// Writes the low `out.len()` bytes of the value, big-endian, into `out`
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().rev().enumerate() {
            *byte = match self.limbs.get(i / 4) {
                Some(limb) => (limb >> ((i % 4) * 8)) as u8,
                None => 0,
            };
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|limb| *limb == 0)
    }

    /// Length of the minimal big-endian representation. Zero has length 0.
    pub fn significant_bytes(&self) -> usize {
        match self.limbs.iter().rposition(|limb| *limb != 0) {
            Some(top) => {
                let top_bits = 32 - self.limbs[top].leading_zeros() as usize;
                top * 4 + top_bits.div_ceil(8)
            }
            None => 0,
        }
    }

    /// `self = self * mul + add`, returning the carry that did not fit.
    /// A non-zero return value means the result overflowed and `self` is truncated.
    pub fn mul_add_small(&mut self, mul: u32, add: u32) -> u32 {
        let mut carry = u64::from(add);
        for limb in self.limbs.iter_mut() {
            let acc = u64::from(*limb) * u64::from(mul) + carry;
            *limb = acc as u32;
            carry = acc >> 32;
        }
        carry as u32
    }

    /// `self = self / div`, returning the remainder. `div` must be non-zero.
    pub fn div_rem_small(&mut self, div: u32) -> u32 {
        let div = u64::from(div);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let acc = (rem << 32) | u64::from(*limb);
            *limb = (acc / div) as u32;
            rem = acc % div;
        }
        rem as u32
    }
}
