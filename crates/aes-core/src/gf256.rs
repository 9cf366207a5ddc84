//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Addition in the field is XOR; only multiplication needs a routine.

/// Low byte of the AES reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by `x` (i.e. by 2).
#[inline]
pub fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements using shift-and-add ("peasant") multiplication.
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        b >>= 1;
        a = xtime(a);
    }
    product
}
