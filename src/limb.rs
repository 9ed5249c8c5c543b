//! Scalar building-blocks for the limb kernels.
//!
//! A limb is one base-`2^LIMB_BITS` digit of a magnitude. Every sequence
//! operation in this crate is a loop over the primitives below.

use crate::lib::mem;

// ALIASES
// -------

//  Platforms where native 128-bit multiplication is explicitly supported:
//      - x86_64 (Supported via `MUL`).
//      - mips64 (Supported via `DMULTU`, which `HI` and `LO` can be read-from).
//
//  Platforms where native 64-bit multiplication is supported and
//  you can extract hi-lo for 64-bit multiplications.
//      aarch64 (Requires `UMULH` and `MUL` to capture high and low bits).
//      powerpc64 (Requires `MULHDU` and `MULLD` to capture high and low bits).
//
//  Everything else uses 32-bit limbs with a 64-bit wide type.

/// Type for a single limb of a magnitude.
#[cfg(limb_width_32)]
pub type Limb = u32;

/// Type wide enough to hold the full product of two limbs.
#[cfg(limb_width_32)]
pub type Wide = u64;

/// Type for a single limb of a magnitude.
#[cfg(limb_width_64)]
pub type Limb = u64;

/// Type wide enough to hold the full product of two limbs.
#[cfg(limb_width_64)]
pub type Wide = u128;

/// Number of bits in a limb.
pub const LIMB_BITS: u32 = (mem::size_of::<Limb>() * 8) as u32;

// ADDITION

/// Add two limbs and return the resulting value and if overflow happens.
#[inline]
pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_add(y)
}

/// AddAssign two limbs and return if overflow happens.
#[inline]
pub fn iadd(x: &mut Limb, y: Limb) -> bool {
    let t = add(*x, y);
    *x = t.0;
    t.1
}

/// Add `y + bit` to `x`.
///
/// The bit is folded into `y` first, which may itself wrap to zero; the
/// reported flag covers both steps.
#[inline]
pub fn add_bit(x: Limb, y: Limb, bit: bool) -> (Limb, bool) {
    let (y, o0) = y.overflowing_add(bit as Limb);
    let (z, o1) = x.overflowing_add(y);
    (z, o0 | o1)
}

/// AddAssign `y + bit` to `x` and return if overflow happens.
#[inline]
pub fn iadd_bit(x: &mut Limb, y: Limb, bit: bool) -> bool {
    let t = add_bit(*x, y, bit);
    *x = t.0;
    t.1
}

// SUBTRACTION

/// Subtract two limbs and return the resulting value and if overflow happens.
#[inline]
pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
    x.overflowing_sub(y)
}

/// SubAssign two limbs and return if overflow happens.
#[inline]
pub fn isub(x: &mut Limb, y: Limb) -> bool {
    let t = sub(*x, y);
    *x = t.0;
    t.1
}

/// Subtract `y + bit` from `x`.
#[inline]
pub fn sub_bit(x: Limb, y: Limb, bit: bool) -> (Limb, bool) {
    let (y, o0) = y.overflowing_add(bit as Limb);
    let (z, o1) = x.overflowing_sub(y);
    (z, o0 | o1)
}

/// SubAssign `y + bit` from `x` and return if overflow happens.
#[inline]
pub fn isub_bit(x: &mut Limb, y: Limb, bit: bool) -> bool {
    let t = sub_bit(*x, y, bit);
    *x = t.0;
    t.1
}

// MULTIPLICATION

/// Multiply two limbs (with carry) and return the (low, high) components.
#[inline]
pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow, as long as wide is 2x as wide. This is because
    // the following is always true:
    // `Wide::max_value() - (Narrow::max_value() * Narrow::max_value()) >= Narrow::max_value()`
    let z = x as Wide * y as Wide + carry as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

/// Compute `x * y + a + b` and return the (low, high) components.
///
/// `Limb::MAX * Limb::MAX + 2 * Limb::MAX` is exactly `Wide::MAX`, so the
/// sum never leaves the wide type.
#[inline]
pub fn mul_add2(x: Limb, y: Limb, a: Limb, b: Limb) -> (Limb, Limb) {
    let z = x as Wide * y as Wide + a as Wide + b as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

/// Multiply two limbs (with carry) and return the overflow contribution.
#[inline]
pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
    let t = mul(*x, y, carry);
    *x = t.0;
    t.1
}

// DIVISION

/// Divide the two-limb value `high:low` by `divisor`.
///
/// Returns the (quotient, remainder). The quotient only fits in a limb
/// when `high < divisor`, which callers must guarantee.
#[inline]
pub fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb) {
    debug_assert!(high < divisor, "div_wide() quotient does not fit in a limb.");
    let dividend = (high as Wide) << LIMB_BITS | low as Wide;
    let divisor = divisor as Wide;
    ((dividend / divisor) as Limb, (dividend % divisor) as Limb)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_bit_test() {
        assert_eq!(add_bit(1, 2, true), (4, false));
        assert_eq!(add_bit(0, Limb::MAX, true), (0, true));
        assert_eq!(add_bit(5, Limb::MAX, true), (5, true));
        assert_eq!(add_bit(Limb::MAX, 0, true), (0, true));
        assert_eq!(add_bit(Limb::MAX, 0, false), (Limb::MAX, false));
    }

    #[test]
    fn sub_bit_test() {
        assert_eq!(sub_bit(4, 2, true), (1, false));
        assert_eq!(sub_bit(5, Limb::MAX, true), (5, true));
        assert_eq!(sub_bit(0, 0, true), (Limb::MAX, true));
        assert_eq!(sub_bit(0, 0, false), (0, false));
    }

    #[test]
    fn mul_test() {
        assert_eq!(mul(2, 3, 0), (6, 0));
        assert_eq!(mul(Limb::MAX, Limb::MAX, 0), (1, Limb::MAX - 1));
        assert_eq!(mul(Limb::MAX, Limb::MAX, Limb::MAX), (0, Limb::MAX));
        assert_eq!(
            mul_add2(Limb::MAX, Limb::MAX, Limb::MAX, Limb::MAX),
            (Limb::MAX, Limb::MAX)
        );
    }

    #[test]
    fn div_wide_test() {
        assert_eq!(div_wide(0, 7, 2), (3, 1));
        assert_eq!(div_wide(1, 0, 2), (1 << (LIMB_BITS - 1), 0));
        assert_eq!(div_wide(Limb::MAX - 1, Limb::MAX, Limb::MAX), (Limb::MAX, Limb::MAX - 1));
    }
}
