//! Carry and borrow propagation over limb sequences.
//!
//! Every operation adds (or subtracts) an operand into `x` starting at limb
//! `index` and returns the index past the last limb it touched together with
//! the pending carry (or borrow). Limbs below `index` are never touched.
//!
//! Operations come in two modes:
//!
//! - `*_in_intersection` touches exactly as many limbs of `x` as the operand
//!   has, and leaves any leftover carry to the caller.
//! - The plain forms keep propagating a lone carry through the rest of `x`
//!   until it vanishes or `x` ends. A carry still pending at the end is
//!   reported as overflow; it is never trapped.
//!
//! The destination may be any [`LimbsMut`] buffer: a slice, a fixed array, a
//! `Vec` or a [`Magnitude`](crate::Magnitude). Operands are plain slices.
//! An operand that does not fit inside `x` at `index` is a caller error and
//! panics.

use crate::limb::{self, Limb};
use crate::slice::LimbsMut;

// ADDITION

/// AddAssign a single bit at `index`, propagating the carry.
#[inline]
pub fn iadd_bit<L>(x: &mut L, bit: bool, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    debug_assert!(index <= x.len());
    let mut index = index;
    let mut carry = bit;
    while carry && index < x.len() {
        carry = limb::iadd(&mut x[index], 1);
        index += 1;
    }
    (index, carry)
}

/// AddAssign a digit to the single limb at `index`.
#[inline]
pub fn iadd_digit_in_intersection<L>(x: &mut L, digit: Limb, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let carry = limb::iadd(&mut x[index], digit);
    (index + 1, carry)
}

/// AddAssign a digit at `index`, propagating the carry.
#[inline]
pub fn iadd_digit<L>(x: &mut L, digit: Limb, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, carry) = iadd_digit_in_intersection(x, digit, index);
    iadd_bit(x, carry, index)
}

/// AddAssign `digit + bit` to the single limb at `index`.
///
/// The bit is added into the digit first, so a maximal digit plus a set bit
/// reports a carry even though the limb itself is unchanged.
#[inline]
pub fn iadd_digit_plus_bit_in_intersection<L>(
    x: &mut L,
    digit: Limb,
    bit: bool,
    index: usize,
) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let carry = limb::iadd_bit(&mut x[index], digit, bit);
    (index + 1, carry)
}

/// AddAssign `digit + bit` at `index`, propagating the carry.
#[inline]
pub fn iadd_digit_plus_bit<L>(x: &mut L, digit: Limb, bit: bool, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, carry) = iadd_digit_plus_bit_in_intersection(x, digit, bit, index);
    iadd_bit(x, carry, index)
}

/// AddAssign `y + bit` to `x[index..index + y.len()]`.
pub fn iadd_limbs_plus_bit_in_intersection<L>(
    x: &mut L,
    y: &[Limb],
    bit: bool,
    index: usize,
) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let end = index + y.len();
    let mut carry = bit;
    for (xi, &yi) in x[index..end].iter_mut().zip(y) {
        carry = limb::iadd_bit(xi, yi, carry);
    }
    (end, carry)
}

/// AddAssign `y + bit` at `index`, propagating the carry.
#[inline]
pub fn iadd_limbs_plus_bit<L>(x: &mut L, y: &[Limb], bit: bool, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, carry) = iadd_limbs_plus_bit_in_intersection(x, y, bit, index);
    iadd_bit(x, carry, index)
}

/// AddAssign `y` at `index`, propagating the carry.
#[inline]
pub fn iadd_limbs<L>(x: &mut L, y: &[Limb], index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    iadd_limbs_plus_bit(x, y, false, index)
}

/// AddAssign `y * multiplier + addend` to `x[index..index + y.len()]`.
///
/// Returns the index past the intersection and the carry digit owed to the
/// limb at that index. Each step computes `x[i] + y[j] * multiplier + carry`
/// in the wide type, which cannot overflow.
pub fn iadd_product_in_intersection<L>(
    x: &mut L,
    y: &[Limb],
    multiplier: Limb,
    addend: Limb,
    index: usize,
) -> (usize, Limb)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let end = index + y.len();
    let mut carry = addend;
    for (xi, &yi) in x[index..end].iter_mut().zip(y) {
        let (low, high) = limb::mul_add2(yi, multiplier, *xi, carry);
        *xi = low;
        carry = high;
    }
    (end, carry)
}

/// AddAssign `y * multiplier + addend` at `index`, propagating the carry.
pub fn iadd_product<L>(
    x: &mut L,
    y: &[Limb],
    multiplier: Limb,
    addend: Limb,
    index: usize,
) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, carry) = iadd_product_in_intersection(x, y, multiplier, addend, index);
    if index == x.len() {
        (index, carry != 0)
    } else {
        iadd_digit(x, carry, index)
    }
}

// SUBTRACTION

/// SubAssign a single bit at `index`, propagating the borrow.
#[inline]
pub fn isub_bit<L>(x: &mut L, bit: bool, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    debug_assert!(index <= x.len());
    let mut index = index;
    let mut borrow = bit;
    while borrow && index < x.len() {
        borrow = limb::isub(&mut x[index], 1);
        index += 1;
    }
    (index, borrow)
}

/// SubAssign a digit from the single limb at `index`.
#[inline]
pub fn isub_digit_in_intersection<L>(x: &mut L, digit: Limb, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let borrow = limb::isub(&mut x[index], digit);
    (index + 1, borrow)
}

/// SubAssign a digit at `index`, propagating the borrow.
#[inline]
pub fn isub_digit<L>(x: &mut L, digit: Limb, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, borrow) = isub_digit_in_intersection(x, digit, index);
    isub_bit(x, borrow, index)
}

/// SubAssign `digit + bit` from the single limb at `index`.
#[inline]
pub fn isub_digit_plus_bit_in_intersection<L>(
    x: &mut L,
    digit: Limb,
    bit: bool,
    index: usize,
) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let borrow = limb::isub_bit(&mut x[index], digit, bit);
    (index + 1, borrow)
}

/// SubAssign `digit + bit` at `index`, propagating the borrow.
#[inline]
pub fn isub_digit_plus_bit<L>(x: &mut L, digit: Limb, bit: bool, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, borrow) = isub_digit_plus_bit_in_intersection(x, digit, bit, index);
    isub_bit(x, borrow, index)
}

/// SubAssign `y + bit` from `x[index..index + y.len()]`.
pub fn isub_limbs_plus_bit_in_intersection<L>(
    x: &mut L,
    y: &[Limb],
    bit: bool,
    index: usize,
) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let end = index + y.len();
    let mut borrow = bit;
    for (xi, &yi) in x[index..end].iter_mut().zip(y) {
        borrow = limb::isub_bit(xi, yi, borrow);
    }
    (end, borrow)
}

/// SubAssign `y + bit` at `index`, propagating the borrow.
#[inline]
pub fn isub_limbs_plus_bit<L>(x: &mut L, y: &[Limb], bit: bool, index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, borrow) = isub_limbs_plus_bit_in_intersection(x, y, bit, index);
    isub_bit(x, borrow, index)
}

/// SubAssign `y` at `index`, propagating the borrow.
#[inline]
pub fn isub_limbs<L>(x: &mut L, y: &[Limb], index: usize) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    isub_limbs_plus_bit(x, y, false, index)
}

/// SubAssign `y * multiplier + addend` from `x[index..index + y.len()]`.
///
/// Returns the index past the intersection and the digit still owed by the
/// limb at that index. The owed digit is `high + borrow`, which fits: a
/// maximal high half only occurs with a zero low half, which cannot borrow.
pub fn isub_product_in_intersection<L>(
    x: &mut L,
    y: &[Limb],
    multiplier: Limb,
    addend: Limb,
    index: usize,
) -> (usize, Limb)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let end = index + y.len();
    let mut carry = addend;
    for (xi, &yi) in x[index..end].iter_mut().zip(y) {
        let (low, high) = limb::mul(yi, multiplier, carry);
        let borrow = limb::isub(xi, low);
        carry = high + borrow as Limb;
    }
    (end, carry)
}

/// SubAssign `y * multiplier + addend` at `index`, propagating the borrow.
pub fn isub_product<L>(
    x: &mut L,
    y: &[Limb],
    multiplier: Limb,
    addend: Limb,
    index: usize,
) -> (usize, bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let (index, carry) = isub_product_in_intersection(x, y, multiplier, addend, index);
    if index == x.len() {
        (index, carry != 0)
    } else {
        isub_digit(x, carry, index)
    }
}

// TESTS
// -----
