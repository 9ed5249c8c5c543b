//! Multiplication of limb sequences.
//!
//! Every `*_into` function fully overwrites a destination of exactly
//! `x.len() + y.len()` limbs (`2 * x.len()` when squaring). Whatever the
//! destination held before the call is ignored, so callers can hand in
//! freshly allocated storage without clearing it first.

use crate::carry;
use crate::compare::{self, significant_len};
use crate::lib::{cmp, vec, Vec};
use crate::limb::{self, Limb, LIMB_BITS};
use crate::slice::LimbsMut;

/// Number of limbs at which to switch from long multiplication to
/// Karatsuba.
///
/// Below this length the lower constant factor of long multiplication
/// wins. The check is on the shorter operand.
pub const KARATSUBA_CUTOFF: usize = 20;

// DIGIT

/// MulAssign a digit and add `addend`, returning the overflow limb.
#[inline]
pub fn imul_digit_add<L>(x: &mut L, multiplier: Limb, addend: Limb) -> Limb
where
    L: LimbsMut + ?Sized,
{
    let mut carry = addend;
    for xi in x.as_limbs_mut() {
        carry = limb::imul(xi, multiplier, carry);
    }
    carry
}

/// Write `x * multiplier` into `z`, which must have `x.len() + 1` limbs.
pub fn mul_digit_into<L>(z: &mut L, x: &[Limb], multiplier: Limb)
where
    L: LimbsMut + ?Sized,
{
    assert_eq!(z.limb_count(), x.len() + 1, "mul_digit_into() destination length");
    let mut carry: Limb = 0;
    for (zi, &xi) in z.as_limbs_mut().iter_mut().zip(x) {
        let (low, high) = limb::mul(xi, multiplier, carry);
        *zi = low;
        carry = high;
    }
    z.set_limb(x.len(), carry);
}

// DISPATCH

/// Write `x * y` into `z`, choosing the algorithm by operand length.
pub fn mul_into<L>(z: &mut L, x: &[Limb], y: &[Limb])
where
    L: LimbsMut + ?Sized,
{
    assert_eq!(z.limb_count(), x.len() + y.len(), "mul_into() destination length");
    if x.len().min(y.len()) < KARATSUBA_CUTOFF {
        long_mul_into(z, x, y);
    } else {
        karatsuba_mul_into(z, x, y);
    }
}

/// Write `x * x` into `z`, choosing the algorithm by operand length.
pub fn square_into<L>(z: &mut L, x: &[Limb])
where
    L: LimbsMut + ?Sized,
{
    assert_eq!(z.limb_count(), 2 * x.len(), "square_into() destination length");
    if x.len() < KARATSUBA_CUTOFF {
        long_square_into(z, x);
    } else {
        karatsuba_square_into(z, x);
    }
}

// LONG

/// Grade-school multiplication algorithm.
///
/// The first row writes its limbs directly; each following row scales `x`
/// by one limb of `y`, accumulates it at the matching offset, and stores
/// its carry as the next, not yet written, limb.
pub fn long_mul_into<L>(z: &mut L, x: &[Limb], y: &[Limb])
where
    L: LimbsMut + ?Sized,
{
    let z = z.as_limbs_mut();
    assert_eq!(z.len(), x.len() + y.len(), "long_mul_into() destination length");
    if x.is_empty() || y.is_empty() {
        z.fill(0);
        return;
    }

    mul_digit_into(&mut z[..x.len() + 1], x, y[0]);
    for (i, &yi) in y.iter().enumerate().skip(1) {
        let (index, carry) = carry::iadd_product_in_intersection(z, x, yi, 0, i);
        z.set_limb(index, carry);
    }
}

/// Grade-school squaring.
///
/// Accumulates the off-diagonal triangle `x[i] * x[j]` for `i < j` once,
/// then doubles it and adds the diagonal squares in a single pass.
pub fn long_square_into<L>(z: &mut L, x: &[Limb])
where
    L: LimbsMut + ?Sized,
{
    let z = z.as_limbs_mut();
    assert_eq!(z.len(), 2 * x.len(), "long_square_into() destination length");
    let n = x.len();
    if n == 0 {
        return;
    }

    // Row `i` covers `x[i + 1..] * x[i]` at offset `2 * i + 1`.
    z[0] = 0;
    mul_digit_into(&mut z[1..n + 1], &x[1..], x[0]);
    for i in 1..n {
        let (index, carry) = carry::iadd_product_in_intersection(z, &x[i + 1..], x[i], 0, 2 * i + 1);
        z[index] = carry;
    }

    let mut shifted: Limb = 0;
    let mut carry = false;
    let mut fold = |zk: &mut Limb, diagonal: Limb| {
        let doubled = *zk << 1 | shifted;
        shifted = *zk >> (LIMB_BITS - 1);
        let (sum, overflow) = limb::add_bit(doubled, diagonal, carry);
        *zk = sum;
        carry = overflow;
    };
    for (i, &xi) in x.iter().enumerate() {
        let (low, high) = limb::mul(xi, xi, 0);
        fold(&mut z[2 * i], low);
        fold(&mut z[2 * i + 1], high);
    }
    debug_assert!(shifted == 0 && !carry, "long_square_into() overflowed");
}

// KARATSUBA

/// Scratch limbs needed by Karatsuba on operands of at most `len` limbs,
/// covering every recursion level below it.
///
/// One level holds both half-differences and a work area for the z0/z1
/// copies or z2; recursion into z2 runs in the scratch past that level.
fn karatsuba_scratch_len(len: usize) -> usize {
    let half = (len + 1) / 2;
    let level = 2 * half + 2 * len;
    if half < KARATSUBA_CUTOFF {
        level
    } else {
        level + karatsuba_scratch_len(half)
    }
}

/// Split `x` at `m` into (lo, hi), dropping redundant leading zeros.
#[inline]
fn karatsuba_split(x: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
    let (lo, hi) = x.split_at(m.min(x.len()));
    (&lo[..significant_len(lo)], &hi[..significant_len(hi)])
}

/// Length of a product buffer, zero when either operand is zero.
#[inline]
fn product_len(x: &[Limb], y: &[Limb]) -> usize {
    if x.is_empty() || y.is_empty() {
        0
    } else {
        x.len() + y.len()
    }
}

/// Write `x * y` into a buffer of `product_len(x, y)` limbs.
#[inline]
fn product_into(z: &mut [Limb], x: &[Limb], y: &[Limb], scratch: &mut [Limb]) {
    if z.is_empty() {
        return;
    }
    if x.len().min(y.len()) < KARATSUBA_CUTOFF {
        long_mul_into(z, x, y);
    } else {
        karatsuba_mul_with_scratch(z, x, y, scratch);
    }
}

/// Write `x * x` into a buffer of `2 * x.len()` limbs.
#[inline]
fn square_product_into(z: &mut [Limb], x: &[Limb], scratch: &mut [Limb]) {
    if x.len() < KARATSUBA_CUTOFF {
        long_square_into(z, x);
    } else {
        karatsuba_square_with_scratch(z, x, scratch);
    }
}

/// Write `|x - y|` into `z` and return if the difference is negative.
///
/// `z` must hold `max(x.len(), y.len())` limbs.
fn difference_into(z: &mut [Limb], x: &[Limb], y: &[Limb]) -> bool {
    let negative = compare::less(x, y);
    let (larger, smaller) = if negative { (y, x) } else { (x, y) };
    z[..larger.len()].copy_from_slice(larger);
    z[larger.len()..].fill(0);
    let (_, borrow) = carry::isub_limbs(z, smaller, 0);
    debug_assert!(!borrow);
    negative
}

/// Limit `y` to the `room` limbs that remain in a destination.
///
/// The combination steps work modulo the destination width, so limbs of an
/// intermediate term past the end only ever cancel out.
#[inline]
fn fit(y: &[Limb], room: usize) -> &[Limb] {
    &y[..cmp::min(y.len(), room)]
}

/// Karatsuba multiplication algorithm.
///
/// Splits both operands at the midpoint of the longer one and computes
/// `z0 = x0 * y0`, `z1 = x1 * y1` and `z2 = |x1 - x0| * |y1 - y0|`. The
/// result is `z0 + (z0 + z1 -/+ z2) * B^half + z1 * B^(2 * half)`, where
/// `z2` is added only when the two half-differences have opposite signs.
///
/// All levels of the recursion share one scratch allocation made here.
/// Recursive products bottom out in long multiplication. Callers may invoke
/// this directly on short inputs.
pub fn karatsuba_mul_into<L>(z: &mut L, x: &[Limb], y: &[Limb])
where
    L: LimbsMut + ?Sized,
{
    let z = z.as_limbs_mut();
    assert_eq!(z.len(), x.len() + y.len(), "karatsuba_mul_into() destination length");
    if x.is_empty() || y.is_empty() {
        z.fill(0);
        return;
    }

    let mut scratch: Vec<Limb> = vec![0; karatsuba_scratch_len(x.len().max(y.len()))];
    karatsuba_mul_with_scratch(z, x, y, &mut scratch);
}

fn karatsuba_mul_with_scratch(z: &mut [Limb], x: &[Limb], y: &[Limb], scratch: &mut [Limb]) {
    let half = (x.len().max(y.len()) + 1) / 2;
    let (x0, x1) = karatsuba_split(x, half);
    let (y0, y1) = karatsuba_split(y, half);
    let z0len = product_len(x0, y0);
    let z1len = product_len(x1, y1);
    let dxlen = x0.len().max(x1.len());
    let dylen = y0.len().max(y1.len());

    // z0 and z1 go straight into their final position. Nothing in the
    // scratch is live yet, so their recursion may use all of it.
    {
        let (lo, hi) = z.split_at_mut(2 * half);
        product_into(&mut lo[..z0len], x0, y0, scratch);
        lo[z0len..].fill(0);
        product_into(&mut hi[..z1len], x1, y1, scratch);
        hi[z1len..].fill(0);
    }

    let (dx, rest) = scratch.split_at_mut(dxlen);
    let (dy, rest) = rest.split_at_mut(dylen);
    let (work, rest) = rest.split_at_mut(cmp::max(z0len + z1len, dxlen + dylen));

    // Fold copies of z0 and z1 into the middle term.
    let room = z.len() - half;
    work[..z0len].copy_from_slice(&z[..z0len]);
    work[z0len..z0len + z1len].copy_from_slice(&z[2 * half..2 * half + z1len]);
    {
        let (z0, z1) = work[..z0len + z1len].split_at(z0len);
        carry::iadd_limbs(z, fit(z0, room), half);
        carry::iadd_limbs(z, fit(z1, room), half);
    }

    // The copies are folded, so their storage now holds z2.
    let x_negative = difference_into(dx, x1, x0);
    let y_negative = difference_into(dy, y1, y0);
    let dx = &dx[..significant_len(dx)];
    let dy = &dy[..significant_len(dy)];
    let z2 = &mut work[..product_len(dx, dy)];
    product_into(z2, dx, dy, rest);

    if x_negative != y_negative {
        carry::iadd_limbs(z, fit(z2, room), half);
    } else {
        carry::isub_limbs(z, fit(z2, room), half);
    }
}

/// Karatsuba squaring.
///
/// Same structure as `karatsuba_mul_into` with a single operand, so the
/// cross term `|x1 - x0|^2` is always subtracted.
pub fn karatsuba_square_into<L>(z: &mut L, x: &[Limb])
where
    L: LimbsMut + ?Sized,
{
    let z = z.as_limbs_mut();
    assert_eq!(z.len(), 2 * x.len(), "karatsuba_square_into() destination length");
    if x.is_empty() {
        return;
    }

    let mut scratch: Vec<Limb> = vec![0; karatsuba_scratch_len(x.len())];
    karatsuba_square_with_scratch(z, x, &mut scratch);
}

fn karatsuba_square_with_scratch(z: &mut [Limb], x: &[Limb], scratch: &mut [Limb]) {
    let half = (x.len() + 1) / 2;
    let (x0, x1) = karatsuba_split(x, half);
    let z0len = 2 * x0.len();
    let z1len = 2 * x1.len();
    let dxlen = x0.len().max(x1.len());

    {
        let (lo, hi) = z.split_at_mut(2 * half);
        square_product_into(&mut lo[..z0len], x0, scratch);
        lo[z0len..].fill(0);
        square_product_into(&mut hi[..z1len], x1, scratch);
        hi[z1len..].fill(0);
    }

    let (dx, rest) = scratch.split_at_mut(dxlen);
    let (work, rest) = rest.split_at_mut(cmp::max(z0len + z1len, 2 * dxlen));

    let room = z.len() - half;
    work[..z0len].copy_from_slice(&z[..z0len]);
    work[z0len..z0len + z1len].copy_from_slice(&z[2 * half..2 * half + z1len]);
    {
        let (z0, z1) = work[..z0len + z1len].split_at(z0len);
        carry::iadd_limbs(z, fit(z0, room), half);
        carry::iadd_limbs(z, fit(z1, room), half);
    }

    difference_into(dx, x1, x0);
    let dx = &dx[..significant_len(dx)];
    let z2 = &mut work[..2 * dx.len()];
    square_product_into(z2, dx, rest);
    carry::isub_limbs(z, fit(z2, room), half);
}

// TESTS
// -----
