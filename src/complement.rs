//! One's and two's complement formation.
//!
//! Magnitudes are stored sign-less; these produce the two's complement
//! representation on demand for callers that layer a sign on top.

use crate::carry;
use crate::limb::Limb;
use crate::slice::LimbsMut;

/// Flip every bit of `x`.
#[inline]
pub fn form_ones_complement<L>(x: &mut L)
where
    L: LimbsMut + ?Sized,
{
    for xi in x.as_limbs_mut() {
        *xi = !*xi;
    }
}

/// Replace `x` with its two's complement.
///
/// Returns the carry out of the most significant limb, which is set only
/// when `x` was zero.
#[inline]
pub fn form_twos_complement<L>(x: &mut L) -> bool
where
    L: LimbsMut + ?Sized,
{
    form_twos_complement_subsequence(x, true)
}

/// Replace `x` with its one's complement plus an incoming `carry`.
///
/// This lets a caller that owns lower limbs elsewhere complement them
/// first and fold their carry into the complement of this range. With
/// `carry` set this is exactly `form_twos_complement`.
pub fn form_twos_complement_subsequence<L>(x: &mut L, carry: bool) -> bool
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    form_ones_complement(x);
    carry::iadd_bit(x, carry, 0).1
}
