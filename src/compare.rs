//! Lexicographic comparison of little-endian limb sequences.
//!
//! Neither operand needs to be normalized: limbs past the end of the
//! shorter sequence compare as zero.

use crate::lib::cmp::Ordering;
use crate::limb::Limb;

/// Check if every limb is zero. An empty sequence is zero.
#[inline]
pub fn is_zero(x: &[Limb]) -> bool {
    x.iter().all(|&xi| xi == 0)
}

/// Length of `x` without its redundant leading zero limbs.
///
/// Returns 0 for an all-zero sequence.
#[inline]
pub fn significant_len(x: &[Limb]) -> usize {
    x.iter().rposition(|&xi| xi != 0).map_or(0, |i| i + 1)
}

/// Compare `x` to `y`, in little-endian order.
pub fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
    let (xlen, ylen) = (significant_len(x), significant_len(y));
    if xlen != ylen {
        return xlen.cmp(&ylen);
    }

    let iter = x[..xlen].iter().rev().zip(y[..ylen].iter().rev());
    for (&xi, &yi) in iter {
        if xi != yi {
            return xi.cmp(&yi);
        }
    }
    Ordering::Equal
}

/// Compare `x` to `y` scaled by `Limb::BITS * index`.
///
/// Limbs of `x` below `index` only matter when the scaled `y` agrees with
/// everything above them.
pub fn compare_at(x: &[Limb], y: &[Limb], index: usize) -> Ordering {
    let ylen = significant_len(y);
    if ylen == 0 {
        return if is_zero(x) {
            Ordering::Equal
        } else {
            Ordering::Greater
        };
    }

    let xlen = significant_len(x);
    if xlen != ylen + index {
        return xlen.cmp(&(ylen + index));
    }

    match compare(&x[index..xlen], &y[..ylen]) {
        Ordering::Equal if !is_zero(&x[..index]) => Ordering::Greater,
        ordering => ordering,
    }
}

/// Check if x is less than y.
#[inline]
pub fn less(x: &[Limb], y: &[Limb]) -> bool {
    compare(x, y) == Ordering::Less
}

/// Check if x is greater than or equal to y.
#[inline]
pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
    !less(x, y)
}
