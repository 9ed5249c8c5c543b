//! Division of limb sequences.
//!
//! Single-limb divisors use schoolbook long division from the most
//! significant limb. Longer divisors use Knuth's Algorithm D (TAOCP vol. 2,
//! 4.3.1), which expects the caller to normalize the divisor so its top bit
//! is set; `div_rem_normalized` drives it one quotient limb at a time.

use crate::carry;
use crate::limb::{self, Limb};
use crate::overflow::Overflow;
use crate::slice::{Limbs, LimbsMut};

// DIGIT

/// DivAssign a digit, returning the remainder.
///
/// Dividing by zero leaves `x` untouched and reports the dividend's least
/// significant limb as the partial remainder, with the overflow flag set.
pub fn idiv_digit<L>(x: &mut L, divisor: Limb) -> Overflow<Limb>
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    if divisor == 0 {
        return Overflow::new(x.first().copied().unwrap_or(0), true);
    }

    let mut remainder: Limb = 0;
    for xi in x.iter_mut().rev() {
        let (quotient, rem) = limb::div_wide(remainder, *xi, divisor);
        *xi = quotient;
        remainder = rem;
    }
    Overflow::new(remainder, false)
}

/// Calculate `x % divisor` without modifying `x`.
///
/// Dividing by zero reports the same partial value as `idiv_digit`.
pub fn rem_digit(x: &[Limb], divisor: Limb) -> Overflow<Limb> {
    if divisor == 0 {
        return Overflow::new(x.first().copied().unwrap_or(0), true);
    }

    let remainder = x
        .iter()
        .rev()
        .fold(0, |remainder, &xi| limb::div_wide(remainder, xi, divisor).1);
    Overflow::new(remainder, false)
}

// ALGORITHM D

/// Compute one quotient limb of Algorithm D.
///
/// `window` holds the top `divisor.len() + 1` limbs of the partial
/// remainder, whose value must be less than `divisor * B`. On return it
/// holds the partial remainder after subtracting `quotient * divisor`,
/// which is less than `divisor`.
///
/// The estimate divides the top two window limbs by the top divisor limb.
/// With a normalized divisor it is never too small and at most 2 too large,
/// so the add-back loop runs at most twice.
pub fn quotient_digit<L>(window: &mut L, divisor: &[Limb]) -> Limb
where
    L: LimbsMut + ?Sized,
{
    let n = divisor.len();
    assert_eq!(window.limb_count(), n + 1, "quotient_digit() window length");
    let top = divisor[n - 1];
    debug_assert!(top.leading_zeros() == 0, "quotient_digit() divisor is not normalized");
    debug_assert!(window.limb(n) <= top);

    let rview = window.rview();
    let mut quotient = if rview[0] == top {
        // The true quotient of the top limbs would not fit in a limb.
        Limb::MAX
    } else {
        limb::div_wide(rview[0], rview[1], top).0
    };

    let (_, mut borrow) = carry::isub_product(window, divisor, quotient, 0, 0);
    while borrow {
        quotient -= 1;
        let (_, overflow) = carry::iadd_limbs(window, divisor, 0);
        borrow = !overflow;
    }
    quotient
}

/// Algorithm D over a pre-normalized dividend.
///
/// `remainder` holds the normalized dividend, including the extra top limb
/// produced by normalization, and is reduced in place to the normalized
/// remainder (only its low `divisor.len()` limbs can be nonzero).
/// `quotient` receives `remainder.len() - divisor.len()` limbs.
pub fn div_rem_normalized<Q, R>(quotient: &mut Q, remainder: &mut R, divisor: &[Limb])
where
    Q: LimbsMut + ?Sized,
    R: LimbsMut + ?Sized,
{
    let quotient = quotient.as_limbs_mut();
    let remainder = remainder.as_limbs_mut();
    let n = divisor.len();
    assert!(n >= 2, "div_rem_normalized() needs a multi-limb divisor");
    assert!(remainder.len() > n, "div_rem_normalized() dividend is too short");
    assert_eq!(
        quotient.len(),
        remainder.len() - n,
        "div_rem_normalized() quotient length"
    );

    for j in (0..quotient.len()).rev() {
        quotient[j] = quotient_digit(&mut remainder[j..j + n + 1], divisor);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    const M: Limb = Limb::MAX;
    const TOP: Limb = 1 << (crate::limb::LIMB_BITS - 1);

    #[test]
    fn idiv_digit_test() {
        let mut x = [7 as Limb];
        assert_eq!(idiv_digit(&mut x, 2), Overflow::new(1, false));
        assert_eq!(x, [3]);

        let mut x = [0 as Limb, 1];
        assert_eq!(idiv_digit(&mut x, 2), Overflow::new(0, false));
        assert_eq!(x, [TOP, 0]);

        let mut x = [M, M, M];
        assert_eq!(idiv_digit(&mut x, M), Overflow::new(0, false));
        assert_eq!(x, [1, 1, 1]);
    }

    #[test]
    fn idiv_digit_by_zero_test() {
        let mut x = [5 as Limb, 6];
        assert_eq!(idiv_digit(&mut x, 0), Overflow::new(5, true));
        assert_eq!(x, [5, 6]);
        assert_eq!(rem_digit(&x, 0), Overflow::new(5, true));
    }

    #[test]
    fn rem_digit_test() {
        assert_eq!(rem_digit(&[7], 2), Overflow::new(1, false));
        assert_eq!(rem_digit(&[1, 1], 3), Overflow::new(((M % 3) + 2) % 3, false));
        assert_eq!(rem_digit(&[], 3), Overflow::new(0, false));
    }

    #[test]
    fn quotient_digit_test() {
        // (TOP * B + 0) / [0, TOP] == 1 exactly.
        let divisor = [0, TOP];
        let mut window = [0, TOP, 0];
        assert_eq!(quotient_digit(&mut window, &divisor), 1);
        assert_eq!(window, [0, 0, 0]);

        // Top limbs equal: the estimate saturates to the maximal limb.
        // (TOP * B^2 + (B - 2) * B) - (B - 1) * (TOP * B + M) == TOP * B - 1
        let divisor = [M, TOP];
        let mut window = [0, M - 1, TOP];
        assert_eq!(quotient_digit(&mut window, &divisor), M);
        assert_eq!(window, [M, TOP - 1, 0]);

        // The estimate B - 2 is two too high and gets added back twice.
        // (TOP - 1) * B^2 - (B - 4) * (TOP * B + M) == 5 * B - 4
        let mut window = [0, 0, TOP - 1];
        assert_eq!(quotient_digit(&mut window, &divisor), M - 3);
        assert_eq!(window, [M - 3, 4, 0]);
    }

    #[test]
    fn div_rem_normalized_test() {
        // (B^3) / (TOP * B + 1): normalized dividend has an extra top limb.
        let divisor = [1, TOP];
        let mut remainder = [0 as Limb, 0, 0, 1, 0];
        let mut quotient = [0 as Limb; 3];
        div_rem_normalized(&mut quotient, &mut remainder, &divisor);
        // quotient * divisor + remainder == dividend
        let mut check = [0 as Limb; 5];
        crate::mul::mul_into(&mut check[..5], &quotient, &divisor);
        crate::carry::iadd_limbs(&mut check, &remainder[..2], 0);
        assert_eq!(check, [0, 0, 0, 1, 0]);
        assert!(crate::compare::less(&remainder[..2], &divisor));
        assert!(crate::compare::is_zero(&remainder[2..]));
    }
}
