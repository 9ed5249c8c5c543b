use limbkit::div::*;
use limbkit::{Limb, Overflow, LIMB_BITS};

const M: Limb = Limb::MAX;

#[test]
fn single_limb_divisor() {
    let mut x = [7 as Limb];
    assert_eq!(idiv_digit(&mut x, 2), Overflow::new(1, false));
    assert_eq!(x, [3]);
}

#[test]
fn single_limb_divisor_by_zero() {
    let mut x = [9 as Limb, 8];
    let result = idiv_digit(&mut x, 0);
    assert!(result.overflow);
    assert_eq!(result.partial_value, 9);
    assert_eq!(x, [9, 8]);
}

#[test]
fn encode_by_repeated_division() {
    // Text encoding peels off decimal digits by repeated division.
    let mut x = [M, M];
    let mut digits = Vec::new();
    while x.iter().any(|&limb| limb != 0) {
        digits.push(idiv_digit(&mut x, 10).partial_value);
    }
    let expected: &[Limb] = if LIMB_BITS == 64 {
        // 2^128 - 1 = 340282366920938463463374607431768211455
        &[5, 5, 4, 1, 1, 2, 8, 6, 7, 1, 3, 4, 7, 0, 6, 4, 7, 3, 3, 6, 4, 3, 6, 4, 8, 3, 9, 0, 2, 9, 6, 6, 3, 2, 8, 2, 0, 4, 3]
    } else {
        // 2^64 - 1 = 18446744073709551615
        &[5, 1, 6, 1, 5, 5, 9, 0, 7, 3, 7, 0, 4, 4, 7, 6, 4, 4, 8, 1]
    };
    assert_eq!(digits, expected);
}

#[test]
fn algorithm_d_identity() {
    let top: Limb = 1 << (LIMB_BITS - 1);
    let divisor = [M, 12345, top | 7];
    let mut remainder = [3 as Limb, M, 0, 99, top, 0];
    let dividend = remainder;
    let mut quotient = [0 as Limb; 3];
    div_rem_normalized(&mut quotient, &mut remainder, &divisor);

    assert!(limbkit::compare::less(&remainder[..3], &divisor));
    let mut check = [0 as Limb; 6];
    limbkit::mul::mul_into(&mut check, &quotient, &divisor);
    limbkit::carry::iadd_limbs(&mut check, &remainder[..3], 0);
    assert_eq!(check, dividend);
}
