use limbkit::carry::*;
use limbkit::Limb;

const M: Limb = Limb::MAX;

#[test]
fn increment_all_max() {
    let mut x = [M; 4];
    assert_eq!(iadd_bit(&mut x, true, 0), (4, true));
    assert_eq!(x, [0; 4]);

    let mut x = [M; 4];
    assert_eq!(iadd_limbs(&mut x, &[1], 0), (4, true));
    assert_eq!(x, [0; 4]);
}

#[test]
fn decrement_zero() {
    let mut x = [0 as Limb; 3];
    assert_eq!(isub_digit(&mut x, 1, 0), (3, true));
    assert_eq!(x, [M; 3]);
}

#[test]
fn carry_stops_early() {
    let mut x = [M, 4, 9];
    assert_eq!(iadd_digit(&mut x, 1, 0), (2, false));
    assert_eq!(x, [0, 5, 9]);

    let mut x = [0 as Limb, 4, 9];
    assert_eq!(isub_digit(&mut x, 1, 0), (2, false));
    assert_eq!(x, [M, 3, 9]);
}

#[test]
fn intersection_leaves_carry() {
    let mut x = [M, 0];
    assert_eq!(iadd_digit_in_intersection(&mut x, 1, 0), (1, true));
    assert_eq!(x, [0, 0]);

    let mut x = [0 as Limb, 0, 7];
    assert_eq!(isub_limbs_plus_bit_in_intersection(&mut x, &[1], true, 1), (2, true));
    assert_eq!(x, [0, M - 1, 7]);
}

#[test]
fn limbs_below_index_untouched() {
    let mut x = [M, M, 0, 0];
    iadd_limbs(&mut x, &[M, M], 2);
    assert_eq!(x, [M, M, M, M]);
    isub_limbs(&mut x, &[M], 3);
    assert_eq!(x, [M, M, M, 0]);
}

#[test]
fn digit_plus_bit_folds_bit_first() {
    let mut x = [3 as Limb, 0];
    assert_eq!(iadd_digit_plus_bit(&mut x, M, true, 0), (2, false));
    assert_eq!(x, [3, 1]);

    let mut x = [3 as Limb, 1];
    assert_eq!(isub_digit_plus_bit(&mut x, M, true, 0), (2, false));
    assert_eq!(x, [3, 0]);
}

#[test]
fn product_round_trip() {
    let original = [0x1234 as Limb, M, 77, 0, 0];
    let y = [M, 5];
    let mut x = original;
    assert_eq!(iadd_product(&mut x, &y, M - 2, 9, 1), (4, false));
    assert_ne!(x, original);
    assert_eq!(isub_product(&mut x, &y, M - 2, 9, 1), (4, false));
    assert_eq!(x, original);
}

#[test]
fn product_overflow_reported() {
    let mut x = [M, M];
    let (index, overflow) = iadd_product(&mut x, &[2], 2, 0, 0);
    assert!(overflow);
    assert_eq!(index, 2);
    assert_eq!(x, [3, 0]);
}

#[test]
#[should_panic]
fn index_past_end_panics() {
    let mut x = [0 as Limb, 0];
    iadd_digit(&mut x, 1, 2);
}

#[test]
#[should_panic]
fn operand_past_end_panics() {
    let mut x = [0 as Limb, 0];
    iadd_limbs(&mut x, &[1, 2], 1);
}
