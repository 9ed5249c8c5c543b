use limbkit::complement::*;
use limbkit::Limb;

const M: Limb = Limb::MAX;

#[test]
fn twice_is_identity() {
    let original = [0x55 as Limb, 0, M, 3];
    let mut x = original;
    form_twos_complement(&mut x);
    assert_ne!(x, original);
    form_twos_complement(&mut x);
    assert_eq!(x, original);
}

#[test]
fn zero_is_fixed() {
    let mut x = [0 as Limb; 5];
    assert!(form_twos_complement(&mut x));
    assert_eq!(x, [0; 5]);
}

#[test]
fn complement_is_negation() {
    // x + twos_complement(x) == 0 modulo B^n
    let original = [9 as Limb, 0, 1];
    let mut negated = original;
    form_twos_complement(&mut negated);
    let (_, carry) = limbkit::carry::iadd_limbs(&mut negated, &original, 0);
    assert!(carry);
    assert_eq!(negated, [0, 0, 0]);
}

#[test]
fn split_complement() {
    // Complementing [0, 0 | 5, 1] in two pieces matches doing it at once.
    let mut whole = [0 as Limb, 0, 5, 1];
    form_twos_complement(&mut whole);

    let mut low = [0 as Limb, 0];
    let mut high = [5 as Limb, 1];
    let carry = form_twos_complement(&mut low);
    form_twos_complement_subsequence(&mut high, carry);
    assert_eq!([low[0], low[1], high[0], high[1]], whole);
}
