use limbkit::{Limb, Magnitude, LIMB_BITS};

#[test]
fn test() {
    // The first quotient estimate is two too large and needs both
    // add-back corrections.
    let top: Limb = 1 << (LIMB_BITS - 1);
    let a = Magnitude::from_limbs(&[0, 0, top - 1]);
    let b = Magnitude::from_limbs(&[Limb::MAX, top]);
    let (quotient, remainder) = a.checked_div_rem(&b).unwrap();
    assert_eq!(quotient.limbs(), [Limb::MAX - 3]);
    assert!(remainder < b);
    assert_eq!(&quotient * &b + &remainder, a);
}
