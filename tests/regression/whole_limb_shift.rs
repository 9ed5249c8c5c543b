use limbkit::{Limb, Magnitude, LIMB_BITS};

#[test]
fn test() {
    // A distance that is an exact multiple of the limb width takes the
    // limb-moving path.
    let x = Magnitude::from_limbs(&[1 as Limb, 2]);
    let shifted = &x << (2 * LIMB_BITS as usize);
    assert_eq!(shifted.limbs(), [0, 0, 1, 2]);
    assert_eq!(&shifted >> (2 * LIMB_BITS as usize), x);
    assert_eq!((&x >> LIMB_BITS as usize).limbs(), [2]);
}
