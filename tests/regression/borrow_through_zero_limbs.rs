use limbkit::{Limb, Magnitude};

#[test]
fn test() {
    let x = Magnitude::from_limbs(&[0 as Limb, 0, 1]);
    let y = x - 1 as Limb;
    assert_eq!(y.limbs(), [Limb::MAX, Limb::MAX]);
}
