use limbkit::mul::{karatsuba_mul_into, long_mul_into};
use limbkit::Limb;

#[test]
fn test() {
    // Low halves that trim down to nothing leave z0 empty.
    let mut x = vec![0 as Limb; 48];
    x[30] = 5;
    x[47] = Limb::MAX;
    let mut y = vec![0 as Limb; 48];
    y[40] = 3;

    let mut long = vec![0 as Limb; 96];
    long_mul_into(&mut long, &x, &y);
    let mut karatsuba = vec![0 as Limb; 96];
    karatsuba_mul_into(&mut karatsuba, &x, &y);
    assert_eq!(karatsuba, long);
}
