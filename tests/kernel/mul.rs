use limbkit::mul::*;
use limbkit::Limb;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const M: Limb = Limb::MAX;

fn random_limbs(rng: &mut ChaCha8Rng, len: usize) -> Vec<Limb> {
    (0..len).map(|_| rng.gen()).collect()
}

fn long(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z = vec![M; x.len() + y.len()];
    long_mul_into(&mut z, x, y);
    z
}

fn karatsuba(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut z = vec![M; x.len() + y.len()];
    karatsuba_mul_into(&mut z, x, y);
    z
}

#[test]
fn small_products() {
    assert_eq!(long(&[2], &[3]), [6, 0]);
    let mut z = [0 as Limb; 2];
    mul_into(&mut z, &[2], &[3]);
    assert_eq!(z, [6, 0]);
}

#[test]
fn karatsuba_matches_long_50_limbs() {
    let mut rng = ChaCha8Rng::seed_from_u64(50);
    let x = random_limbs(&mut rng, 50);
    let y = random_limbs(&mut rng, 50);
    assert_eq!(karatsuba(&x, &y), long(&x, &y));

    let mut z = vec![0 as Limb; 100];
    mul_into(&mut z, &x, &y);
    assert_eq!(z, long(&x, &y));
}

#[test]
fn karatsuba_matches_long_around_cutoff() {
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    for xlen in KARATSUBA_CUTOFF - 2..KARATSUBA_CUTOFF + 3 {
        for ylen in [1, KARATSUBA_CUTOFF - 1, KARATSUBA_CUTOFF, 2 * KARATSUBA_CUTOFF + 1] {
            let x = random_limbs(&mut rng, xlen);
            let y = random_limbs(&mut rng, ylen);
            assert_eq!(karatsuba(&x, &y), long(&x, &y), "{} x {} limbs", xlen, ylen);
        }
    }
}

#[test]
fn squaring_matches_product() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for len in [1, 5, KARATSUBA_CUTOFF, 3 * KARATSUBA_CUTOFF + 7] {
        let x = random_limbs(&mut rng, len);
        let mut z = vec![M; 2 * len];
        square_into(&mut z, &x);
        assert_eq!(z, long(&x, &x), "{} limbs", len);
    }
}

#[test]
fn destination_contents_ignored() {
    let x = [M; 3];
    let mut dirty = [0x5A as Limb; 6];
    long_mul_into(&mut dirty, &x, &x);
    let mut clean = [0 as Limb; 6];
    long_mul_into(&mut clean, &x, &x);
    assert_eq!(dirty, clean);
}

#[test]
fn digit_multiply_add() {
    // Decoding "255" digit by digit in base 10.
    let mut x = [0 as Limb, 0];
    for digit in [2, 5, 5] {
        let overflow = imul_digit_add(&mut x, 10, digit);
        assert_eq!(overflow, 0);
    }
    assert_eq!(x, [255, 0]);
}

#[test]
#[should_panic(expected = "destination length")]
fn wrong_destination_length() {
    let mut z = [0 as Limb; 3];
    mul_into(&mut z, &[1], &[1]);
}
