use limbkit::shift::*;
use limbkit::{Limb, LIMB_BITS};

const M: Limb = Limb::MAX;

#[test]
fn shl_then_shr_restores() {
    let original = [0xDEAD_BEEF as Limb, 0x0123_4567, 0, 0];
    let bits = LIMB_BITS as usize;
    for distance in 0..2 * bits {
        let mut x = original;
        ishl_bits(&mut x, distance, false);
        ishr_bits(&mut x, distance, false);
        assert_eq!(x, original, "distance {}", distance);
    }
}

#[test]
fn major_only() {
    let mut x = [1 as Limb, 2, 3, 4];
    ishl(&mut x, 2, 0, false);
    assert_eq!(x, [0, 0, 1, 2]);
    ishr(&mut x, 1, 0, true);
    assert_eq!(x, [0, 1, 2, M]);
}

#[test]
fn major_past_end_fills_environment() {
    let mut x = [1 as Limb, 2];
    ishl(&mut x, 2, 5, true);
    assert_eq!(x, [M, M]);

    let mut x = [1 as Limb, 2];
    ishr(&mut x, 7, 1, false);
    assert_eq!(x, [0, 0]);
}

#[test]
fn sign_extending_shr() {
    // -2 in two's complement, arithmetic shift right by one is -1.
    let mut x = [M - 1, M];
    ishr_bits(&mut x, 1, true);
    assert_eq!(x, [M, M]);
}

#[test]
fn zero_distance() {
    let mut x = [3 as Limb, 4];
    ishl_bits(&mut x, 0, true);
    ishr_bits(&mut x, 0, true);
    assert_eq!(x, [3, 4]);
}
