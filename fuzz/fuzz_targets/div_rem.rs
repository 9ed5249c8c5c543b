#![no_main]

use libfuzzer_sys::fuzz_target;
use limbkit::{Limb, Magnitude};

fn limbs(bytes: &[u8]) -> Vec<Limb> {
    bytes
        .chunks(core::mem::size_of::<Limb>())
        .map(|chunk| chunk.iter().rev().fold(0, |limb, &byte| limb << 8 | byte as Limb))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (a, b) = rest.split_at((split as usize).min(rest.len()));
    let a = Magnitude::from_vec(limbs(a));
    let b = Magnitude::from_vec(limbs(b));

    match a.checked_div_rem(&b) {
        Ok((quotient, remainder)) => {
            assert!(remainder < b);
            assert_eq!(&quotient * &b + &remainder, a);
        }
        Err(_) => assert!(b.is_zero()),
    }
});
