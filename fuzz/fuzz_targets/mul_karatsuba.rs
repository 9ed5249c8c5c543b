#![no_main]

use libfuzzer_sys::fuzz_target;
use limbkit::mul::{karatsuba_mul_into, long_mul_into};
use limbkit::Limb;

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
    let (x, y) = rest.split_at((split as usize).min(rest.len()));
    let (x, y) = (limbs(x), limbs(y));

    let mut long = vec![0 as Limb; x.len() + y.len()];
    long_mul_into(&mut long, &x, &y);
    let mut karatsuba = vec![0 as Limb; x.len() + y.len()];
    karatsuba_mul_into(&mut karatsuba, &x, &y);
    assert_eq!(karatsuba, long);
});
