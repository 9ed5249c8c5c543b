#![no_std]

pub use limbkit::*;

/// Exercises the kernels and the container without the standard library.
pub fn quotient_of(a: &[Limb], b: &[Limb]) -> Option<Magnitude> {
    let a = Magnitude::from_limbs(a);
    let b = Magnitude::from_limbs(b);
    a.checked_div_rem(&b).ok().map(|(quotient, _)| quotient)
}
