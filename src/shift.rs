//! Bit-shift kernels over fixed-length limb sequences.
//!
//! A shift distance is split into a whole-limb count (`major`) and a
//! sub-limb bit count (`minor`, less than `LIMB_BITS`). Vacated bits take
//! the caller's environment bit: `false` for unsigned values, the sign bit
//! for arithmetic shifts of two's complement values. Bits pushed past the
//! buffer edge are discarded.

use crate::limb::{Limb, LIMB_BITS};
use crate::slice::LimbsMut;

/// Limb made of the environment bit.
#[inline]
fn fill(environment: bool) -> Limb {
    if environment {
        Limb::MAX
    } else {
        0
    }
}

/// Split a bit distance into (major, minor).
#[inline]
pub fn split_distance(distance: usize) -> (usize, u32) {
    let bits = LIMB_BITS as usize;
    (distance / bits, (distance % bits) as u32)
}

// SHL

/// Shift-left `major` whole limbs.
pub fn ishl_limbs<L>(x: &mut L, major: usize, environment: bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let len = x.len();
    if major >= len {
        x.fill(fill(environment));
    } else if major != 0 {
        x.copy_within(..len - major, major);
        x[..major].fill(fill(environment));
    }
}

/// Shift-left by `major` limbs and `minor` bits.
///
/// Walks from the most significant limb down, so every source limb is read
/// before it is overwritten.
pub fn ishl<L>(x: &mut L, major: usize, minor: u32, environment: bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    debug_assert!(minor < LIMB_BITS, "ishl() minor distance is not sub-limb");
    if minor == 0 {
        return ishl_limbs(x, major, environment);
    }
    if major >= x.len() {
        return x.fill(fill(environment));
    }

    let env = fill(environment);
    let push = minor;
    let pull = LIMB_BITS - minor;
    for i in (0..x.len()).rev() {
        let high = if i >= major { x[i - major] } else { env };
        let low = if i > major { x[i - major - 1] } else { env };
        x[i] = high << push | low >> pull;
    }
}

/// Shift-left buffer by `distance` bits.
#[inline]
pub fn ishl_bits<L>(x: &mut L, distance: usize, environment: bool)
where
    L: LimbsMut + ?Sized,
{
    let (major, minor) = split_distance(distance);
    ishl(x, major, minor, environment);
}

// SHR

/// Shift-right `major` whole limbs.
pub fn ishr_limbs<L>(x: &mut L, major: usize, environment: bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    let len = x.len();
    if major >= len {
        x.fill(fill(environment));
    } else if major != 0 {
        x.copy_within(major.., 0);
        x[len - major..].fill(fill(environment));
    }
}

/// Shift-right by `major` limbs and `minor` bits.
///
/// Walks from the least significant limb up, so every source limb is read
/// before it is overwritten.
pub fn ishr<L>(x: &mut L, major: usize, minor: u32, environment: bool)
where
    L: LimbsMut + ?Sized,
{
    let x = x.as_limbs_mut();
    debug_assert!(minor < LIMB_BITS, "ishr() minor distance is not sub-limb");
    if minor == 0 {
        return ishr_limbs(x, major, environment);
    }
    if major >= x.len() {
        return x.fill(fill(environment));
    }

    let env = fill(environment);
    let len = x.len();
    let push = minor;
    let pull = LIMB_BITS - minor;
    for i in 0..len {
        let low = if i + major < len { x[i + major] } else { env };
        let high = if i + major + 1 < len { x[i + major + 1] } else { env };
        x[i] = low >> push | high << pull;
    }
}

/// Shift-right buffer by `distance` bits.
#[inline]
pub fn ishr_bits<L>(x: &mut L, distance: usize, environment: bool)
where
    L: LimbsMut + ?Sized,
{
    let (major, minor) = split_distance(distance);
    ishr(x, major, minor, environment);
}

// TESTS
// -----
