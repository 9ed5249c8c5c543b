//! The owned, resizable magnitude.
//!
//! [`Magnitude`] owns a growable buffer of little-endian limbs. It always
//! holds at least one limb (zero is a single zero limb) and every public
//! method returns it normalized, with no redundant leading zero limbs. The
//! raw container operations (`push`, `grow_to`, `shrink_to`, the
//! intersection bit operations and the [`LimbsMut`] view) are the exception:
//! they let collaborators shape the buffer before a kernel call, and leave
//! normalization to the caller.
//!
//! Equality, ordering and hashing only look at the significant limbs, so an
//! unnormalized buffer still compares equal to its normalized form.

mod de;
mod ops;
mod partial_eq;
mod ser;

use crate::carry;
use crate::compare::{self, significant_len};
use crate::complement;
use crate::div;
use crate::error::{ErrorCode, Result};
use crate::lib::cmp::{self, Ordering};
use crate::lib::fmt::{self, Write as _};
use crate::lib::hash::{Hash, Hasher};
use crate::lib::{vec, String, Vec};
use crate::limb::{Limb, LIMB_BITS};
use crate::mul;
use crate::overflow::Overflow;
use crate::shift;
use crate::slice::{Limbs, LimbsMut};

/// Limbs per 64-bit word of the serialized form.
const WORD_LIMBS: usize = 64 / LIMB_BITS as usize;

/// An arbitrary-precision unsigned integer.
#[derive(Clone)]
pub struct Magnitude {
    limbs: Vec<Limb>,
}

// CONSTRUCTORS

impl Magnitude {
    /// The value zero, a single zero limb.
    #[inline]
    pub fn zero() -> Self {
        Magnitude { limbs: vec![0] }
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        Magnitude::from_limb(1)
    }

    /// A magnitude holding a single limb.
    #[inline]
    pub fn from_limb(limb: Limb) -> Self {
        Magnitude { limbs: vec![limb] }
    }

    /// Copy any limb collection into a normalized magnitude.
    pub fn from_limbs<L>(limbs: &L) -> Self
    where
        L: Limbs + ?Sized,
    {
        let limbs = limbs.as_limbs();
        Magnitude::from_vec(limbs[..significant_len(limbs)].to_vec())
    }

    /// Take ownership of a limb vector, normalizing it.
    pub fn from_vec(limbs: Vec<Limb>) -> Self {
        let mut magnitude = Magnitude { limbs };
        magnitude.normalize();
        magnitude
    }

    /// Allocate `count` limbs, let `populate` write the result into them,
    /// then normalize.
    ///
    /// Despite the name, the buffer handed to `populate` is zero-filled, so
    /// limbs it leaves alone read as zero. Every kernel writing a fresh
    /// result (products, quotients) builds it through here.
    pub fn uninitialized<F>(count: usize, populate: F) -> Self
    where
        F: FnOnce(&mut [Limb]),
    {
        let mut limbs: Vec<Limb> = vec![0; count];
        populate(&mut limbs);
        Magnitude::from_vec(limbs)
    }

    fn from_u128(mut value: u128) -> Self {
        let mut limbs = Vec::with_capacity(128 / LIMB_BITS as usize);
        loop {
            limbs.push(value as Limb);
            value >>= LIMB_BITS;
            if value == 0 {
                break;
            }
        }
        Magnitude { limbs }
    }
}

impl Default for Magnitude {
    #[inline]
    fn default() -> Self {
        Magnitude::zero()
    }
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Magnitude {
                #[inline]
                fn from(value: $ty) -> Self {
                    Magnitude::from_u128(value as u128)
                }
            }
        )*
    };
}

from_unsigned! {
    u8 u16 u32 u64 u128 usize
}

impl FromIterator<Limb> for Magnitude {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Limb>,
    {
        Magnitude::from_vec(iter.into_iter().collect())
    }
}

// CONTAINER

impl Magnitude {
    /// Get the limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Unwrap into the limb vector.
    #[inline]
    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    /// Number of limbs in the buffer. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        compare::is_zero(&self.limbs)
    }

    /// Check if there are no redundant leading zero limbs.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.limbs.len() == 1 || self.limbs.last() != Some(&0)
    }

    /// Append a limb as the new most significant limb.
    #[inline]
    pub fn push(&mut self, limb: Limb) {
        self.limbs.push(limb);
    }

    /// Zero-pad to at least `len` limbs.
    #[inline]
    pub fn grow_to(&mut self, len: usize) {
        if self.limbs.len() < len {
            self.limbs.resize(len, 0);
        }
    }

    /// Truncate to at most `len` limbs, keeping at least one.
    ///
    /// Dropped limbs are discarded, so this reduces the value modulo
    /// `B^len`.
    #[inline]
    pub fn shrink_to(&mut self, len: usize) {
        self.limbs.truncate(len);
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }

    /// Drop redundant leading zero limbs, keeping at least one.
    #[inline]
    pub fn normalize(&mut self) {
        let len = significant_len(&self.limbs);
        self.shrink_to(len);
    }

    /// AND `other` into the limbs both operands share. Limbs of `self` past
    /// the end of `other` are left alone.
    pub fn bitand_in_intersection<L>(&mut self, other: &L)
    where
        L: Limbs + ?Sized,
    {
        for (xi, &yi) in self.limbs.iter_mut().zip(other.as_limbs()) {
            *xi &= yi;
        }
    }

    /// OR `other` into the limbs both operands share.
    pub fn bitor_in_intersection<L>(&mut self, other: &L)
    where
        L: Limbs + ?Sized,
    {
        for (xi, &yi) in self.limbs.iter_mut().zip(other.as_limbs()) {
            *xi |= yi;
        }
    }

    /// XOR `other` into the limbs both operands share.
    pub fn bitxor_in_intersection<L>(&mut self, other: &L)
    where
        L: Limbs + ?Sized,
    {
        for (xi, &yi) in self.limbs.iter_mut().zip(other.as_limbs()) {
            *xi ^= yi;
        }
    }
}

impl Limbs for Magnitude {
    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }
}

impl LimbsMut for Magnitude {
    #[inline]
    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }
}

// BITS

impl Magnitude {
    /// Number of bits needed to represent the value; zero for zero.
    pub fn bit_width(&self) -> usize {
        let len = significant_len(&self.limbs);
        if len == 0 {
            return 0;
        }
        let top = self.limbs[len - 1];
        len * LIMB_BITS as usize - top.leading_zeros() as usize
    }

    /// Leading zero bits of the most significant limb.
    ///
    /// This is the left shift that normalizes the value as a divisor, and is
    /// `LIMB_BITS` for zero.
    pub fn leading_zeros(&self) -> u32 {
        let len = significant_len(&self.limbs);
        match len {
            0 => LIMB_BITS,
            _ => self.limbs[len - 1].leading_zeros(),
        }
    }

    /// Number of trailing zero bits, or `None` for zero.
    pub fn trailing_zeros(&self) -> Option<usize> {
        let index = self.limbs.iter().position(|&limb| limb != 0)?;
        Some(index * LIMB_BITS as usize + self.limbs[index].trailing_zeros() as usize)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    /// Check if exactly one bit is set.
    pub fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    /// Check if bit `index` is set. Bits past the buffer are zero.
    pub fn bit(&self, index: usize) -> bool {
        let (major, minor) = shift::split_distance(index);
        major < self.limb_count() && self.limb(major) >> minor & 1 == 1
    }
}

// ARITHMETIC

impl Magnitude {
    /// Add `digit * B^index`.
    pub fn add_digit_at(&mut self, digit: Limb, index: usize) {
        if digit == 0 {
            return;
        }
        self.grow_to(index + 1);
        let (_, overflow) = carry::iadd_digit(&mut self.limbs, digit, index);
        if overflow {
            self.limbs.push(1);
        }
        self.normalize();
    }

    /// Subtract `digit * B^index`, returning if the subtraction borrowed.
    ///
    /// On a borrow `self` holds the wrapped difference modulo `B^n`, where
    /// `n` is the longer of the two lengths.
    pub fn sub_digit_at(&mut self, digit: Limb, index: usize) -> bool {
        if digit == 0 {
            return false;
        }
        self.grow_to(index + 1);
        let (_, borrow) = carry::isub_digit(&mut self.limbs, digit, index);
        self.normalize();
        borrow
    }

    /// Add `y * B^index`.
    pub fn add_at<L>(&mut self, y: &L, index: usize)
    where
        L: Limbs + ?Sized,
    {
        let y = y.as_limbs();
        let y = &y[..significant_len(y)];
        if y.is_empty() {
            return;
        }
        self.grow_to(index + y.len());
        let (_, overflow) = carry::iadd_limbs(&mut self.limbs, y, index);
        if overflow {
            self.limbs.push(1);
        }
        self.normalize();
    }

    /// Subtract `y * B^index`, returning if the subtraction borrowed.
    ///
    /// On a borrow `self` holds the wrapped difference, as for
    /// `sub_digit_at`.
    pub fn sub_at<L>(&mut self, y: &L, index: usize) -> bool
    where
        L: Limbs + ?Sized,
    {
        let y = y.as_limbs();
        let y = &y[..significant_len(y)];
        if y.is_empty() {
            return false;
        }
        self.grow_to(index + y.len());
        let (_, borrow) = carry::isub_limbs(&mut self.limbs, y, index);
        self.normalize();
        borrow
    }

    /// Calculate `self - other`, reporting a borrow instead of panicking.
    pub fn overflowing_sub(&self, other: &Magnitude) -> Overflow<Magnitude> {
        let mut difference = self.clone();
        let borrow = difference.sub_at(other, 0);
        Overflow::new(difference, borrow)
    }

    /// Calculate `self - other`, or fail with `ErrorCode::Underflow`.
    pub fn checked_sub(&self, other: &Magnitude) -> Result<Magnitude> {
        self.overflowing_sub(other).into_result(ErrorCode::Underflow)
    }

    /// MulAssign a single limb.
    pub fn mul_digit(&mut self, digit: Limb) {
        let overflow = mul::imul_digit_add(&mut self.limbs, digit, 0);
        if overflow != 0 {
            self.limbs.push(overflow);
        }
        self.normalize();
    }

    /// Calculate `self * other`.
    pub fn product(&self, other: &Magnitude) -> Magnitude {
        let (x, y) = (self.significant(), other.significant());
        Magnitude::uninitialized(x.len() + y.len(), |z| mul::mul_into(z, x, y))
    }

    /// Calculate `self * self`.
    pub fn square(&self) -> Magnitude {
        let x = self.significant();
        Magnitude::uninitialized(2 * x.len(), |z| mul::square_into(z, x))
    }

    /// Divide by a single limb, returning the (quotient, remainder).
    ///
    /// Dividing by zero reports `(self, least significant limb)` as the
    /// partial value.
    pub fn div_rem_digit(&self, divisor: Limb) -> Overflow<(Magnitude, Limb)> {
        let mut quotient = self.clone();
        let remainder = div::idiv_digit(&mut quotient.limbs, divisor);
        quotient.normalize();
        remainder.map(|remainder| (quotient, remainder))
    }

    /// Divide by `divisor`, returning the (quotient, remainder).
    ///
    /// Dividing by zero reports `(self, self)` as the partial value.
    /// Multi-limb divisors go through Algorithm D after shifting both
    /// operands so the divisor's top bit is set.
    pub fn div_rem(&self, divisor: &Magnitude) -> Overflow<(Magnitude, Magnitude)> {
        let y = divisor.significant();
        match y.len() {
            0 => Overflow::new((self.clone(), self.clone()), true),
            1 => self
                .div_rem_digit(y[0])
                .map(|(quotient, remainder)| (quotient, Magnitude::from_limb(remainder))),
            _ if compare::less(&self.limbs, y) => {
                Overflow::new((Magnitude::zero(), Magnitude::from_limbs(self)), false)
            }
            n => {
                let x = self.significant();
                let shift = y[n - 1].leading_zeros();

                let mut normalized = y.to_vec();
                shift::ishl(&mut normalized, 0, shift, false);
                let mut remainder: Vec<Limb> = vec![0; x.len() + 1];
                remainder[..x.len()].copy_from_slice(x);
                shift::ishl(&mut remainder, 0, shift, false);

                let quotient = Magnitude::uninitialized(x.len() + 1 - n, |quotient| {
                    div::div_rem_normalized(quotient, &mut remainder, &normalized);
                });

                remainder.truncate(n);
                shift::ishr(&mut remainder, 0, shift, false);
                Overflow::new((quotient, Magnitude::from_vec(remainder)), false)
            }
        }
    }

    /// Divide by `divisor`, or fail with `ErrorCode::DivisionByZero`.
    pub fn checked_div_rem(&self, divisor: &Magnitude) -> Result<(Magnitude, Magnitude)> {
        self.div_rem(divisor).into_result(ErrorCode::DivisionByZero)
    }

    /// Compare `self` to `other * B^index`.
    pub fn compare_at<L>(&self, other: &L, index: usize) -> Ordering
    where
        L: Limbs + ?Sized,
    {
        compare::compare_at(&self.limbs, other.as_limbs(), index)
    }

    /// Two's complement of the value at a width of `len` limbs.
    ///
    /// The value is zero-extended or truncated to `len` limbs first. The
    /// magnitude itself is untouched.
    pub fn twos_complement(&self, len: usize) -> Vec<Limb> {
        self.overflowing_twos_complement(len).partial_value
    }

    /// Two's complement at a width of `len` limbs, flagging overflow when
    /// the value needs more than `len` limbs.
    ///
    /// On overflow the partial value is the complement of the truncated
    /// value, as returned by `twos_complement`.
    pub fn overflowing_twos_complement(&self, len: usize) -> Overflow<Vec<Limb>> {
        let mut limbs: Vec<Limb> = vec![0; len];
        let count = cmp::min(len, self.limbs.len());
        limbs[..count].copy_from_slice(&self.limbs[..count]);
        complement::form_twos_complement(&mut limbs);
        Overflow::new(limbs, significant_len(&self.limbs) > len)
    }

    /// Two's complement at a width of `len` limbs, or fail with
    /// `ErrorCode::Overflow` if the value does not fit.
    pub fn checked_twos_complement(&self, len: usize) -> Result<Vec<Limb>> {
        self.overflowing_twos_complement(len).into_result(ErrorCode::Overflow)
    }

    #[inline]
    fn significant(&self) -> &[Limb] {
        &self.limbs[..significant_len(&self.limbs)]
    }
}

// COMPARISON

impl PartialEq for Magnitude {
    #[inline]
    fn eq(&self, other: &Magnitude) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Magnitude {}

impl PartialOrd for Magnitude {
    #[inline]
    fn partial_cmp(&self, other: &Magnitude) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    #[inline]
    fn cmp(&self, other: &Magnitude) -> Ordering {
        compare::compare(&self.limbs, &other.limbs)
    }
}

impl Hash for Magnitude {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

// FORMATTING

impl Magnitude {
    fn write_hex(&self, f: &mut fmt::Formatter, upper: bool) -> fmt::Result {
        let limbs = self.significant();
        let mut buf = String::with_capacity(limbs.len() * LIMB_BITS as usize / 4);
        let width = LIMB_BITS as usize / 4;
        match limbs.split_last() {
            None => buf.push('0'),
            Some((top, rest)) => {
                if upper {
                    write!(buf, "{:X}", top)?;
                    for limb in rest.iter().rev() {
                        write!(buf, "{:01$X}", limb, width)?;
                    }
                } else {
                    write!(buf, "{:x}", top)?;
                    for limb in rest.iter().rev() {
                        write!(buf, "{:01$x}", limb, width)?;
                    }
                }
            }
        }
        f.pad_integral(true, "0x", &buf)
    }
}

impl fmt::LowerHex for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_hex(f, false)
    }
}

impl fmt::UpperHex for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_hex(f, true)
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Magnitude({:#x})", self)
    }
}
