//! Traits to accept generic limb buffers.
//!
//! Kernel destinations are generic over [`LimbsMut`], so callers can hand in
//! a fixed external buffer (a slice or array whose length was computed up
//! front) or an owned, resizable one interchangeably. Operands stay plain
//! slices.

use crate::lib::{ops, Vec};
use crate::limb::Limb;

// REVERSE VIEW

/// Reverse, immutable view of a sequence, so index 0 is the most
/// significant limb.
pub struct ReverseView<'a, T: 'a> {
    inner: &'a [T],
}

impl<'a, T> ops::Index<usize> for ReverseView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[self.inner.len() - index - 1]
    }
}

// LIMBS

/// Read access to a little-endian limb sequence.
pub trait Limbs {
    /// Get slice of immutable limbs.
    fn as_limbs(&self) -> &[Limb];

    /// Get the number of limbs in the collection.
    #[inline]
    fn limb_count(&self) -> usize {
        self.as_limbs().len()
    }

    /// Get the limb at `index`.
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    fn limb(&self, index: usize) -> Limb {
        self.as_limbs()[index]
    }

    /// Create a reverse view of the limbs for indexing.
    #[inline]
    fn rview(&self) -> ReverseView<Limb> {
        ReverseView {
            inner: self.as_limbs(),
        }
    }
}

/// Write access to a little-endian limb sequence of fixed length.
pub trait LimbsMut: Limbs {
    /// Get slice of mutable limbs.
    fn as_limbs_mut(&mut self) -> &mut [Limb];

    /// Set the limb at `index`.
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    fn set_limb(&mut self, index: usize, limb: Limb) {
        self.as_limbs_mut()[index] = limb;
    }
}

impl Limbs for [Limb] {
    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        self
    }
}

impl LimbsMut for [Limb] {
    #[inline]
    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self
    }
}

impl<const N: usize> Limbs for [Limb; N] {
    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        self
    }
}

impl<const N: usize> LimbsMut for [Limb; N] {
    #[inline]
    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self
    }
}

impl Limbs for Vec<Limb> {
    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        self
    }
}

impl LimbsMut for Vec<Limb> {
    #[inline]
    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self
    }
}

impl<'a, L: Limbs + ?Sized> Limbs for &'a L {
    #[inline]
    fn as_limbs(&self) -> &[Limb] {
        (**self).as_limbs()
    }
}
