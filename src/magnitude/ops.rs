//! Operator overloads for `Magnitude`.
//!
//! Each operator is implemented once as `OpAssign<&Magnitude>`; the owned
//! and borrowed combinations forward to it. `-` panics on underflow, `/` and
//! `%` on a zero divisor, matching the primitive integer types. The
//! reporting and `checked_*` methods surface the same conditions without
//! panicking.

use super::Magnitude;
use crate::div;
use crate::lib::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use crate::lib::cmp;
use crate::limb::Limb;
use crate::shift;

#[cold]
#[track_caller]
fn underflow() -> ! {
    panic!("attempt to subtract with overflow")
}

#[cold]
#[track_caller]
fn division_by_zero() -> ! {
    panic!("attempt to divide by zero")
}

impl<'a> AddAssign<&'a Magnitude> for Magnitude {
    fn add_assign(&mut self, rhs: &Magnitude) {
        self.add_at(rhs, 0);
    }
}

impl<'a> SubAssign<&'a Magnitude> for Magnitude {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Magnitude) {
        if self.sub_at(rhs, 0) {
            underflow();
        }
    }
}

impl<'a> MulAssign<&'a Magnitude> for Magnitude {
    fn mul_assign(&mut self, rhs: &Magnitude) {
        *self = self.product(rhs);
    }
}

impl<'a> DivAssign<&'a Magnitude> for Magnitude {
    #[track_caller]
    fn div_assign(&mut self, rhs: &Magnitude) {
        match self.div_rem(rhs).checked() {
            Some((quotient, _)) => *self = quotient,
            None => division_by_zero(),
        }
    }
}

impl<'a> RemAssign<&'a Magnitude> for Magnitude {
    #[track_caller]
    fn rem_assign(&mut self, rhs: &Magnitude) {
        match self.div_rem(rhs).checked() {
            Some((_, remainder)) => *self = remainder,
            None => division_by_zero(),
        }
    }
}

// Bitwise operators treat both operands as zero-extended, so the
// intersection kernels only need the shorter operand pre-extended.

impl<'a> BitAndAssign<&'a Magnitude> for Magnitude {
    fn bitand_assign(&mut self, rhs: &Magnitude) {
        let len = cmp::min(self.len(), rhs.len());
        self.shrink_to(len);
        self.bitand_in_intersection(rhs);
        self.normalize();
    }
}

impl<'a> BitOrAssign<&'a Magnitude> for Magnitude {
    fn bitor_assign(&mut self, rhs: &Magnitude) {
        self.grow_to(rhs.len());
        self.bitor_in_intersection(rhs);
        self.normalize();
    }
}

impl<'a> BitXorAssign<&'a Magnitude> for Magnitude {
    fn bitxor_assign(&mut self, rhs: &Magnitude) {
        self.grow_to(rhs.len());
        self.bitxor_in_intersection(rhs);
        self.normalize();
    }
}

macro_rules! forward_binop {
    ($($Op:ident $op:ident $OpAssign:ident $op_assign:ident)*) => {
        $(
            impl $OpAssign<Magnitude> for Magnitude {
                #[inline]
                #[track_caller]
                fn $op_assign(&mut self, rhs: Magnitude) {
                    self.$op_assign(&rhs);
                }
            }

            impl<'a> $Op<&'a Magnitude> for Magnitude {
                type Output = Magnitude;

                #[inline]
                #[track_caller]
                fn $op(mut self, rhs: &Magnitude) -> Magnitude {
                    self.$op_assign(rhs);
                    self
                }
            }

            impl $Op<Magnitude> for Magnitude {
                type Output = Magnitude;

                #[inline]
                #[track_caller]
                fn $op(mut self, rhs: Magnitude) -> Magnitude {
                    self.$op_assign(&rhs);
                    self
                }
            }

            impl<'a, 'b> $Op<&'b Magnitude> for &'a Magnitude {
                type Output = Magnitude;

                #[inline]
                #[track_caller]
                fn $op(self, rhs: &Magnitude) -> Magnitude {
                    let mut lhs = self.clone();
                    lhs.$op_assign(rhs);
                    lhs
                }
            }

            impl<'a> $Op<Magnitude> for &'a Magnitude {
                type Output = Magnitude;

                #[inline]
                #[track_caller]
                fn $op(self, rhs: Magnitude) -> Magnitude {
                    let mut lhs = self.clone();
                    lhs.$op_assign(&rhs);
                    lhs
                }
            }
        )*
    };
}

forward_binop! {
    Add add AddAssign add_assign
    Sub sub SubAssign sub_assign
    Mul mul MulAssign mul_assign
    Div div DivAssign div_assign
    Rem rem RemAssign rem_assign
    BitAnd bitand BitAndAssign bitand_assign
    BitOr bitor BitOrAssign bitor_assign
    BitXor bitxor BitXorAssign bitxor_assign
}

// LIMB OPERANDS

impl AddAssign<Limb> for Magnitude {
    fn add_assign(&mut self, rhs: Limb) {
        self.add_digit_at(rhs, 0);
    }
}

impl SubAssign<Limb> for Magnitude {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Limb) {
        if self.sub_digit_at(rhs, 0) {
            underflow();
        }
    }
}

impl MulAssign<Limb> for Magnitude {
    fn mul_assign(&mut self, rhs: Limb) {
        self.mul_digit(rhs);
    }
}

impl DivAssign<Limb> for Magnitude {
    #[track_caller]
    fn div_assign(&mut self, rhs: Limb) {
        if rhs == 0 {
            division_by_zero();
        }
        div::idiv_digit(&mut self.limbs, rhs);
        self.normalize();
    }
}

impl RemAssign<Limb> for Magnitude {
    #[track_caller]
    fn rem_assign(&mut self, rhs: Limb) {
        match div::rem_digit(&self.limbs, rhs).checked() {
            Some(remainder) => *self = Magnitude::from_limb(remainder),
            None => division_by_zero(),
        }
    }
}

macro_rules! forward_limb_binop {
    ($($Op:ident $op:ident $op_assign:ident)*) => {
        $(
            impl $Op<Limb> for Magnitude {
                type Output = Magnitude;

                #[inline]
                #[track_caller]
                fn $op(mut self, rhs: Limb) -> Magnitude {
                    self.$op_assign(rhs);
                    self
                }
            }

            impl<'a> $Op<Limb> for &'a Magnitude {
                type Output = Magnitude;

                #[inline]
                #[track_caller]
                fn $op(self, rhs: Limb) -> Magnitude {
                    let mut lhs = self.clone();
                    lhs.$op_assign(rhs);
                    lhs
                }
            }
        )*
    };
}

forward_limb_binop! {
    Add add add_assign
    Sub sub sub_assign
    Mul mul mul_assign
    Div div div_assign
    Rem rem rem_assign
}

// SHIFTS

impl ShlAssign<usize> for Magnitude {
    fn shl_assign(&mut self, rhs: usize) {
        if self.is_zero() {
            return;
        }
        let (major, minor) = shift::split_distance(rhs);
        let len = self.len();
        self.grow_to(len + major + 1);
        shift::ishl(&mut self.limbs, major, minor, false);
        self.normalize();
    }
}

impl ShrAssign<usize> for Magnitude {
    fn shr_assign(&mut self, rhs: usize) {
        shift::ishr_bits(&mut self.limbs, rhs, false);
        self.normalize();
    }
}

macro_rules! forward_shift {
    ($($Op:ident $op:ident $op_assign:ident)*) => {
        $(
            impl $Op<usize> for Magnitude {
                type Output = Magnitude;

                #[inline]
                fn $op(mut self, rhs: usize) -> Magnitude {
                    self.$op_assign(rhs);
                    self
                }
            }

            impl<'a> $Op<usize> for &'a Magnitude {
                type Output = Magnitude;

                #[inline]
                fn $op(self, rhs: usize) -> Magnitude {
                    let mut lhs = self.clone();
                    lhs.$op_assign(rhs);
                    lhs
                }
            }
        )*
    };
}

forward_shift! {
    Shl shl shl_assign
    Shr shr shr_assign
}
