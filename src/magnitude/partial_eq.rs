use super::Magnitude;
use crate::compare;
use crate::lib::cmp::Ordering;
use crate::lib::Vec;
use crate::limb::Limb;

// Limb sequences compare by value, so redundant leading zeros on either side
// do not matter.

impl PartialEq<[Limb]> for Magnitude {
    fn eq(&self, other: &[Limb]) -> bool {
        compare::compare(&self.limbs, other) == Ordering::Equal
    }
}

impl<'a> PartialEq<&'a [Limb]> for Magnitude {
    fn eq(&self, other: &&[Limb]) -> bool {
        compare::compare(&self.limbs, other) == Ordering::Equal
    }
}

impl<const N: usize> PartialEq<[Limb; N]> for Magnitude {
    fn eq(&self, other: &[Limb; N]) -> bool {
        compare::compare(&self.limbs, other) == Ordering::Equal
    }
}

impl PartialEq<Vec<Limb>> for Magnitude {
    fn eq(&self, other: &Vec<Limb>) -> bool {
        compare::compare(&self.limbs, other) == Ordering::Equal
    }
}

impl PartialEq<Magnitude> for [Limb] {
    fn eq(&self, other: &Magnitude) -> bool {
        compare::compare(self, &other.limbs) == Ordering::Equal
    }
}

impl PartialEq<Magnitude> for Vec<Limb> {
    fn eq(&self, other: &Magnitude) -> bool {
        compare::compare(self, &other.limbs) == Ordering::Equal
    }
}

impl PartialEq<Limb> for Magnitude {
    fn eq(&self, other: &Limb) -> bool {
        compare::compare(&self.limbs, &[*other]) == Ordering::Equal
    }
}

impl PartialEq<Magnitude> for Limb {
    fn eq(&self, other: &Magnitude) -> bool {
        other == self
    }
}
