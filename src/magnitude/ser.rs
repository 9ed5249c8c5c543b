use super::{Magnitude, WORD_LIMBS};
use crate::compare::significant_len;
use crate::lib::cmp;
use crate::limb::LIMB_BITS;
use serde_core::ser::{Serialize, SerializeSeq, Serializer};

impl Serialize for Magnitude {
    /// Serialize as a sequence of `u64` words, least significant first.
    ///
    /// The words do not depend on the limb width of the build, so either
    /// width reads what the other wrote.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Zero is written as a single zero word.
        let len = cmp::max(significant_len(&self.limbs), 1);
        let words = self.limbs[..len].chunks(WORD_LIMBS);
        let mut seq = serializer.serialize_seq(Some(words.len()))?;
        for chunk in words {
            let word = chunk.iter().enumerate().fold(0u64, |word, (i, &limb)| {
                word | u64::from(limb) << (i as u32 * LIMB_BITS)
            });
            seq.serialize_element(&word)?;
        }
        seq.end()
    }
}
