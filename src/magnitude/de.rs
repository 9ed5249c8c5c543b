use super::{Magnitude, WORD_LIMBS};
use crate::lib::{cmp, fmt, Vec};
use crate::limb::{Limb, LIMB_BITS};
use serde_core::de::{Deserialize, Deserializer, SeqAccess, Visitor};

impl<'de> Deserialize<'de> for Magnitude {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Magnitude, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MagnitudeVisitor;

        impl<'de> Visitor<'de> for MagnitudeVisitor {
            type Value = Magnitude;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of 64-bit words, least significant first")
            }

            fn visit_seq<V>(self, mut visitor: V) -> Result<Magnitude, V::Error>
            where
                V: SeqAccess<'de>,
            {
                // The size hint comes from the input, so cap the preallocation.
                let capacity = cmp::min(visitor.size_hint().unwrap_or(0), 4096);
                let mut limbs: Vec<Limb> = Vec::with_capacity(capacity * WORD_LIMBS);

                while let Some(word) = visitor.next_element::<u64>()? {
                    for i in 0..WORD_LIMBS {
                        limbs.push((word >> (i as u32 * LIMB_BITS)) as Limb);
                    }
                }

                Ok(Magnitude::from_vec(limbs))
            }
        }

        deserializer.deserialize_seq(MagnitudeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorCode};
    use crate::lib::vec;
    use serde_core::de::value::{SeqDeserializer, U64Deserializer};

    fn from_words(words: Vec<u64>) -> Magnitude {
        let de = SeqDeserializer::<_, Error>::new(words.into_iter());
        Magnitude::deserialize(de).unwrap()
    }

    #[test]
    fn deserialize_seq_test() {
        assert_eq!(from_words(vec![5, 0, 0]).limbs(), [5]);
        assert!(from_words(Vec::new()).is_zero());
    }

    #[test]
    fn deserialize_whole_words_test() {
        // Every word carries 64 bits whatever the limb width.
        assert_eq!(from_words(vec![0, 1]), Magnitude::from(1u128 << 64));
        assert_eq!(from_words(vec![u64::MAX]), Magnitude::from(u64::MAX));
        assert_eq!(from_words(vec![u64::MAX]).bit_width(), 64);
    }

    #[test]
    fn deserialize_invalid_type_test() {
        let de = U64Deserializer::<Error>::new(5);
        let err = Magnitude::deserialize(de).unwrap_err();
        assert!(err.is_data());
        match err.code() {
            ErrorCode::Message(msg) => assert!(msg.starts_with("invalid type: integer `5`")),
            code => panic!("unexpected error code {:?}", code),
        }
    }
}
