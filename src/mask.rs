use std::fmt;
use std::ops::Index;

use bitvec::prelude::*;

use crate::enumerate::MAX_SIGNAL_LINES;

/// Bit-vector over every combination of `width` signal lines.
///
/// Bit `i` is set iff combination `i` satisfies the trigger configuration.
/// The mask is one logical vector of `2^width` bits regardless of how it is
/// later presented.
///
/// Only the enumerator builds masks; callers cannot change one afterwards:
///
/// ```compile_fail
/// let mut mask = "111111".parse::<tlu_mask::TriggerPattern>().unwrap().enumerate();
/// mask.set(0);
/// ```
///
/// ```compile_fail
/// let mask = tlu_mask::ResultMask::empty(6);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResultMask {
    bits: BitVec<u64, Lsb0>,
    width: usize,
}

impl ResultMask {
    /// An all-clear mask over `2^width` combinations.
    pub(crate) fn empty(width: usize) -> Self {
        assert!(width <= MAX_SIGNAL_LINES, "unsupported width {width}");

        Self {
            bits: bitvec![u64, Lsb0; 0; 1 << width],
            width,
        }
    }

    pub(crate) fn set(&mut self, combination: usize) {
        self.bits.set(combination, true);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of combinations covered, `2^width`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn contains(&self, combination: usize) -> bool {
        self.bits[combination]
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Matching combinations in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The whole mask as one word, if it fits in 64 bits.
    pub fn as_u64(&self) -> Option<u64> {
        if self.len() <= u64::BITS as usize {
            Some(self.bits.load_le::<u64>())
        } else {
            None
        }
    }

    /// Backing words, least significant first. Bits past `len()` are zero.
    pub fn as_raw_slice(&self) -> &[u64] {
        self.bits.as_raw_slice()
    }
}

impl Index<usize> for ResultMask {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        if self.contains(index) {
            &true
        } else {
            &false
        }
    }
}

impl fmt::Debug for ResultMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes: Vec<u8> = self
            .as_raw_slice()
            .iter()
            .rev()
            .flat_map(|word| word.to_be_bytes())
            .collect();

        write!(f, "ResultMask<{}>(0x{})", self.width, hex::encode(bytes))
    }
}
