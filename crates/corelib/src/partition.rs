//! Subset generation and index reconstruction.
//!
//! Subset `i` of a range holds every index whose offset from the lower bound
//! has bit `i` set. Answering "is the index in subset `i`?" for every subset
//! spells out the offset in little-endian binary.

use tracing::debug;

use crate::bits::{bit_is_set, offset_of};
use crate::errors::PartitionError;
use crate::range::IndexRange;

/// Partition `[lower, upper]` into membership subsets, one per bit of the
/// largest offset, members ascending. Empty subsets are dropped. A single
/// element or empty range yields no subsets.
pub fn generate(lower: i64, upper: i64) -> Vec<Vec<i64>> {
    let range = IndexRange::new_unchecked(lower, upper);
    let width = range.bit_width();
    debug!(
        lower,
        upper,
        domain = range.domain_size(),
        width,
        "generating subsets"
    );
    if range.domain_size() < 2 {
        return Vec::new();
    }
    (0..width)
        .map(|bit| {
            (lower..=upper)
                .filter(|&x| bit_is_set(offset_of(lower, x), bit))
                .collect::<Vec<_>>()
        })
        .filter(|subset| !subset.is_empty())
        .collect()
}

/// Fold a little-endian answer vector into an offset.
pub fn decode_offset(answers: &[bool]) -> Result<u64, PartitionError> {
    answers
        .iter()
        .enumerate()
        .filter(|&(_, &yes)| yes)
        .try_fold(0u64, |acc, (pos, _)| {
            u32::try_from(pos)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .map(|bit| acc | bit)
                .ok_or(PartitionError::Overflow)
        })
}

/// Recover the index from one answer per subset, in generator order.
///
/// Only the number of subsets is consulted. The result is not checked
/// against the upper bound; see [`Partition::reconstruct`] for that.
pub fn reconstruct(
    subsets: &[Vec<i64>],
    answers: &[bool],
    lower: i64,
) -> Result<i64, PartitionError> {
    if subsets.len() != answers.len() {
        return Err(PartitionError::LengthMismatch {
            subsets: subsets.len(),
            answers: answers.len(),
        });
    }
    let offset = decode_offset(answers)?;
    lower
        .checked_add_unsigned(offset)
        .ok_or(PartitionError::Overflow)
}

/// Checked reconstruction straight from a range, without building its
/// subsets. A playable range has exactly `bit_width` subsets.
pub fn reconstruct_in(range: IndexRange, answers: &[bool]) -> Result<i64, PartitionError> {
    let expected = if range.domain_size() < 2 {
        0
    } else {
        range.bit_width() as usize
    };
    if answers.len() != expected {
        return Err(PartitionError::LengthMismatch {
            subsets: expected,
            answers: answers.len(),
        });
    }
    let value = range
        .lower()
        .checked_add_unsigned(decode_offset(answers)?)
        .ok_or(PartitionError::Overflow)?;
    if !range.contains(value) {
        return Err(PartitionError::OutOfRange {
            value,
            lower: range.lower(),
            upper: range.upper(),
        });
    }
    Ok(value)
}

/// A range together with its generated subsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    range: IndexRange,
    subsets: Vec<Vec<i64>>,
}

impl Partition {
    pub fn new(range: IndexRange) -> Self {
        let subsets = generate(range.lower(), range.upper());
        Self { range, subsets }
    }

    pub fn range(&self) -> IndexRange {
        self.range
    }

    pub fn subsets(&self) -> &[Vec<i64>] {
        &self.subsets
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Truthful answers for `x`, one per subset.
    pub fn answers_for(&self, x: i64) -> Result<Vec<bool>, PartitionError> {
        if !self.range.contains(x) {
            return Err(self.out_of_range(x));
        }
        Ok(self
            .subsets
            .iter()
            .map(|subset| subset.binary_search(&x).is_ok())
            .collect())
    }

    /// Like [`reconstruct`], but rejects answers that encode an index past
    /// the upper bound.
    pub fn reconstruct(&self, answers: &[bool]) -> Result<i64, PartitionError> {
        let value = reconstruct(&self.subsets, answers, self.range.lower())?;
        if !self.range.contains(value) {
            return Err(self.out_of_range(value));
        }
        Ok(value)
    }

    fn out_of_range(&self, value: i64) -> PartitionError {
        PartitionError::OutOfRange {
            value,
            lower: self.range.lower(),
            upper: self.range.upper(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_eight() {
        let subsets = generate(1, 8);
        assert_eq!(
            subsets,
            vec![vec![2, 4, 6, 8], vec![3, 4, 7, 8], vec![5, 6, 7, 8]]
        );
        assert_eq!(reconstruct(&subsets, &[true, false, true], 1), Ok(6));
    }

    #[test]
    fn two_element_range() {
        let subsets = generate(0, 1);
        assert_eq!(subsets, vec![vec![1]]);
        assert_eq!(reconstruct(&subsets, &[false], 0), Ok(0));
        assert_eq!(reconstruct(&subsets, &[true], 0), Ok(1));
    }

    #[test]
    fn degenerate_ranges_have_no_subsets() {
        assert!(generate(5, 5).is_empty());
        assert!(generate(6, 5).is_empty());
        assert_eq!(reconstruct(&[], &[], 5), Ok(5));
    }

    #[test]
    fn length_mismatch() {
        let subsets = vec![vec![1], vec![2]];
        assert_eq!(
            reconstruct(&subsets, &[true, false, true], 0),
            Err(PartitionError::LengthMismatch {
                subsets: 2,
                answers: 3
            })
        );
    }

    #[test]
    fn non_power_of_two_keeps_every_bit() {
        // offsets 0..=4: bit 2 is only set for offset 4
        let subsets = generate(10, 14);
        assert_eq!(subsets, vec![vec![11, 13], vec![12, 13], vec![14]]);
    }

    #[test]
    fn negative_bounds() {
        let subsets = generate(-3, 0);
        assert_eq!(subsets, vec![vec![-2, 0], vec![-1, 0]]);
        assert_eq!(reconstruct(&subsets, &[false, true], -3), Ok(-1));
    }

    #[test]
    fn unchecked_reconstruct_can_leave_the_range() {
        let subsets = generate(10, 14);
        assert_eq!(reconstruct(&subsets, &[true, true, true], 10), Ok(17));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            reconstruct(&[vec![]], &[true], i64::MAX),
            Err(PartitionError::Overflow)
        );
        let long = vec![true; 65];
        assert_eq!(decode_offset(&long), Err(PartitionError::Overflow));
        let mut high = vec![false; 64];
        high[63] = true;
        assert_eq!(decode_offset(&high), Ok(1 << 63));
    }

    #[test]
    fn partition_checks_upper_bound() {
        let p = Partition::new(IndexRange::new(10, 14).unwrap());
        assert_eq!(p.len(), 3);
        assert_eq!(p.reconstruct(&[false, false, true]), Ok(14));
        assert_eq!(
            p.reconstruct(&[true, true, true]),
            Err(PartitionError::OutOfRange {
                value: 17,
                lower: 10,
                upper: 14
            })
        );
    }

    #[test]
    fn range_reconstruction_matches_partition() {
        let range = IndexRange::new(-4, 20).unwrap();
        let p = Partition::new(range);
        for x in -4..=20 {
            let answers = p.answers_for(x).unwrap();
            assert_eq!(reconstruct_in(range, &answers), Ok(x));
        }
        assert_eq!(
            reconstruct_in(range, &[true; 5]),
            Err(PartitionError::OutOfRange {
                value: 27,
                lower: -4,
                upper: 20
            })
        );
        assert_eq!(
            reconstruct_in(range, &[true]),
            Err(PartitionError::LengthMismatch {
                subsets: 5,
                answers: 1
            })
        );
        assert_eq!(reconstruct_in(IndexRange::new_unchecked(5, 5), &[]), Ok(5));
    }

    #[test]
    fn range_reconstruction_handles_wide_ranges() {
        let range = IndexRange::new(0, 4_000_000_000).unwrap();
        let mut answers = vec![false; 32];
        answers[31] = true;
        assert_eq!(reconstruct_in(range, &answers), Ok(1 << 31));

        let full = IndexRange::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(reconstruct_in(full, &[true; 64]), Ok(i64::MAX));
    }

    #[test]
    fn answers_for_round_trip() {
        let p = Partition::new(IndexRange::new(-4, 20).unwrap());
        for x in -4..=20 {
            let answers = p.answers_for(x).unwrap();
            assert_eq!(p.reconstruct(&answers), Ok(x));
        }
        assert!(matches!(
            p.answers_for(21),
            Err(PartitionError::OutOfRange { value: 21, .. })
        ));
    }
}
