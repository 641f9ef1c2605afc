//! Closed integer ranges of guessable indices.

use crate::bits::{bit_width, offset_of};
use crate::errors::PartitionError;

/// Closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    lower: i64,
    upper: i64,
}

impl IndexRange {
    /// A playable range: at least two indices.
    pub fn new(lower: i64, upper: i64) -> Result<Self, PartitionError> {
        if lower >= upper {
            return Err(PartitionError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Accepts any pair of bounds, including empty and single-element ranges.
    pub fn new_unchecked(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Largest offset in the range, `upper - lower`. Zero when `upper <= lower`.
    pub fn span(&self) -> u64 {
        if self.upper < self.lower {
            0
        } else {
            offset_of(self.lower, self.upper)
        }
    }

    /// Number of indices. Saturates for the full `i64` domain.
    pub fn domain_size(&self) -> u64 {
        if self.upper < self.lower {
            0
        } else {
            self.span().saturating_add(1)
        }
    }

    /// Questions needed to single out one index.
    pub fn bit_width(&self) -> u32 {
        bit_width(self.span())
    }

    pub fn contains(&self, x: i64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_bounds() {
        assert_eq!(
            IndexRange::new(5, 5),
            Err(PartitionError::InvalidRange { lower: 5, upper: 5 })
        );
        assert!(IndexRange::new(9, 2).is_err());
    }

    #[test]
    fn sizes() {
        let r = IndexRange::new(1, 8).unwrap();
        assert_eq!(r.span(), 7);
        assert_eq!(r.domain_size(), 8);
        assert_eq!(r.bit_width(), 3);

        let single = IndexRange::new_unchecked(5, 5);
        assert_eq!(single.domain_size(), 1);
        assert_eq!(single.bit_width(), 0);

        let empty = IndexRange::new_unchecked(5, 4);
        assert_eq!(empty.domain_size(), 0);

        let full = IndexRange::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(full.domain_size(), u64::MAX);
        assert_eq!(full.bit_width(), 64);
    }

    #[test]
    fn membership() {
        let r = IndexRange::new(-2, 2).unwrap();
        assert!(r.contains(-2));
        assert!(r.contains(2));
        assert!(!r.contains(3));
    }
}
