use std::ops::Index;

use arrayvec::ArrayVec;

use crate::error::ParseError;

pub const MAX_PILES: usize = 16;

/// The default starting position: four piles of 1, 3, 5 and 7.
pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

/// Object counts, one per pile. Compared and hashed by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piles {
    counts: ArrayVec<u32, MAX_PILES>,
}

impl Index<usize> for Piles {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        self.counts.index(index)
    }
}

impl Piles {
    pub fn new(counts: &[u32]) -> Result<Self, ParseError> {
        let counts = ArrayVec::try_from(counts).map_err(|_| ParseError::TooManyPiles {
            max: MAX_PILES,
            got: counts.len(),
        })?;
        Ok(Piles { counts })
    }

    pub fn pile_count(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, pile: usize) -> Option<u32> {
        self.counts.get(pile).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().copied()
    }

    /// Total number of objects left on the table.
    pub fn total(&self) -> u64 {
        self.iter().map(u64::from).sum()
    }

    /// Whether every pile is empty. Also true when there are no piles at all.
    pub fn is_terminal(&self) -> bool {
        self.iter().all(|count| count == 0)
    }

    /// Xor of all pile counts.
    pub fn nim_sum(&self) -> u32 {
        self.iter().fold(0, |acc, count| acc ^ count)
    }

    /// Caller must have checked the pile and count.
    pub(crate) fn take(&mut self, pile: usize, count: u32) {
        self.counts[pile] -= count;
    }
}

impl Default for Piles {
    fn default() -> Self {
        // DEFAULT_PILES always fits.
        Piles {
            counts: DEFAULT_PILES.iter().copied().collect(),
        }
    }
}
