use crate::{
    error::{IllegalMoveError, ParseError},
    piles::Piles,
};

/// Remove `count` objects from pile `pile`.
///
/// The count is never zero; that is checked when the action is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    pub(crate) pile: usize,
    pub(crate) count: u32,
}

impl Action {
    pub fn new(pile: usize, count: u32) -> Result<Self, ParseError> {
        if count == 0 {
            return Err(ParseError::ZeroCount);
        }
        Ok(Action { pile, count })
    }

    pub fn pile(self) -> usize {
        self.pile
    }

    pub fn count(self) -> u32 {
        self.count
    }

    /// Check that this action can be applied to the given piles.
    pub fn validate(self, piles: &Piles) -> Result<(), IllegalMoveError> {
        let available = piles.get(self.pile).ok_or(IllegalMoveError::PileOutOfRange {
            pile: self.pile,
            piles: piles.pile_count(),
        })?;
        if self.count == 0 {
            Err(IllegalMoveError::ZeroCount)
        } else if self.count > available {
            Err(IllegalMoveError::NotEnough {
                pile: self.pile,
                count: self.count,
                available,
            })
        } else {
            Ok(())
        }
    }
}
