use nim::{available_actions, Action, Piles};
use rand::{seq::SliceRandom, Rng};

use crate::error::InvalidStateError;

/// Anything that can pick a move for the player to move.
pub trait Policy {
    /// Pick an action for `state`. With `explore` the policy may deviate
    /// from its best guess. Fails when `state` has no legal actions.
    fn choose_action<R: Rng + ?Sized>(
        &self,
        state: &Piles,
        explore: bool,
        rng: &mut R,
    ) -> Result<Action, InvalidStateError>;
}

/// Plays a uniformly random legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn choose_action<R: Rng + ?Sized>(
        &self,
        state: &Piles,
        _explore: bool,
        rng: &mut R,
    ) -> Result<Action, InvalidStateError> {
        random_action(state, rng)
    }
}

pub(crate) fn random_action<R: Rng + ?Sized>(state: &Piles, rng: &mut R) -> Result<Action, InvalidStateError> {
    available_actions(state)
        .choose(rng)
        .copied()
        .ok_or_else(|| InvalidStateError { piles: state.clone() })
}
