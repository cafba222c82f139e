use crate::{action::Action, game::Game, piles::Piles};

/// Every legal action for the given piles.
///
/// Ordered by pile index and then by count, both ascending.
/// The list is empty exactly when every pile is empty.
pub fn available_actions(piles: &Piles) -> Vec<Action> {
    actions(piles).collect()
}

/// Same actions in the same order as [`available_actions`], generated lazily.
pub fn actions(piles: &Piles) -> impl Iterator<Item = Action> + '_ {
    piles
        .iter()
        .enumerate()
        .flat_map(|(pile, size)| (1..=size).map(move |count| Action { pile, count }))
}

impl Piles {
    pub fn available_actions(&self) -> Vec<Action> {
        available_actions(self)
    }
}

impl Game {
    /// Legal actions for the player to move. Empty once the game is over.
    pub fn available_actions(&self) -> Vec<Action> {
        if self.winner.is_some() {
            return Vec::new();
        }
        available_actions(&self.piles)
    }
}
