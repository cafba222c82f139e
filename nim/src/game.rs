use crate::{
    action::Action,
    error::{IllegalMoveError, ParseError, ReplayError},
    game_result::GameResult,
    piles::Piles,
    player::Player,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    pub(crate) piles: Piles,
    pub(crate) to_move: Player,
    pub(crate) winner: Option<Player>,
    pub(crate) ply: u64,
}

/// Start a game from the given piles with player zero to move.
pub fn new_game(initial: &[u32]) -> Result<Game, ParseError> {
    Ok(Game::new(Piles::new(initial)?))
}

impl Game {
    pub fn new(piles: Piles) -> Self {
        Game {
            piles,
            ..Default::default()
        }
    }

    /// Replay a list of moves in `pile:count` notation from the given piles.
    pub fn from_moves(initial: &[u32], moves: &[&str]) -> Result<Self, ReplayError> {
        let mut game = new_game(initial)?;
        for s in moves {
            game.play(s.parse()?)?;
        }
        Ok(game)
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn ply(&self) -> u64 {
        self.ply
    }

    /// True once every pile is empty, including a game that started that way.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.piles.is_terminal()
    }

    pub fn result(&self) -> GameResult {
        match self.winner {
            Some(player) => GameResult::Winner(player),
            None if self.piles.is_terminal() => GameResult::Decided,
            None => GameResult::Ongoing,
        }
    }

    /// Apply a move for the player to move.
    ///
    /// Whoever takes the last object loses, so when the piles run out the
    /// winner is the player who would move next.
    pub fn play(&mut self, action: Action) -> Result<(), IllegalMoveError> {
        if self.is_over() {
            return Err(IllegalMoveError::GameOver);
        }
        action.validate(&self.piles)?;

        self.piles.take(action.pile, action.count);
        if self.piles.is_terminal() {
            self.winner = Some(self.to_move.other());
        }
        self.to_move = self.to_move.other();
        self.ply += 1;
        Ok(())
    }
}
