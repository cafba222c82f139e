use log::info;
use nim::{Game, Piles, Player};
use rand::Rng;

use crate::{error::AgentError, policy::Policy};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PitResult {
    pub wins: u32,
    pub losses: u32,
}

impl PitResult {
    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            0.0
        } else {
            self.wins as f64 / games as f64
        }
    }

    fn update(&mut self, winner: Player, us: Player) {
        if winner == us {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

/// Play `games` games between two policies without exploration.
///
/// `new` moves first in even games and second in odd ones.
/// The result is from the point of view of `new`.
pub fn pit<A: Policy, B: Policy, R: Rng + ?Sized>(
    new: &A,
    old: &B,
    games: usize,
    initial: &Piles,
    rng: &mut R,
) -> Result<PitResult, AgentError> {
    let mut result = PitResult::default();
    for i in 0..games {
        let new_player = if i % 2 == 0 { Player::Zero } else { Player::One };
        let mut game = Game::new(initial.clone());
        while !game.is_over() {
            let action = if game.to_move() == new_player {
                new.choose_action(game.piles(), false, rng)?
            } else {
                old.choose_action(game.piles(), false, rng)?
            };
            game.play(action)?;
        }
        if let Some(winner) = game.winner() {
            result.update(winner, new_player);
        }
    }
    info!("pit over {games} games: {result:?}");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{agent::Agent, policy::RandomPolicy};

    #[test]
    fn win_rate_of_nothing() {
        assert_eq!(PitResult::default().win_rate(), 0.0);
        assert_eq!(PitResult { wins: 3, losses: 1 }.win_rate(), 0.75);
    }

    #[test]
    fn forced_games_split_evenly() -> Result<(), AgentError> {
        // a single object always loses for whoever starts
        let mut rng = StdRng::seed_from_u64(0);
        let initial = Piles::new(&[1]).unwrap();
        let result = pit(&Agent::default(), &RandomPolicy, 10, &initial, &mut rng)?;
        assert_eq!(result, PitResult { wins: 5, losses: 5 });
        Ok(())
    }

    #[test]
    fn every_game_is_counted() -> Result<(), AgentError> {
        let mut rng = StdRng::seed_from_u64(1);
        let result = pit(&RandomPolicy, &RandomPolicy, 40, &Piles::default(), &mut rng)?;
        assert_eq!(result.wins + result.losses, 40);
        Ok(())
    }
}
