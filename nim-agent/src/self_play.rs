use std::{panic, thread};

use log::{debug, info};
use nim::{Action, Game, Piles, Player};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use crate::{
    agent::Agent,
    config::{AgentConfig, LOG_EVERY, LOSS_REWARD, WIN_REWARD},
    error::AgentError,
    policy::Policy,
    value_store::ValueStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeStats {
    pub plies: u64,
    pub winner: Player,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingSummary {
    pub episodes: usize,
    pub plies: u64,
    /// Wins indexed by player.
    pub wins: [usize; 2],
}

impl TrainingSummary {
    fn record(&mut self, stats: EpisodeStats) {
        self.episodes += 1;
        self.plies += stats.plies;
        self.wins[stats.winner.index()] += 1;
    }

    pub fn average_plies(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.plies as f64 / self.episodes as f64
        }
    }
}

/// Train a fresh agent with default settings on the default piles.
pub fn train(episodes: usize) -> Result<Agent, AgentError> {
    train_with(episodes, AgentConfig::default(), &Piles::default(), &mut thread_rng())
}

pub fn train_with<R: Rng + ?Sized>(
    episodes: usize,
    config: AgentConfig,
    initial: &Piles,
    rng: &mut R,
) -> Result<Agent, AgentError> {
    let mut agent = Agent::new(config);
    train_agent(&mut agent, episodes, initial, rng)?;
    Ok(agent)
}

/// Continue training an existing agent.
pub fn train_agent<R: Rng + ?Sized>(
    agent: &mut Agent,
    episodes: usize,
    initial: &Piles,
    rng: &mut R,
) -> Result<TrainingSummary, AgentError> {
    let mut summary = TrainingSummary::default();
    for i in 0..episodes {
        let stats = self_play_episode(agent, initial, rng)?;
        debug!("episode {i}: {} wins in {} plies", stats.winner, stats.plies);
        summary.record(stats);
        if (i + 1) % LOG_EVERY == 0 {
            info!(
                "self-play episode {}/{episodes}, {} values learned",
                i + 1,
                agent.store().len()
            );
        }
    }
    Ok(summary)
}

/// Play one game of the agent against itself and learn from it.
///
/// A move is judged once the mover's opponent has replied, or when the game
/// ends. The move that empties the piles is punished and the opponent's last
/// move is rewarded.
pub fn self_play_episode<R: Rng + ?Sized>(
    agent: &mut Agent,
    initial: &Piles,
    rng: &mut R,
) -> Result<EpisodeStats, AgentError> {
    let mut game = Game::new(initial.clone());
    let mut last: [Option<(Piles, Action)>; 2] = [None, None];

    loop {
        let mover = game.to_move();
        let state = game.piles().clone();
        let action = agent.choose_action(&state, true, rng)?;
        last[mover.index()] = Some((state.clone(), action));

        game.play(action)?;
        let new_state = game.piles();
        let previous = &last[mover.other().index()];

        if let Some(winner) = game.winner() {
            agent.store_mut().update(&state, action, new_state, LOSS_REWARD);
            if let Some((prev_state, prev_action)) = previous {
                agent.store_mut().update(prev_state, *prev_action, new_state, WIN_REWARD);
            }
            return Ok(EpisodeStats {
                plies: game.ply(),
                winner,
            });
        }

        if let Some((prev_state, prev_action)) = previous {
            agent.store_mut().update(prev_state, *prev_action, new_state, 0.0);
        }
    }
}

/// Train independent agents on separate threads and merge what they learned.
///
/// Worker `i` uses a generator seeded with `seed + i`, so the result only
/// depends on the arguments.
pub fn train_parallel(
    episodes: usize,
    workers: usize,
    config: AgentConfig,
    initial: &Piles,
    seed: u64,
) -> Result<Agent, AgentError> {
    let workers = workers.max(1);
    info!("starting self-play with {workers} workers");

    let agents = thread::scope(|s| {
        let handles = (0..workers)
            .map(|i| {
                let share = episodes / workers + usize::from(i < episodes % workers);
                s.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                    train_with(share, config, initial, &mut rng)
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Result<Vec<_>, _>>()
    })?;

    let store = ValueStore::merge(agents.iter().map(Agent::store));
    info!("merged {} values from {workers} workers", store.len());
    Ok(Agent::from_store(store, config.epsilon))
}
