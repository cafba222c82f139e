// agent
pub const LEARNING_RATE: f64 = 0.5;
pub const EPSILON: f64 = 0.1;

// self-play
pub const TRAIN_EPISODES: usize = 10_000;
pub const WIN_REWARD: f64 = 1.0;
pub const LOSS_REWARD: f64 = -1.0;
pub const LOG_EVERY: usize = 1_000;

// pit
pub const PIT_GAMES: usize = 1_000;
pub const WIN_RATE_THRESHOLD: f64 = 0.55;

// command line
/// Largest pile accepted from the command line.
pub const MAX_PILE_SIZE: u32 = 1_000;

/// Tunable parameters of a learning agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentConfig {
    /// Step size of the temporal-difference update.
    pub learning_rate: f64,
    /// Probability of a random move while exploring.
    pub epsilon: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            learning_rate: LEARNING_RATE,
            epsilon: EPSILON,
        }
    }
}
