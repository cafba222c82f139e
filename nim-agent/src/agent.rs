use nim::{actions, Action, Piles};
use rand::Rng;

use crate::{
    config::AgentConfig,
    error::InvalidStateError,
    policy::{random_action, Policy},
    value_store::ValueStore,
};

/// Epsilon-greedy player backed by a [`ValueStore`].
///
/// Both sides of a self-play game share the same agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    store: ValueStore,
    epsilon: f64,
}

impl Default for Agent {
    fn default() -> Self {
        Agent::new(AgentConfig::default())
    }
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        Agent {
            store: ValueStore::new(config.learning_rate),
            epsilon: config.epsilon,
        }
    }

    pub fn from_store(store: ValueStore, epsilon: f64) -> Self {
        Agent { store, epsilon }
    }

    pub fn config(&self) -> AgentConfig {
        AgentConfig {
            learning_rate: self.store.learning_rate(),
            epsilon: self.epsilon,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ValueStore {
        &mut self.store
    }

    /// Highest valued action, the first one in move order on ties.
    pub fn greedy_action(&self, state: &Piles) -> Result<Action, InvalidStateError> {
        let mut best: Option<(Action, f64)> = None;
        for action in actions(state) {
            let value = self.store.get(state, action);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }
        best.map(|(action, _)| action)
            .ok_or_else(|| InvalidStateError { piles: state.clone() })
    }
}

impl Policy for Agent {
    fn choose_action<R: Rng + ?Sized>(
        &self,
        state: &Piles,
        explore: bool,
        rng: &mut R,
    ) -> Result<Action, InvalidStateError> {
        if explore && rng.gen::<f64>() < self.epsilon {
            random_action(state, rng)
        } else {
            self.greedy_action(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use nim::ParseError;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn piles(counts: &[u32]) -> Piles {
        Piles::new(counts).unwrap()
    }

    #[test]
    fn exploit_picks_highest_value() -> Result<(), ParseError> {
        let mut rng = StdRng::seed_from_u64(0);
        let mut agent = Agent::default();
        let state = Piles::default();
        let best = Action::new(2, 4)?;
        agent.store_mut().insert(state.clone(), Action::new(0, 1)?, 0.3);
        agent.store_mut().insert(state.clone(), best, 0.9);
        agent.store_mut().insert(state.clone(), Action::new(3, 7)?, -1.0);

        for _ in 0..100 {
            assert_eq!(agent.choose_action(&state, false, &mut rng), Ok(best));
        }
        Ok(())
    }

    #[test]
    fn ties_go_to_first_action() -> Result<(), ParseError> {
        let agent = Agent::default();
        assert_eq!(agent.greedy_action(&piles(&[0, 2, 1])), Ok(Action::new(1, 1)?));
        Ok(())
    }

    #[test]
    fn negative_values_avoided() -> Result<(), ParseError> {
        let mut agent = Agent::default();
        let state = piles(&[1, 1]);
        agent.store_mut().insert(state.clone(), Action::new(0, 1)?, -0.5);
        assert_eq!(agent.greedy_action(&state), Ok(Action::new(1, 1)?));
        Ok(())
    }

    #[test]
    fn terminal_state_is_invalid() {
        let mut rng = StdRng::seed_from_u64(1);
        let agent = Agent::default();
        let state = piles(&[0, 0, 0]);
        let err = InvalidStateError { piles: state.clone() };
        assert_eq!(agent.choose_action(&state, false, &mut rng), Err(err.clone()));
        assert_eq!(agent.choose_action(&state, true, &mut rng), Err(err));
    }

    #[test]
    fn exploration_rate_is_respected() -> Result<(), ParseError> {
        let mut rng = StdRng::seed_from_u64(2);
        let mut agent = Agent::new(AgentConfig {
            epsilon: 0.5,
            ..Default::default()
        });
        let state = Piles::default();
        let best = Action::new(3, 3)?;
        agent.store_mut().insert(state.clone(), best, 1.0);

        let greedy = (0..2_000)
            .filter(|_| agent.choose_action(&state, true, &mut rng) == Ok(best))
            .count();
        // half exploit, and a random move hits the best one 1/16 of the time
        assert!((900..1_300).contains(&greedy), "{greedy}");

        let never = Agent::from_store(agent.store().clone(), 0.0);
        for _ in 0..100 {
            assert_eq!(never.choose_action(&state, true, &mut rng), Ok(best));
        }
        Ok(())
    }
}
