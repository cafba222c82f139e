use std::collections::HashMap;

use nim::{actions, Action, Piles};

use crate::config::LEARNING_RATE;

/// Learned value of taking an action from a position.
///
/// Only visited pairs are stored; everything else is worth `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueStore {
    values: HashMap<(Piles, Action), f64>,
    learning_rate: f64,
}

impl Default for ValueStore {
    fn default() -> Self {
        ValueStore::new(LEARNING_RATE)
    }
}

impl ValueStore {
    pub fn new(learning_rate: f64) -> Self {
        ValueStore {
            values: HashMap::new(),
            learning_rate,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn get(&self, state: &Piles, action: Action) -> f64 {
        self.values
            .get(&(state.clone(), action))
            .copied()
            .unwrap_or_default()
    }

    pub fn insert(&mut self, state: Piles, action: Action, value: f64) {
        self.values.insert((state, action), value);
    }

    /// Best value reachable from `state`, or `0.0` when the game is over.
    pub fn best_future_value(&self, state: &Piles) -> f64 {
        actions(state)
            .map(|action| self.get(state, action))
            .reduce(f64::max)
            .unwrap_or_default()
    }

    /// One-step temporal-difference update of a single pair.
    ///
    /// Q(s, a) <- Q(s, a) + alpha * (r + max_a' Q(s', a') - Q(s, a))
    pub fn update(&mut self, old_state: &Piles, action: Action, new_state: &Piles, reward: f64) {
        let old = self.get(old_state, action);
        let target = reward + self.best_future_value(new_state);
        let new = old + self.learning_rate * (target - old);
        self.insert(old_state.clone(), action, new);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Piles, Action, f64)> + '_ {
        self.values
            .iter()
            .map(|((state, action), value)| (state, *action, *value))
    }

    /// Combine stores that were trained independently.
    ///
    /// Every pair gets the mean of its values over the stores that hold it.
    /// The learning rate is taken from the first store.
    pub fn merge<'a>(stores: impl IntoIterator<Item = &'a ValueStore>) -> ValueStore {
        let mut stores = stores.into_iter().peekable();
        let learning_rate = stores
            .peek()
            .map(|store| store.learning_rate)
            .unwrap_or(LEARNING_RATE);

        let mut sums: HashMap<(Piles, Action), (f64, u32)> = HashMap::new();
        for store in stores {
            for (key, value) in &store.values {
                let entry = sums.entry(key.clone()).or_default();
                entry.0 += value;
                entry.1 += 1;
            }
        }

        ValueStore {
            values: sums
                .into_iter()
                .map(|(key, (sum, n))| (key, sum / f64::from(n)))
                .collect(),
            learning_rate,
        }
    }
}
