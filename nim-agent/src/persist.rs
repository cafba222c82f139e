//! Saving and loading trained agents as JSON.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::{info, warn};
use nim::{Action, Piles};
use serde::{Deserialize, Serialize};

use crate::{agent::Agent, config::AgentConfig, error::PersistError, value_store::ValueStore};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub piles: Vec<u32>,
    pub pile: usize,
    pub count: u32,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedAgent {
    pub version: u32,
    pub learning_rate: f64,
    pub epsilon: f64,
    pub entries: Vec<SavedEntry>,
}

impl SavedAgent {
    pub const VERSION: u32 = 1;
}

impl From<&Agent> for SavedAgent {
    fn from(agent: &Agent) -> Self {
        let mut entries = agent.store().iter().collect::<Vec<_>>();
        // stable output for identical agents
        entries.sort_by(|(a_piles, a_action, _), (b_piles, b_action, _)| {
            (a_piles, a_action).cmp(&(b_piles, b_action))
        });

        SavedAgent {
            version: Self::VERSION,
            learning_rate: agent.store().learning_rate(),
            epsilon: agent.epsilon(),
            entries: entries
                .into_iter()
                .map(|(piles, action, value)| SavedEntry {
                    piles: piles.as_slice().to_vec(),
                    pile: action.pile(),
                    count: action.count(),
                    value,
                })
                .collect(),
        }
    }
}

impl TryFrom<SavedAgent> for Agent {
    type Error = PersistError;

    fn try_from(saved: SavedAgent) -> Result<Self, Self::Error> {
        if saved.version != SavedAgent::VERSION {
            return Err(PersistError::Version {
                found: saved.version,
                expected: SavedAgent::VERSION,
            });
        }

        let mut store = ValueStore::new(saved.learning_rate);
        for (index, entry) in saved.entries.into_iter().enumerate() {
            let piles = Piles::new(&entry.piles).map_err(|source| PersistError::Entry { index, source })?;
            let action =
                Action::new(entry.pile, entry.count).map_err(|source| PersistError::Entry { index, source })?;
            action
                .validate(&piles)
                .map_err(|source| PersistError::IllegalEntry { index, source })?;
            store.insert(piles, action, entry.value);
        }
        Ok(Agent::from_store(store, saved.epsilon))
    }
}

impl Agent {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let path = path.as_ref();
        let io_error = |source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer(&mut writer, &SavedAgent::from(self))?;
        writer.flush().map_err(io_error)?;
        info!("saved {} values to {}", self.store().len(), path.display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let saved: SavedAgent = serde_json::from_reader(BufReader::new(file))?;
        let agent = Agent::try_from(saved)?;
        info!("loaded {} values from {}", agent.store().len(), path.display());
        Ok(agent)
    }

    /// Load the agent at `path`, or start untrained if there is no file.
    pub fn load_or_default<P: AsRef<Path>>(path: P, config: AgentConfig) -> Result<Self, PersistError> {
        let path = path.as_ref();
        if path.exists() {
            Agent::load(path)
        } else {
            warn!("no agent at {}, starting untrained", path.display());
            Ok(Agent::new(config))
        }
    }
}
