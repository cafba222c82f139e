use std::{io, path::PathBuf};

use nim::{IllegalMoveError, ParseError, Piles};
use thiserror::Error;

/// An action was requested for piles that allow none.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("no legal actions from piles {piles}")]
pub struct InvalidStateError {
    pub piles: Piles,
}

/// Raised while an agent plays games. Either case points to a bug.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AgentError {
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed agent file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported agent file version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
    #[error("entry {index} is invalid: {source}")]
    Entry {
        index: usize,
        #[source]
        source: ParseError,
    },
    #[error("entry {index} holds an illegal action: {source}")]
    IllegalEntry {
        index: usize,
        #[source]
        source: IllegalMoveError,
    },
}
