use thiserror::Error;

/// Reasons a move cannot be played.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalMoveError {
    #[error("pile {pile} does not exist (there are {piles} piles)")]
    PileOutOfRange { pile: usize, piles: usize },
    #[error("cannot take 0 objects from a pile")]
    ZeroCount,
    #[error("cannot take {count} from pile {pile} which only holds {available}")]
    NotEnough { pile: usize, count: u32, available: u32 },
    #[error("the game is already over")]
    GameOver,
}

/// Failures when building piles or actions from numbers or text.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("could not parse number {0:?}")]
    InvalidNumber(String),
    #[error("missing count in action {0:?}")]
    MissingCount(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error("an action must take at least one object")]
    ZeroCount,
    #[error("at most {max} piles are supported, got {got}")]
    TooManyPiles { max: usize, got: usize },
}

/// Failure while replaying a move list.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}
