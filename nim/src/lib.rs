mod action;
mod error;
mod game;
mod game_result;
mod move_gen;
mod notation;
mod piles;
mod player;

pub use action::Action;
pub use error::*;
pub use game::{new_game, Game};
pub use game_result::GameResult;
pub use move_gen::{actions, available_actions};
pub use piles::{Piles, DEFAULT_PILES, MAX_PILES};
pub use player::{other_player, Player};
