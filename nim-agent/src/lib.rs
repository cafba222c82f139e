pub mod config;
pub mod persist;
pub mod pit;
pub mod self_play;

mod agent;
mod error;
mod policy;
mod value_store;

pub use agent::Agent;
pub use error::*;
pub use policy::{Policy, RandomPolicy};
pub use self_play::{train, train_agent, train_parallel, train_with};
pub use value_store::ValueStore;
