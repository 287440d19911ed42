pub mod agent;
pub mod alphabeta;
pub mod book;
pub mod config;
pub mod error;
pub mod eval;
pub mod mcts;
pub mod minimax;
pub mod report;

pub use agent::{Agent, Strategy};
pub use error::SearchError;
pub use report::{Report, StopFlag};
