mod board;
mod cell;
mod direction;
mod error;
mod perft;
mod player;

pub use board::{BoardState, MAX_CELLS};
pub use cell::{Action, Cell};
pub use direction::Direction;
pub use error::PlayError;
pub use perft::perf_count;
pub use player::Player;
