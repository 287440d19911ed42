use std::{error::Error, fmt::Display};

use isolation::{BoardState, PlayError, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// There was nothing to choose from, e.g. the game was already over.
    EmptyActionSet,
    /// The stop flag was raised before the search finished.
    Cancelled,
    /// Asked to search for `expected` while it is `to_move`'s turn.
    WrongPlayer { expected: Player, to_move: Player },
    Play(PlayError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::EmptyActionSet => write!(f, "there are no actions to choose from"),
            SearchError::Cancelled => write!(f, "search was stopped before it finished"),
            SearchError::WrongPlayer { expected, to_move } => {
                write!(f, "cannot search for {expected} while it is {to_move}'s turn")
            }
            SearchError::Play(play_error) => play_error.fmt(f),
        }
    }
}

impl Error for SearchError {}

impl From<PlayError> for SearchError {
    fn from(e: PlayError) -> Self {
        SearchError::Play(e)
    }
}

/// Fail unless `player` is the one to move in `state`.
pub(crate) fn ensure_to_move(state: &BoardState, player: Player) -> Result<(), SearchError> {
    if state.to_move() == player {
        Ok(())
    } else {
        Err(SearchError::WrongPlayer {
            expected: player,
            to_move: state.to_move(),
        })
    }
}
