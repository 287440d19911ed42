use std::{error::Error, fmt::Display};

use crate::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    IllegalMove(Cell),
    UndefinedUtility,
    InvalidDimensions { width: usize, height: usize },
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::IllegalMove(cell) => write!(f, "moving to {cell} is not a legal action"),
            PlayError::UndefinedUtility => write!(f, "utility is only defined for terminal states"),
            PlayError::InvalidDimensions { width, height } => write!(
                f,
                "a {width}x{height} board is not supported (both sides must be non-zero and at most {} cells in \
                 total)",
                crate::board::MAX_CELLS
            ),
        }
    }
}

impl Error for PlayError {}
