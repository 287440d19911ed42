use std::fmt::Display;

use crate::direction::Direction;

/// An action is the cell the active player moves to.
pub type Action = Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Cell { x, y }
    }

    /// Get the neighbouring cell in the given direction, if it is on the board.
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        let x = shift(self.x, dx).filter(|&x| x < width)?;
        let y = shift(self.y, dy).filter(|&y| y < height)?;
        Some(Cell { x, y })
    }
}

fn shift(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
