use crate::cell::Cell;

/// The eight lines a player can slide along.
/// `y` grows downwards, so `North` decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Every direction, in the order liberties are generated.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Direction of the straight line from `from` to `to`.
    /// Returns `None` for equal cells and for cells not on a common row,
    /// column or diagonal.
    pub fn towards(from: Cell, to: Cell) -> Option<Direction> {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;
        if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }
        let offset = (dx.signum(), dy.signum());
        Direction::ALL.into_iter().find(|direction| direction.offset() == offset)
    }
}
