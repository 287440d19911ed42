use std::fmt::{self, Display};

use crate::{cell::Cell, direction::Direction, error::PlayError, player::Player};

/// Largest number of cells a board can have.
pub const MAX_CELLS: usize = u128::BITS as usize;

/// A position in a game of Isolation.
///
/// Blocked cells live in a bitset indexed by `x + y * width`, which keeps the
/// whole state `Copy`. Applying an action never touches the receiver; it hands
/// back a new, independent state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    width: usize,
    height: usize,
    blocked: u128,
    locations: [Option<Cell>; 2],
    to_move: Player,
    ply: u32,
}

impl BoardState {
    /// Create an empty board. The far corner starts out blocked.
    pub fn new(width: usize, height: usize) -> Result<Self, PlayError> {
        let fits = width
            .checked_mul(height)
            .map_or(false, |cells| cells > 0 && cells <= MAX_CELLS);
        if !fits {
            return Err(PlayError::InvalidDimensions { width, height });
        }
        let mut state = BoardState {
            width,
            height,
            blocked: 0,
            locations: [None; 2],
            to_move: Player::First,
            ply: 0,
        };
        state.block(Cell::new(width - 1, height - 1));
        Ok(state)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of moves made so far by both players.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Where the player stands, or `None` before its first move.
    pub fn location(&self, player: Player) -> Option<Cell> {
        self.locations[player.index()]
    }

    /// Whether the cell is on the board and has never been occupied.
    pub fn is_open(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height && self.blocked & self.bit(cell) == 0
    }

    fn bit(&self, cell: Cell) -> u128 {
        1 << (cell.x + cell.y * self.width)
    }

    fn block(&mut self, cell: Cell) {
        self.blocked |= self.bit(cell);
    }

    fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
            .filter(move |&cell| self.is_open(cell))
    }

    /// Open cells reachable in one slide, nearest first, direction by direction.
    fn slides(&self, from: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL.into_iter().flat_map(move |direction| {
            let mut current = from;
            std::iter::from_fn(move || {
                let next = current
                    .step(direction, self.width, self.height)
                    .filter(|&cell| self.is_open(cell))?;
                current = next;
                Some(next)
            })
        })
    }

    /// All cells a player standing at `location` could move to.
    /// Without a location every open cell is a liberty.
    pub fn liberties(&self, location: Option<Cell>) -> Vec<Cell> {
        match location {
            None => self.open_cells().collect(),
            Some(from) => self.slides(from).collect(),
        }
    }

    /// Same as `liberties(location).len()` without building the list.
    pub fn liberty_count(&self, location: Option<Cell>) -> usize {
        match location {
            None => self.open_cells().count(),
            Some(from) => self.slides(from).count(),
        }
    }

    fn has_liberties(&self, player: Player) -> bool {
        match self.location(player) {
            None => self.open_cells().next().is_some(),
            // A slide exists exactly when a neighbouring cell is open.
            Some(from) => Direction::ALL.into_iter().any(|direction| {
                from.step(direction, self.width, self.height)
                    .map_or(false, |cell| self.is_open(cell))
            }),
        }
    }

    /// Legal actions for the player to move.
    pub fn actions(&self) -> Vec<Cell> {
        self.liberties(self.location(self.to_move))
    }

    /// Check whether the player to move may move to `action`.
    pub fn is_legal(&self, action: Cell) -> bool {
        if !self.is_open(action) {
            return false;
        }
        let from = match self.location(self.to_move) {
            Some(from) => from,
            None => return true,
        };
        let direction = match Direction::towards(from, action) {
            Some(direction) => direction,
            None => return false,
        };
        let mut current = from;
        while let Some(next) = current.step(direction, self.width, self.height) {
            if !self.is_open(next) {
                return false;
            }
            if next == action {
                return true;
            }
            current = next;
        }
        false
    }

    /// The state after the player to move goes to `action`.
    pub fn result(&self, action: Cell) -> Result<BoardState, PlayError> {
        if !self.is_legal(action) {
            return Err(PlayError::IllegalMove(action));
        }
        Ok(self.apply(action))
    }

    pub(crate) fn apply(&self, action: Cell) -> BoardState {
        let mut next = *self;
        next.block(action);
        next.locations[self.to_move.index()] = Some(action);
        next.to_move = self.to_move.next();
        next.ply += 1;
        next
    }

    /// The game is over as soon as either player is out of moves,
    /// even if it is not that player's turn.
    pub fn terminal_test(&self) -> bool {
        !self.has_liberties(self.to_move) || !self.has_liberties(self.to_move.next())
    }

    /// +1 if `player` has won, -1 if it has lost.
    pub fn utility(&self, player: Player) -> Result<i32, PlayError> {
        if !self.terminal_test() {
            return Err(PlayError::UndefinedUtility);
        }
        // The player to move loses when stuck; otherwise only its opponent is stuck.
        let active_wins = self.has_liberties(self.to_move);
        Ok(if (player == self.to_move) == active_wins { 1 } else { -1 })
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| {
                    let cell = Cell::new(x, y);
                    if self.location(Player::First) == Some(cell) {
                        '1'
                    } else if self.location(Player::Second) == Some(cell) {
                        '2'
                    } else if self.is_open(cell) {
                        '.'
                    } else {
                        'X'
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
