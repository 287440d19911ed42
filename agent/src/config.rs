// search
pub const EXPLORATION: f32 = 1.4;
pub const START_DEPTH: u32 = 5;
pub const RANDOM_OPENING_PLIES: u32 = 2;

// opening book
pub const BOOK_DEPTH: u32 = 2;
pub const BOOK_ROUNDS: usize = 10;
