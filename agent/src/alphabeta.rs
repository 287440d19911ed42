//! Depth-limited minimax with alpha-beta pruning, run under iterative deepening.
//!
//! Values are always from the perspective of the searching player: terminal
//! states score their utility (+1/-1) and states at the depth limit score the
//! mobility heuristic. Pruning is fail-soft, so a cut node returns the value it
//! had reached rather than the bound that caused the cut.

use isolation::{BoardState, Cell, Player};
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{
    book::OpeningBook,
    config::{RANDOM_OPENING_PLIES, START_DEPTH},
    error::{ensure_to_move, SearchError},
    eval::score,
    report::{Report, StopFlag},
};

/// Outcome of a single fixed-depth search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub action: Cell,
    pub value: i32,
    pub depth: u32,
    /// States entered, root included.
    pub nodes: u64,
    /// Terminal or depth-limit evaluations.
    pub evaluations: u64,
}

pub struct AlphaBeta {
    player: Player,
    stop: StopFlag,
    nodes: u64,
    evaluations: u64,
}

impl AlphaBeta {
    pub fn new(player: Player) -> Self {
        AlphaBeta {
            player,
            stop: StopFlag::default(),
            nodes: 0,
            evaluations: 0,
        }
    }

    /// Abandon the search with `SearchError::Cancelled` once `stop` is raised.
    #[must_use]
    pub fn with_stop(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    /// Find the best action at the root, searching `depth` plies deep.
    pub fn search_depth(&mut self, state: &BoardState, depth: u32) -> Result<SearchResult, SearchError> {
        ensure_to_move(state, self.player)?;
        self.nodes = 1;
        self.evaluations = 0;

        let mut alpha = i32::MIN;
        let mut best: Option<(Cell, i32)> = None;
        // No cutoffs at the root: every action gets an exact comparison.
        for action in state.actions() {
            let value = self.min_value(&state.result(action)?, depth.saturating_sub(1), alpha, i32::MAX)?;
            alpha = alpha.max(value);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }

        let (action, value) = best.ok_or(SearchError::EmptyActionSet)?;
        Ok(SearchResult {
            action,
            value,
            depth,
            nodes: self.nodes,
            evaluations: self.evaluations,
        })
    }

    /// Report a move for every completed depth, starting at `START_DEPTH`,
    /// until the stop flag is raised or the depth covers every remaining ply.
    /// On the opening plies the move comes from the book when it knows the
    /// position, and is random otherwise.
    pub fn iterative_deepening<R: Rng>(
        &mut self,
        state: &BoardState,
        report: &mut dyn Report,
        rng: &mut R,
        book: Option<&OpeningBook>,
    ) -> Result<(), SearchError> {
        ensure_to_move(state, self.player)?;
        if state.ply() < RANDOM_OPENING_PLIES {
            let action = match book.and_then(|book| book.get(state)).filter(|&a| state.is_legal(a)) {
                Some(action) => action,
                None => *state.actions().choose(rng).ok_or(SearchError::EmptyActionSet)?,
            };
            report.report(action);
            return Ok(());
        }

        // Every ply blocks an open cell, so no game lasts longer than this.
        let remaining = state.liberty_count(None) as u32;
        let mut depth = START_DEPTH;
        loop {
            if self.stop.is_stopped() {
                return Ok(());
            }
            match self.search_depth(state, depth) {
                Ok(result) => {
                    debug!(
                        "depth {} best {} value {} nodes {}",
                        result.depth, result.action, result.value, result.nodes
                    );
                    report.report(result.action);
                    if depth >= remaining {
                        return Ok(());
                    }
                }
                // The unfinished depth is thrown away.
                Err(SearchError::Cancelled) => return Ok(()),
                Err(err) => return Err(err),
            }
            depth += 1;
        }
    }

    fn enter(&mut self) -> Result<(), SearchError> {
        if self.stop.is_stopped() {
            return Err(SearchError::Cancelled);
        }
        self.nodes += 1;
        Ok(())
    }

    fn leaf_value(&mut self, state: &BoardState, depth: u32) -> Result<Option<i32>, SearchError> {
        let value = if state.terminal_test() {
            state.utility(self.player)?
        } else if depth == 0 {
            score(state, self.player)
        } else {
            return Ok(None);
        };
        self.evaluations += 1;
        Ok(Some(value))
    }

    fn max_value(&mut self, state: &BoardState, depth: u32, mut alpha: i32, beta: i32) -> Result<i32, SearchError> {
        self.enter()?;
        if let Some(value) = self.leaf_value(state, depth)? {
            return Ok(value);
        }
        let mut value = i32::MIN;
        for action in state.actions() {
            value = value.max(self.min_value(&state.result(action)?, depth - 1, alpha, beta)?);
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_value(&mut self, state: &BoardState, depth: u32, alpha: i32, mut beta: i32) -> Result<i32, SearchError> {
        self.enter()?;
        if let Some(value) = self.leaf_value(state, depth)? {
            return Ok(value);
        }
        let mut value = i32::MAX;
        for action in state.actions() {
            value = value.min(self.max_value(&state.result(action)?, depth - 1, alpha, beta)?);
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}
