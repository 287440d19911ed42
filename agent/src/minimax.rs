//! Plain depth-limited minimax without pruning.
//!
//! Visits every node up to the depth limit, which makes it a slow but
//! obviously correct reference for the alpha-beta search.

use isolation::{BoardState, Cell, Player};

use crate::{
    error::{ensure_to_move, SearchError},
    eval::score,
};

/// Best action for `player` (who must be the player to move) and its value.
/// Ties go to the action generated first.
pub fn decision(state: &BoardState, depth: u32, player: Player) -> Result<(Cell, i32), SearchError> {
    ensure_to_move(state, player)?;
    let mut best: Option<(Cell, i32)> = None;
    for action in state.actions() {
        let value = min_value(&state.result(action)?, depth.saturating_sub(1), player)?;
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((action, value));
        }
    }
    best.ok_or(SearchError::EmptyActionSet)
}

fn leaf_value(state: &BoardState, depth: u32, player: Player) -> Result<Option<i32>, SearchError> {
    if state.terminal_test() {
        Ok(Some(state.utility(player)?))
    } else if depth == 0 {
        Ok(Some(score(state, player)))
    } else {
        Ok(None)
    }
}

fn min_value(state: &BoardState, depth: u32, player: Player) -> Result<i32, SearchError> {
    if let Some(value) = leaf_value(state, depth, player)? {
        return Ok(value);
    }
    let mut value = i32::MAX;
    for action in state.actions() {
        value = value.min(max_value(&state.result(action)?, depth - 1, player)?);
    }
    Ok(value)
}

fn max_value(state: &BoardState, depth: u32, player: Player) -> Result<i32, SearchError> {
    if let Some(value) = leaf_value(state, depth, player)? {
        return Ok(value);
    }
    let mut value = i32::MIN;
    for action in state.actions() {
        value = value.max(min_value(&state.result(action)?, depth - 1, player)?);
    }
    Ok(value)
}
