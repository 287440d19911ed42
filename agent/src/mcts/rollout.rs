use isolation::BoardState;
use rand::{seq::SliceRandom, Rng};

use crate::error::SearchError;

/// Play uniformly random moves until the game ends.
///
/// Returns +1 if the player to move in `state` lost and -1 if it won, which is
/// the reward for the player who moved into `state`.
pub fn rollout<R: Rng>(mut state: BoardState, rng: &mut R) -> Result<f32, SearchError> {
    let player = state.to_move();
    while !state.terminal_test() {
        let action = *state.actions().choose(rng).ok_or(SearchError::EmptyActionSet)?;
        state = state.result(action)?;
    }
    Ok(if state.utility(player)? < 0 { 1.0 } else { -1.0 })
}
