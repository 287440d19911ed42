use isolation::{BoardState, Player};

/// Mobility heuristic: how many more moves `player` has than its opponent.
pub fn score(state: &BoardState, player: Player) -> i32 {
    let own = state.liberty_count(state.location(player));
    let opponent = state.liberty_count(state.location(player.next()));
    own as i32 - opponent as i32
}
