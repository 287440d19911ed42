use crate::board::BoardState;

/// Count the leaves of the game tree below `state`, `depth` plies deep.
/// Finished games count as a single leaf.
pub fn perf_count(state: &BoardState, depth: usize) -> usize {
    if depth == 0 || state.terminal_test() {
        1
    } else if depth == 1 {
        state.actions().len()
    } else {
        state
            .actions()
            .into_iter()
            .map(|action| perf_count(&state.apply(action), depth - 1))
            .sum()
    }
}
