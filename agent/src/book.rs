//! Opening book for the first plies, where search has little to go on.

use std::collections::{BTreeMap, HashMap};

use isolation::{BoardState, Cell};
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{config::BOOK_DEPTH, error::SearchError, mcts::rollout};

#[derive(Clone, Debug, Default)]
pub struct OpeningBook {
    table: HashMap<BoardState, Cell>,
}

impl OpeningBook {
    /// Sample `rounds` random openings on an empty `width` by `height` board.
    ///
    /// Each round plays random actions for `BOOK_DEPTH` plies, scores the
    /// position reached with one random playout and credits that reward to
    /// every (state, action) pair on the way, flipping its sign at every ply.
    pub fn build<R: Rng>(rounds: usize, width: usize, height: usize, rng: &mut R) -> Result<Self, SearchError> {
        let root = BoardState::new(width, height)?;
        let mut rewards: HashMap<BoardState, BTreeMap<Cell, f32>> = HashMap::new();

        for _ in 0..rounds {
            let mut path = Vec::new();
            let mut state = root;
            for _ in 0..BOOK_DEPTH {
                if state.terminal_test() {
                    break;
                }
                let action = *state.actions().choose(rng).ok_or(SearchError::EmptyActionSet)?;
                path.push((state, action));
                state = state.result(action)?;
            }

            let mut reward = rollout(state, rng)?;
            for (state, action) in path.into_iter().rev() {
                *rewards.entry(state).or_default().entry(action).or_default() += reward;
                reward = -reward;
            }
        }

        let table: HashMap<_, _> = rewards
            .into_iter()
            .filter_map(|(state, actions)| {
                // BTreeMap iterates in cell order, so ties keep the smallest cell.
                let mut best: Option<(Cell, f32)> = None;
                for (action, reward) in actions {
                    if best.map_or(true, |(_, best_reward)| reward > best_reward) {
                        best = Some((action, reward));
                    }
                }
                best.map(|(action, _)| (state, action))
            })
            .collect();
        debug!("opening book has {} positions after {rounds} rounds", table.len());
        Ok(OpeningBook { table })
    }

    pub fn get(&self, state: &BoardState) -> Option<Cell> {
        self.table.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoardState, &Cell)> {
        self.table.iter()
    }
}
