//! Monte-Carlo tree search with UCB1 selection and random playouts.

use isolation::{BoardState, Cell};
use log::debug;
use rand::Rng;

use crate::{
    config::EXPLORATION,
    error::SearchError,
    report::{Report, StopFlag},
};

mod node;
mod rollout;
mod tree;

pub use node::{Node, NodeId};
pub use rollout::rollout;
pub use tree::Tree;


pub struct MonteCarlo {
    tree: Tree,
    exploration: f32,
}

impl MonteCarlo {
    pub fn new(state: BoardState) -> Self {
        MonteCarlo {
            tree: Tree::new(state),
            exploration: EXPLORATION,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_visits(&self) -> u32 {
        self.tree.get(self.tree.root()).visits
    }

    /// Run one select-expand-simulate-backup cycle and return the current best action.
    pub fn iterate<R: Rng>(&mut self, rng: &mut R) -> Result<Cell, SearchError> {
        let leaf = self.tree.tree_policy(self.exploration, rng)?;
        let delta = rollout(self.tree.get(leaf).state, rng)?;
        self.tree.backup(leaf, delta);
        self.best_action()
    }

    /// The root action with the best average reward. No exploration bonus here.
    pub fn best_action(&self) -> Result<Cell, SearchError> {
        self.tree
            .best_child(self.tree.root(), 0.0)
            .map(|(action, _)| action)
            .ok_or(SearchError::EmptyActionSet)
    }

    /// Iterate until `stop` is raised, reporting the best action after every iteration.
    pub fn search<R: Rng>(&mut self, report: &mut dyn Report, rng: &mut R, stop: &StopFlag) -> Result<(), SearchError> {
        while !stop.is_stopped() {
            let action = self.iterate(rng)?;
            report.report(action);
        }
        debug!(
            "mcts stopped after {} iterations with {} nodes",
            self.root_visits(),
            self.tree.len()
        );
        Ok(())
    }
}
