//! Search tree stored in an arena.
//!
//! Children are owned through the arena and point back at their parent by
//! index, so walking up for backpropagation needs no shared ownership.

use isolation::{BoardState, Cell, PlayError};
use rand::Rng;

use super::node::{Node, NodeId};
use crate::error::SearchError;

#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(state: BoardState) -> Self {
        Tree {
            nodes: vec![Node::new(state, None)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Move `action` from the node's untried actions into a new child.
    pub fn expand(&mut self, parent: NodeId, action: Cell) -> Result<NodeId, SearchError> {
        let index = self
            .get(parent)
            .untried
            .iter()
            .position(|&a| a == action)
            .ok_or(PlayError::IllegalMove(action))?;
        self.expand_untried(parent, index)
    }

    /// Expand the untried action at `index`.
    fn expand_untried(&mut self, parent: NodeId, index: usize) -> Result<NodeId, SearchError> {
        let node = self.get_mut(parent);
        let action = node.untried.swap_remove(index);
        let state = node.state.result(action)?;

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(state, Some(parent)));
        self.get_mut(parent).children.push((action, id));
        Ok(id)
    }

    /// Walk down from the root and return the node to simulate from.
    ///
    /// The first node with untried actions gets one of them, picked at random,
    /// expanded, and the new child is returned. Fully expanded nodes hand over
    /// to their best UCB1 child. A terminal node is returned as it is.
    pub fn tree_policy<R: Rng>(&mut self, exploration: f32, rng: &mut R) -> Result<NodeId, SearchError> {
        let mut current = self.root();
        while !self.get(current).terminal {
            let untried = self.get(current).untried.len();
            if untried > 0 {
                return self.expand_untried(current, rng.gen_range(0..untried));
            }
            let (_, child) = self
                .best_child(current, exploration)
                .ok_or(SearchError::EmptyActionSet)?;
            current = child;
        }
        Ok(current)
    }

    /// Child with the highest UCB1 score; the first one wins ties.
    /// With `exploration` at zero this is the child with the best average reward.
    pub fn best_child(&self, id: NodeId, exploration: f32) -> Option<(Cell, NodeId)> {
        let node = self.get(id);
        let mut best: Option<(f32, (Cell, NodeId))> = None;
        for &(action, child) in &node.children {
            let score = self.get(child).upper_confidence_bound(node.visits, exploration);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, (action, child)));
            }
        }
        best.map(|(_, choice)| choice)
    }

    /// Add `delta` to the leaf and every ancestor up to the root,
    /// switching its sign at each level.
    pub fn backup(&mut self, leaf: NodeId, mut delta: f32) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.reward += delta;
            delta = -delta;
            current = node.parent;
        }
    }
}
