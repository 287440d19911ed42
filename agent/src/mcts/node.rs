use isolation::{BoardState, Cell};

/// Index of a node in the search tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug)]
pub struct Node {
    pub state: BoardState,
    pub terminal: bool,
    pub parent: Option<NodeId>,
    /// Actions not expanded into children yet.
    pub untried: Vec<Cell>,
    pub children: Vec<(Cell, NodeId)>,
    pub visits: u32,
    /// Sum of rewards, from the point of view of the player who moved into this node.
    pub reward: f32,
}

impl Node {
    pub fn new(state: BoardState, parent: Option<NodeId>) -> Self {
        let terminal = state.terminal_test();
        Node {
            state,
            terminal,
            parent,
            untried: if terminal { Vec::new() } else { state.actions() },
            children: Vec::new(),
            visits: 0,
            reward: 0.0,
        }
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Average reward. Meaningless before the first visit.
    pub fn mean_reward(&self) -> f32 {
        self.reward / self.visits as f32
    }

    /// UCB1 score of this node as the child of a node visited `parent_visits` times.
    pub fn upper_confidence_bound(&self, parent_visits: u32, exploration: f32) -> f32 {
        // U = Q / N + c * sqrt(2 * ln(N_parent) / N)
        self.mean_reward() + exploration * (2.0 * (parent_visits as f32).ln() / self.visits as f32).sqrt()
    }
}
