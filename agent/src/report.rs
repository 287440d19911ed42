use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::Sender,
    Arc,
};

use isolation::Cell;

/// Destination for the best action found so far.
/// The last action reported before the search is cut off is the one played,
/// so implementations must never block.
pub trait Report {
    fn report(&mut self, action: Cell);
}

impl Report for Vec<Cell> {
    fn report(&mut self, action: Cell) {
        self.push(action);
    }
}

impl Report for Sender<Cell> {
    fn report(&mut self, action: Cell) {
        // A dropped receiver means nobody is waiting for the answer anymore.
        let _ = self.send(action);
    }
}

/// Shared flag used to ask a running search to wind down.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
