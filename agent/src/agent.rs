use std::{fmt::Display, sync::Arc};

use isolation::{BoardState, Player};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    alphabeta::AlphaBeta,
    book::OpeningBook,
    error::{ensure_to_move, SearchError},
    mcts::MonteCarlo,
    report::{Report, StopFlag},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    AlphaBeta,
    MonteCarlo,
    Random,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::MonteCarlo => "monte-carlo",
            Strategy::Random => "random",
        };
        write!(f, "{name}")
    }
}

/// Chooses moves for one side of a game.
pub struct Agent {
    player: Player,
    strategy: Strategy,
    rng: StdRng,
    book: Option<Arc<OpeningBook>>,
}

impl Agent {
    /// Without a seed the agent draws its randomness from the OS.
    pub fn new(player: Player, strategy: Strategy, seed: Option<u64>) -> Self {
        Agent {
            player,
            strategy,
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            book: None,
        }
    }

    #[must_use]
    pub fn with_book(mut self, book: Arc<OpeningBook>) -> Self {
        self.book = Some(book);
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Search `state` and report actions until `stop` is raised.
    /// Random play reports once and returns straight away.
    /// It has to be this agent's turn in `state`.
    pub fn search(&mut self, state: &BoardState, report: &mut dyn Report, stop: &StopFlag) -> Result<(), SearchError> {
        if state.terminal_test() {
            return Err(SearchError::EmptyActionSet);
        }
        ensure_to_move(state, self.player)?;
        match self.strategy {
            Strategy::AlphaBeta => AlphaBeta::new(self.player).with_stop(stop.clone()).iterative_deepening(
                state,
                report,
                &mut self.rng,
                self.book.as_deref(),
            ),
            Strategy::MonteCarlo => MonteCarlo::new(*state).search(report, &mut self.rng, stop),
            Strategy::Random => {
                let action = *state
                    .actions()
                    .choose(&mut self.rng)
                    .ok_or(SearchError::EmptyActionSet)?;
                report.report(action);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use isolation::{BoardState, Cell, Player};

    use super::{Agent, Strategy};
    use crate::{error::SearchError, report::StopFlag};

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::AlphaBeta.to_string(), "alpha-beta");
        assert_eq!(Strategy::MonteCarlo.to_string(), "monte-carlo");
        assert_eq!(Strategy::Random.to_string(), "random");
    }

    #[test]
    fn terminal_state_is_rejected() -> Result<(), SearchError> {
        let mut state = BoardState::new(3, 2)?;
        while !state.terminal_test() {
            state = state.result(state.actions()[0])?;
        }
        let stop = StopFlag::new();
        for strategy in [Strategy::AlphaBeta, Strategy::MonteCarlo, Strategy::Random] {
            let mut agent = Agent::new(state.to_move(), strategy, Some(0));
            let mut reports: Vec<Cell> = Vec::new();
            assert_eq!(
                agent.search(&state, &mut reports, &stop),
                Err(SearchError::EmptyActionSet)
            );
            assert!(reports.is_empty());
        }
        Ok(())
    }

    #[test]
    fn refuses_to_play_out_of_turn() -> Result<(), SearchError> {
        // First to move: (1, 2) isolates the opponent, (0, 0) isolates itself.
        let moves = [(1, 0), (2, 0), (1, 1), (2, 2), (0, 1), (0, 2)];
        let mut state = BoardState::new(4, 3)?;
        for (x, y) in moves {
            state = state.result(Cell::new(x, y))?;
        }
        let stop = StopFlag::new();
        for strategy in [Strategy::AlphaBeta, Strategy::MonteCarlo, Strategy::Random] {
            let mut agent = Agent::new(Player::Second, strategy, Some(3));
            let mut reports: Vec<Cell> = Vec::new();
            assert_eq!(
                agent.search(&state, &mut reports, &stop),
                Err(SearchError::WrongPlayer {
                    expected: Player::Second,
                    to_move: Player::First,
                })
            );
            assert!(reports.is_empty());
        }

        let mut reports = Vec::new();
        Agent::new(Player::First, Strategy::AlphaBeta, Some(3)).search(&state, &mut reports, &stop)?;
        assert_eq!(reports, vec![Cell::new(1, 2)]);
        Ok(())
    }

    #[test]
    fn random_reports_a_legal_action() -> Result<(), SearchError> {
        let state = BoardState::new(5, 5)?.result(Cell::new(2, 2))?;
        let mut agent = Agent::new(Player::Second, Strategy::Random, Some(1));
        let mut reports = Vec::new();
        agent.search(&state, &mut reports, &StopFlag::new())?;
        assert_eq!(reports.len(), 1);
        assert!(state.is_legal(reports[0]));
        Ok(())
    }

    #[test]
    fn seeded_agents_agree() -> Result<(), SearchError> {
        let state = BoardState::new(7, 7)?;
        let mut first = Vec::new();
        let mut second = Vec::new();
        Agent::new(Player::First, Strategy::AlphaBeta, Some(9)).search(&state, &mut first, &StopFlag::new())?;
        Agent::new(Player::First, Strategy::AlphaBeta, Some(9)).search(&state, &mut second, &StopFlag::new())?;
        assert_eq!(first, second);
        Ok(())
    }
}
