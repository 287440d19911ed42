use std::{error::Error, fmt::Display, time::Duration};

use isolation::{BoardState, Cell, Player};
use isolation_agent::{Agent, Report, SearchError, StopFlag};
use log::{debug, warn};
use tokio::{
    sync::watch,
    task::{spawn_blocking, JoinError},
    time::timeout,
};

/// Keeps only the most recent report.
struct Latest(watch::Sender<Option<Cell>>);

impl Report for Latest {
    fn report(&mut self, action: Cell) {
        // Fails only once the harness stopped listening.
        let _ = self.0.send(Some(action));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The loser ran out of moves.
    Isolated,
    /// The loser had reported nothing when its time ran out.
    Timeout,
    IllegalMove(Cell),
    SearchFailed(SearchError),
}

impl Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::Isolated => write!(f, "isolation"),
            Ending::Timeout => write!(f, "timeout"),
            Ending::IllegalMove(action) => write!(f, "illegal move {action}"),
            Ending::SearchFailed(err) => write!(f, "failed search ({err})"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameRecord {
    pub winner: Player,
    pub ending: Ending,
    pub moves: Vec<Cell>,
}

/// Let `agent` think about `state` for `time_limit` and take whatever it last reported.
///
/// The search runs on a blocking thread. When the deadline passes the stop
/// flag is raised and anything reported after that point is ignored.
/// The agent is handed back for its next turn.
pub async fn request_action(
    mut agent: Agent,
    state: BoardState,
    time_limit: Duration,
) -> Result<(Agent, Result<Option<Cell>, SearchError>), JoinError> {
    let stop = StopFlag::new();
    let (tx, rx) = watch::channel(None);
    let mut handle = {
        let stop = stop.clone();
        spawn_blocking(move || {
            let mut report = Latest(tx);
            let outcome = agent.search(&state, &mut report, &stop);
            (agent, outcome)
        })
    };

    let (joined, action) = match timeout(time_limit, &mut handle).await {
        // Finished early, e.g. a random or book move.
        Ok(joined) => (joined?, *rx.borrow()),
        Err(_) => {
            stop.stop();
            let action = *rx.borrow();
            (handle.await?, action)
        }
    };
    let (agent, outcome) = joined;
    Ok((agent, outcome.map(|()| action)))
}

/// Play from `start` to the end of the game.
/// `agents[0]` is the agent whose turn it is in `start`.
pub async fn play_game(
    agents: [Agent; 2],
    start: BoardState,
    time_limit: Duration,
) -> Result<GameRecord, Box<dyn Error>> {
    let [mut mover, mut waiting] = agents;
    let mut state = start;
    let mut moves = Vec::new();

    while !state.terminal_test() {
        let player = state.to_move();
        let strategy = mover.strategy();
        let (agent, outcome) = request_action(mover, state, time_limit).await?;
        mover = waiting;
        waiting = agent;

        let forfeit = |ending, moves| GameRecord {
            winner: player.next(),
            ending,
            moves,
        };
        let action = match outcome {
            Ok(Some(action)) => action,
            Ok(None) => {
                warn!("{player} ({strategy}) reported no move within {time_limit:?}");
                return Ok(forfeit(Ending::Timeout, moves));
            }
            Err(err) => {
                warn!("{player} ({strategy}) search failed: {err}");
                return Ok(forfeit(Ending::SearchFailed(err), moves));
            }
        };
        state = match state.result(action) {
            Ok(next) => next,
            Err(err) => {
                warn!("{player} ({strategy}): {err}");
                return Ok(forfeit(Ending::IllegalMove(action), moves));
            }
        };
        moves.push(action);
        debug!("{player} plays {action}\n{state}");
    }

    let winner = if state.utility(Player::First)? > 0 {
        Player::First
    } else {
        Player::Second
    };
    Ok(GameRecord {
        winner,
        ending: Ending::Isolated,
        moves,
    })
}
