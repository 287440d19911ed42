use clap::{ArgEnum, Parser};
use isolation_agent::{config::BOOK_ROUNDS, Strategy};

/// Play a series of Isolation games between two search strategies
#[derive(Parser)]
pub struct Args {
    /// Board width
    #[clap(long, default_value_t = 7)]
    pub width: usize,
    /// Board height
    #[clap(long, default_value_t = 7)]
    pub height: usize,
    /// Number of games to play
    #[clap(short, long, default_value_t = 10)]
    pub games: usize,
    /// Thinking time per move in milliseconds
    #[clap(short, long, default_value_t = 150)]
    pub time_limit: u64,
    /// Strategy that moves first in the first game
    #[clap(long, arg_enum, default_value = "alpha-beta")]
    pub first: StrategyArg,
    /// Strategy that moves second in the first game
    #[clap(long, arg_enum, default_value = "monte-carlo")]
    pub second: StrategyArg,
    /// Seed for reproducible matches
    #[clap(long)]
    pub seed: Option<u64>,
    /// Random openings sampled for the opening book, 0 disables it
    #[clap(long, default_value_t = BOOK_ROUNDS)]
    pub book_rounds: usize,
    /// Log every completed search depth
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ArgEnum)]
pub enum StrategyArg {
    AlphaBeta,
    MonteCarlo,
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::AlphaBeta => Strategy::AlphaBeta,
            StrategyArg::MonteCarlo => Strategy::MonteCarlo,
            StrategyArg::Random => Strategy::Random,
        }
    }
}
