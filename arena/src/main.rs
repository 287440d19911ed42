use std::{error::Error, sync::Arc, time::Duration};

use clap::Parser;
use isolation::{BoardState, Player};
use isolation_agent::{book::OpeningBook, Agent, Strategy};
use log::{info, LevelFilter};
use mimalloc::MiMalloc;
use rand::{rngs::StdRng, SeedableRng};

use crate::{cli::Args, harness::play_game};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod harness;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    simple_logging::log_to_stderr(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    // Fail on bad dimensions before any game starts.
    let start = BoardState::new(args.width, args.height)?;

    let book = if args.book_rounds > 0 {
        let mut rng = args.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let book = OpeningBook::build(args.book_rounds, start.width(), start.height(), &mut rng)?;
        info!("Built opening book with {} positions", book.len());
        Some(Arc::new(book))
    } else {
        None
    };

    let strategies: [Strategy; 2] = [args.first.into(), args.second.into()];
    let time_limit = Duration::from_millis(args.time_limit);
    let mut wins = [0; 2];

    for game in 0..args.games {
        // Sides swap who moves first every game.
        let order = if game % 2 == 0 { [0, 1] } else { [1, 0] };
        let agents = [Player::First, Player::Second].map(|player| {
            let side = order[player.index()];
            let seed = args.seed.map(|seed| seed + 2 * game as u64 + side as u64);
            let agent = Agent::new(player, strategies[side], seed);
            match &book {
                Some(book) => agent.with_book(Arc::clone(book)),
                None => agent,
            }
        });

        let record = play_game(agents, start, time_limit).await?;
        let side = order[record.winner.index()];
        wins[side] += 1;
        info!(
            "Game {}: {} ({}) wins by {} after {} moves",
            game + 1,
            record.winner,
            strategies[side],
            record.ending,
            record.moves.len()
        );
    }

    println!("{} games on a {}x{} board", args.games, start.width(), start.height());
    for (label, side) in [("first", 0), ("second", 1)] {
        let rate = 100.0 * wins[side] as f64 / args.games.max(1) as f64;
        println!("{label:>6} {:<12} {:>4} wins {rate:>5.1}%", strategies[side].to_string(), wins[side]);
    }
    Ok(())
}
