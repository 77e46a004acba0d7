//! Self-play driver: the engine plays both sides of a round.
//!
//! A minimal example of the external-caller contract, and a live check of
//! the no-loss guarantee (perfect play against itself always draws).

use anyhow::Result;
use clap::Parser;
use oxo::{Outcome, Player, Round, SearchEngine};

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(version, about = "Play the minimax engine against itself", long_about = None)]
struct Cli {
    /// Which mark opens the round (X or O)
    #[arg(long, default_value = "X")]
    first: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let first = match cli.first.as_str() {
        "X" | "x" => Player::X,
        "O" | "o" => Player::O,
        other => anyhow::bail!("unknown player '{other}' (expected 'X' or 'O')"),
    };

    let mut round = Round::new(first);
    let mut ply = 0;

    while round.outcome().is_none() {
        let mover = round.to_move();
        let mv = SearchEngine::select_move(round.board(), mover)?;
        round.play(mv)?;
        ply += 1;
        println!("ply {ply}: {mover:?} plays {mv}");
        println!("{}\n", round.board());
    }

    match round.outcome() {
        Some(Outcome::Win(player)) => println!("{player:?} wins"),
        Some(Outcome::Draw) => println!("draw"),
        None => unreachable!("loop exits only once the outcome is set"),
    }

    Ok(())
}
