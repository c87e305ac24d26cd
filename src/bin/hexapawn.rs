//! Play Hexapawn in the terminal against a random agent.
//!
//! Moves are typed as `<Col><Row>-<Col><Row>`, e.g. `A3-A2`.
//! Set `RUST_LOG=debug` to see engine logging on stderr.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use hexapawn::{Agent, Error, GameState, Move, Player, RandomAgent, Result};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Hexapawn - human vs random agent
#[derive(Parser, Debug)]
#[command(name = "hexapawn")]
#[command(about = "Play Hexapawn against a random agent", long_about = None)]
#[command(version)]
struct Cli {
    /// Side the human plays (X moves first)
    #[arg(long, value_enum, default_value = "x")]
    human: Side,

    /// Seed for the agent
    #[arg(long, default_value = "42")]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let human: Player = cli.human.into();
    let mut bot = RandomAgent::seeded(cli.seed);
    debug!(%human, seed = cli.seed, "starting game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = GameState::new_game();

    while !game.is_over() {
        print!("{}", game.board());

        if game.next_player() == human {
            match read_human_move(&game, &mut lines)? {
                Some(next) => game = next,
                None => return Ok(()), // stdin closed
            }
        } else {
            let player = game.next_player();
            let mv = bot.select_move(&game).ok_or(Error::AgentNoMove { player })?;
            game = game.try_apply_move(mv)?;
            println!("Bot moved...");
        }
    }

    print!("{}", game.board());
    match game.winner() {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("It's a draw."),
    }
    Ok(())
}

/// Prompt until the human enters a legal move.
///
/// Returns `None` at end of input.
fn read_human_move(
    game: &GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<GameState>> {
    loop {
        print!("Human >> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        match line.parse::<Move>().and_then(|mv| game.try_apply_move(mv)) {
            Ok(next) => return Ok(Some(next)),
            Err(err) => {
                warn!(input = line.trim(), %err, "rejected move");
                println!("{err}");
            }
        }
    }
}
