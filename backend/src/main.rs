use backend::Game;
use board::{Color, Player};
use clap::Parser;
use terminal_ui::TerminalInput;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Play checkers against another person at this terminal
#[derive(Parser, Debug)]
#[command(name = "checkers")]
struct Args {
    /// Name of the player with the white pieces, who moves first
    #[arg(long, default_value = "White")]
    white: String,

    /// Name of the player with the black pieces
    #[arg(long, default_value = "Black")]
    black: String,

    /// Default log filter, used when `RUST_LOG` isn't set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut game = Game::new([
        Player::new(args.white, Color::White),
        Player::new(args.black, Color::Black),
    ])?;
    let mut input = TerminalInput::stdio();
    match game.play(&mut input) {
        Some(winner) => {
            println!("{}", game.board());
            let name = game
                .players()
                .iter()
                .find(|player| player.color == winner)
                .map_or("", |player| player.name.as_str());
            println!("{name} ({winner}) wins!");
        }
        None => println!("Game abandoned."),
    }
    Ok(())
}
