//! Kinarow terminal game.

use kinarow_core::GameEngine;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod config;
mod render;
mod session;

use command::Command;
use session::{Reply, Session};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so the board stays readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = config::game_config_from_env()?;
    let engine = GameEngine::new(config)?;
    info!(
        width = config.width,
        height = config.height,
        win_length = config.win_length,
        players = config.player_count,
        "Starting Kinarow..."
    );

    let mut session = Session::new(engine);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "{} in a row on a {}x{} board. Type `help` for commands.",
        config.win_length, config.width, config.height
    );
    println!("{}", session.describe());

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.handle(command) {
            Ok(Reply::Text(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Err(e) => {
                warn!(error = %e, "command failed");
                println!("{}", e);
            }
        }
    }

    info!(moves = session.engine().history().len(), "Goodbye");
    Ok(())
}
