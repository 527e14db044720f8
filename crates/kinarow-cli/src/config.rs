//! Game settings from the environment.

use anyhow::Context;
use kinarow_core::GameConfig;
use std::str::FromStr;

pub const WIDTH_VAR: &str = "KINAROW_WIDTH";
pub const HEIGHT_VAR: &str = "KINAROW_HEIGHT";
pub const WIN_LENGTH_VAR: &str = "KINAROW_WIN_LENGTH";
pub const PLAYERS_VAR: &str = "KINAROW_PLAYERS";

fn read<T, F>(lookup: &F, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got {:?}", name, raw)),
        None => Ok(default),
    }
}

/// Build a config from a variable lookup, falling back to the gomoku defaults.
///
/// Bounds are not checked here; the engine rejects invalid combinations.
pub fn game_config_from<F>(lookup: F) -> anyhow::Result<GameConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = GameConfig::default();
    Ok(GameConfig {
        width: read(&lookup, WIDTH_VAR, defaults.width)?,
        height: read(&lookup, HEIGHT_VAR, defaults.height)?,
        win_length: read(&lookup, WIN_LENGTH_VAR, defaults.win_length)?,
        player_count: read(&lookup, PLAYERS_VAR, defaults.player_count)?,
    })
}

pub fn game_config_from_env() -> anyhow::Result<GameConfig> {
    game_config_from(|name| std::env::var(name).ok())
}
