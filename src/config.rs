//! Runner configuration: CLI flags, then environment, then defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::{builtin_specs, CardSpec, Deck};
use crate::types::DEFAULT_FLIP_DELAY_MS;

pub const ENV_FLIP_DELAY: &str = "MEMORY_FLIP_DELAY_MS";
pub const ENV_SEED: &str = "MEMORY_SEED";
pub const ENV_DECK_PATH: &str = "MEMORY_DECK_PATH";
pub const ENV_LOG_PATH: &str = "MEMORY_LOG_PATH";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tui-memory")]
#[command(about = "Terminal memory matching game")]
pub struct Cli {
    /// Delay before a pending pair is evaluated, in milliseconds (350..=3000)
    #[arg(long, value_name = "MS")]
    pub flip_delay: Option<String>,

    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u32>,

    /// JSON deck file: a list of {"name": .., "img": ..} entries
    #[arg(long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Write logs to this file (the terminal is busy drawing the board)
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,
}

/// Resolved runner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raw text; the engine validates and clamps it.
    pub flip_delay: String,
    pub seed: u32,
    pub deck_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli_and_env(cli: Cli) -> Result<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve with an injectable environment lookup.
    pub fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| {
            env(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let flip_delay = cli
            .flip_delay
            .or_else(|| env(ENV_FLIP_DELAY))
            .unwrap_or_else(|| DEFAULT_FLIP_DELAY_MS.to_string());

        let seed = match cli.seed {
            Some(seed) => seed,
            None => match env(ENV_SEED) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("{ENV_SEED}={raw:?} is not a valid seed"))?,
                None => seed_from_clock(),
            },
        };

        let deck_path = cli.deck.or_else(|| env(ENV_DECK_PATH).map(PathBuf::from));
        let log_path = cli
            .log_path
            .or_else(|| env(ENV_LOG_PATH).map(PathBuf::from));

        Ok(Self {
            flip_delay,
            seed,
            deck_path,
            log_path,
        })
    }

    /// The configured deck file, or the built-in languages.
    pub fn load_deck(&self) -> Result<Deck> {
        let specs = match &self.deck_path {
            Some(path) => read_deck_specs(path)?,
            None => builtin_specs(),
        };
        Deck::from_specs(&specs).context("building deck")
    }
}

pub fn read_deck_specs(path: &Path) -> Result<Vec<CardSpec>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading deck file {}", path.display()))?;
    parse_deck_specs(&text)
        .with_context(|| format!("parsing deck file {}", path.display()))
}

pub fn parse_deck_specs(text: &str) -> Result<Vec<CardSpec>> {
    Ok(serde_json::from_str(text)?)
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
