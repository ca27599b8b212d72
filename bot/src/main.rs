use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use minebot_core::{DEFAULT_MINES, DEFAULT_SIZE, GameConfig, PlayerId, SessionRegistry};

mod chat;
mod handler;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper over a line-based chat", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: u8,

    /// Number of mines on each board
    #[arg(long, default_value_t = DEFAULT_MINES)]
    mines: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player id used for lines without an `@<id>` tag
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    player: i64,

    /// Write replies as JSON lines instead of drawing boards
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let config = GameConfig::new(args.size, args.mines).context("Invalid board settings")?;
    let registry = match args.seed {
        Some(seed) => SessionRegistry::with_seed(config, seed),
        None => SessionRegistry::new(config),
    };
    let handler = handler::Handler::new(Arc::new(registry));

    let output = if args.json {
        chat::Output::Json
    } else {
        chat::Output::Text
    };
    log::info!("Ready, {}x{} board with {} mines", config.size(), config.size(), config.mines());
    chat::run(
        &handler,
        PlayerId(args.player),
        output,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}
