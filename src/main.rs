use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use piece_queue::{
    config::{Config, QUEUE_CAPACITY},
    PieceFactory, PieceQueue, Session,
};

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!("{:#?}", &config);

    let mut factory = match config.seed {
        Some(seed) => PieceFactory::new(seed),
        None => PieceFactory::from_clock(),
    };

    let mut queue: PieceQueue<QUEUE_CAPACITY> = PieceQueue::new();
    let filled = queue.initialize_full(&mut factory, config.initial);
    info!(filled, requested = config.initial, "queue pre-loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(queue, factory, stdin.lock(), stdout.lock())
        .with_pause(!config.no_pause)
        .run()
        .context("interactive session failed")
}
