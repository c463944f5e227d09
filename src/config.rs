use clap::Parser;

/// Number of upcoming pieces the simulator keeps in view.
pub const QUEUE_CAPACITY: usize = 5;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "piece-queue")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Seed for piece kinds. Falls back to the system clock when omitted.
    #[arg(long, env = "PIECE_QUEUE_SEED")]
    pub seed: Option<u64>,

    /// Pieces generated before the first prompt (clamped to the queue capacity).
    #[arg(long, env = "PIECE_QUEUE_INITIAL", default_value_t = QUEUE_CAPACITY)]
    pub initial: usize,

    /// Do not wait for ENTER after each action.
    #[arg(long)]
    pub no_pause: bool,

    /// Log filter directives, written to stderr.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub rust_log: String,
}
