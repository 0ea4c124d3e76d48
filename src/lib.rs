//! Moran-process strategy game on preferential-attachment graphs.
//!
//! Players own disjoint groups of nodes on a random graph. Each turn a node is
//! drawn uniformly at random and its owner may convert one neighbour to its own
//! label. The game ends at fixation (a single label remains) or at a step limit.
//!
//! ## Setup
//!
//! - [`Graph`] — Barabási–Albert topology, deterministic under a seed
//! - [`Partition`] — Initial split of nodes into labelled groups
//! - [`Params`] — Match configuration
//!
//! ## Play
//!
//! - [`Strategy`] — Pluggable move policy, built by name from a [`Registry`]
//! - [`Engine`] — Turn loop, move validation, termination
//! - [`State`] / [`View`] — Live labels and history, and their read-only projection
//! - [`Outcome`] — Terminal snapshot with winners and per-seat counts
//!
//! ## Evaluation
//!
//! - [`Tournament`] — Paired matches accumulating a focal player's score
//! - [`maxcut`] — Independent weighted MAX-CUT local search
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod graph;
pub mod maxcut;
pub mod players;
pub mod scoring;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use graph::*;
pub use players::*;
pub use scoring::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Node identifier in `[0, n)`.
pub type Node = usize;
/// Turn counter within a match.
pub type Step = usize;
/// Seed for any deterministic random generator.
pub type Seed = u64;

// ============================================================================
// MATCH DEFAULTS
// ============================================================================
/// Number of seats at the table.
pub const DEFAULT_PLAYERS: usize = 2;
/// Nodes in the generated graph.
pub const DEFAULT_NODES: usize = 20;
/// Edges each new node attaches with during preferential attachment.
pub const DEFAULT_ATTACHMENT: usize = 2;
/// Turn budget before the match is called.
pub const DEFAULT_STEPS: Step = 100;
/// Seed of the match generator.
pub const DEFAULT_SEED: Seed = 123;
/// Matches per evaluation (two orderings per seed).
pub const DEFAULT_MATCHES: usize = 4;

// ============================================================================
// MAX-CUT DEFAULTS
// ============================================================================
/// Edge probability of the G(n, p) graph.
pub const MAXCUT_PROBABILITY: f64 = 0.7;
/// Largest integer edge weight.
pub const MAXCUT_MAX_WEIGHT: u32 = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
