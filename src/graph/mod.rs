//! Graph generation and the initial split of its nodes between players.
//!
//! - [`Graph`] — Immutable undirected topology grown by preferential attachment
//! - [`Partition`] — Seeded assignment of nodes to labelled groups
mod partition;
mod topology;

pub use partition::*;
pub use topology::*;
