//! Weighted MAX-CUT by 1-flip local search.
//!
//! Independent of the match engine: it has its own weighted graph model and
//! shares no state with it.
//!
//! - [`Weighted`] — G(n, p) graph with integer edge weights
//! - [`Cut`] — Two-sided partition of its nodes and the weight crossing it
//! - [`local_search`] — Moves nodes across until no single move improves the cut
mod cut;
mod search;
mod weighted;

pub use cut::*;
pub use search::*;
pub use weighted::*;
