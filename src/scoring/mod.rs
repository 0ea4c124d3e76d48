//! Repeated matches scoring one player against the best it could have done.
//!
//! - [`Tournament`] — Schedules paired matches and plays them in sequence
//! - [`Score`] — Accumulated node counts and per-match outcomes
mod score;
mod tournament;

pub use score::*;
pub use tournament::*;
