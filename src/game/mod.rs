//! Match state: labels, move history, and terminal results.
//!
//! - [`Label`] — Player-affiliation tag of a node
//! - [`Record`] — One applied conversion
//! - [`State`] — Graph, live labels, and append-only history
//! - [`View`] — Read-only projection handed to strategies
//! - [`Ending`] / [`Outcome`] — Why and how a match finished
mod label;
mod outcome;
mod record;
mod state;
mod view;

pub use label::*;
pub use outcome::*;
pub use record::*;
pub use state::*;
pub use view::*;
