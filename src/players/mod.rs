//! Player strategies and the registry that builds them by name.
//!
//! ## Implementations
//!
//! - [`FirstForeign`] — First neighbour carrying another label
//! - [`RandomForeign`] — Uniform foreign neighbour from the player's own generator
//! - [`Hub`] — Foreign neighbour of highest degree
//! - [`Idle`] — Always passes
//! - [`Human`] — Interactive selection on the terminal (requires `cli` feature)
mod foreign;
mod hub;
#[cfg(feature = "cli")]
mod human;
mod idle;
mod random;
mod registry;
mod strategy;

pub use foreign::*;
pub use hub::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use idle::*;
pub use random::*;
pub use registry::*;
pub use strategy::*;
