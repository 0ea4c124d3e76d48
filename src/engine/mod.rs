//! Turn loop of a match.
//!
//! - [`Engine`] — Draws focal nodes, dispatches to seats, validates and applies moves
//! - [`Seat`] — A strategy bound to its player id and label
//! - [`Observer`] — Hook invoked after every turn in interactive matches
//! - [`Turn`] — What a single turn did
mod engine;
mod observer;
mod seat;
mod turn;

pub use engine::*;
pub use observer::*;
pub use seat::*;
pub use turn::*;
