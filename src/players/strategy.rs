use crate::Label;
use crate::Node;
use crate::Seed;
use crate::View;

/// Move policy of one seat.
///
/// The engine calls [`initialize`](Strategy::initialize) once before the first
/// turn and [`decide`](Strategy::decide) whenever a node carrying this seat's
/// label is drawn as the focal node. Strategies only ever observe the match
/// through a [`View`]; conversions are applied by the engine.
///
/// `decide` must return one of:
/// - `None` — no move
/// - `Some(focal)` — pass, a no-op
/// - `Some(neighbor)` — convert that neighbour to this seat's label
///
/// Anything else is a protocol violation and aborts the match.
pub trait Strategy {
    /// Display name used in summaries.
    fn name(&self) -> &str;
    /// Called once per match, before any move.
    fn initialize(&mut self, view: View<'_>, player: usize, label: Label, seed: Seed);
    /// Picks a target for the focal node.
    fn decide(&mut self, view: View<'_>, focal: Node) -> Option<Node>;
}
