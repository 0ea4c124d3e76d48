use super::*;
use crate::Label;
use crate::Node;
use crate::Seed;
use crate::View;

/// Passes every turn by returning the focal node itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Strategy for Idle {
    fn name(&self) -> &str {
        "idle"
    }
    fn initialize(&mut self, _: View<'_>, _: usize, _: Label, _: Seed) {}
    fn decide(&mut self, _: View<'_>, focal: Node) -> Option<Node> {
        Some(focal)
    }
}
