use super::*;
use crate::Label;
use crate::Node;
use crate::Seed;
use crate::View;

/// Converts the lowest-numbered neighbour that carries another label.
#[derive(Debug, Clone, Default)]
pub struct FirstForeign {
    label: Option<Label>,
}

impl Strategy for FirstForeign {
    fn name(&self) -> &str {
        "first-foreign"
    }
    fn initialize(&mut self, _: View<'_>, _: usize, label: Label, _: Seed) {
        self.label = Some(label);
    }
    fn decide(&mut self, view: View<'_>, focal: Node) -> Option<Node> {
        let label = self.label.unwrap_or_else(|| view.label(focal));
        view.foreign(focal, label).first().copied()
    }
}
