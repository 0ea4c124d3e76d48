use super::*;
use crate::Graph;
use crate::Node;

/// Read-only projection of a [`State`].
///
/// This is all a strategy ever sees: topology, current labels, history.
/// It borrows the state for the duration of one call, so it can never drift
/// out of sync with conversions the engine applies between turns.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    state: &'a State,
}

impl<'a> From<&'a State> for View<'a> {
    fn from(state: &'a State) -> Self {
        Self { state }
    }
}

impl<'a> View<'a> {
    pub fn graph(&self) -> &'a Graph {
        self.state.graph()
    }
    pub fn node_count(&self) -> usize {
        self.state.graph().node_count()
    }
    pub fn nodes(&self) -> std::ops::Range<Node> {
        self.state.graph().nodes()
    }
    pub fn neighbors(&self, node: Node) -> Vec<Node> {
        self.state.graph().neighbors(node)
    }
    pub fn label(&self, node: Node) -> Label {
        self.state.label(node)
    }
    pub fn labels(&self) -> &'a [Label] {
        self.state.labels()
    }
    pub fn history(&self) -> &'a [Record] {
        self.state.history()
    }
    pub fn counts(&self) -> Vec<usize> {
        self.state.counts()
    }
    /// Neighbours of `node` whose label differs from `label`, ascending.
    pub fn foreign(&self, node: Node, label: Label) -> Vec<Node> {
        self.neighbors(node)
            .into_iter()
            .filter(|&n| self.label(n) != label)
            .collect()
    }
}
