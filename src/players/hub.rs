use super::*;
use crate::Label;
use crate::Node;
use crate::Seed;
use crate::View;

/// Converts the best-connected foreign neighbour, lowest index on ties.
#[derive(Debug, Clone, Default)]
pub struct Hub {
    label: Option<Label>,
}

impl Strategy for Hub {
    fn name(&self) -> &str {
        "hub"
    }
    fn initialize(&mut self, _: View<'_>, _: usize, label: Label, _: Seed) {
        self.label = Some(label);
    }
    fn decide(&mut self, view: View<'_>, focal: Node) -> Option<Node> {
        let label = self.label.unwrap_or_else(|| view.label(focal));
        let graph = view.graph();
        view.foreign(focal, label)
            .into_iter()
            .rev()
            .max_by_key(|&n| graph.degree(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;
    use crate::State;

    #[test]
    fn prefers_high_degree() {
        let graph = Graph::barabasi(20, 1, 2).expect("valid parameters");
        let labels = std::iter::once(Label::new(0))
            .chain(std::iter::repeat(Label::new(1)).take(19))
            .collect();
        let ref state = State::new(graph, 2, labels).expect("consistent");
        let mut strategy = Hub::default();
        strategy.initialize(state.view(), 0, Label::new(0), 0);
        let neighbors = state.graph().neighbors(0);
        let best = neighbors
            .iter()
            .map(|&n| state.graph().degree(n))
            .max()
            .expect("hub has neighbors");
        let target = strategy.decide(state.view(), 0).expect("foreign neighbor");
        assert_eq!(state.graph().degree(target), best);
        assert!(
            neighbors
                .iter()
                .filter(|&&n| state.graph().degree(n) == best)
                .all(|&n| n >= target)
        );
    }
}
