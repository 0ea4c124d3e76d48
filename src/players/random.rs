use super::*;
use crate::Label;
use crate::Node;
use crate::Seed;
use crate::View;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Converts a foreign neighbour drawn uniformly from the seat's own generator.
///
/// The generator is reseeded in [`initialize`](Strategy::initialize), so two
/// matches with the same seed replay the same choices.
#[derive(Debug, Clone)]
pub struct RandomForeign {
    label: Option<Label>,
    rng: SmallRng,
}

impl Default for RandomForeign {
    fn default() -> Self {
        Self {
            label: None,
            rng: SmallRng::seed_from_u64(0),
        }
    }
}

impl Strategy for RandomForeign {
    fn name(&self) -> &str {
        "random-foreign"
    }
    fn initialize(&mut self, _: View<'_>, _: usize, label: Label, seed: Seed) {
        self.label = Some(label);
        self.rng = SmallRng::seed_from_u64(seed);
    }
    fn decide(&mut self, view: View<'_>, focal: Node) -> Option<Node> {
        let label = self.label.unwrap_or_else(|| view.label(focal));
        view.foreign(focal, label).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;
    use crate::State;

    fn state() -> State {
        let graph = Graph::barabasi(16, 3, 8).expect("valid parameters");
        let labels = (0..16).map(|i| Label::new(i % 2)).collect();
        State::new(graph, 2, labels).expect("consistent")
    }

    #[test]
    fn only_foreign_neighbors() {
        let ref state = state();
        let mut strategy = RandomForeign::default();
        strategy.initialize(state.view(), 0, Label::new(0), 17);
        for focal in state.graph().nodes() {
            if let Some(target) = strategy.decide(state.view(), focal) {
                assert!(state.graph().is_neighbor(focal, target));
                assert_ne!(state.label(target), Label::new(0));
            }
        }
    }

    #[test]
    fn replays_under_seed() {
        let ref state = state();
        let mut a = RandomForeign::default();
        let mut b = RandomForeign::default();
        a.initialize(state.view(), 0, Label::new(1), 5);
        b.initialize(state.view(), 0, Label::new(1), 5);
        let xs = state.graph().nodes().map(|n| a.decide(state.view(), n)).collect::<Vec<_>>();
        let ys = state.graph().nodes().map(|n| b.decide(state.view(), n)).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }
}
