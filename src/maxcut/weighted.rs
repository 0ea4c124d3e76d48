use crate::Error;
use crate::Node;
use crate::Result;
use crate::Seed;
use petgraph::graph::NodeIndex;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Undirected graph with positive integer edge weights.
#[derive(Debug, Clone)]
pub struct Weighted {
    inner: UnGraph<(), u32>,
}

impl Weighted {
    /// Erdős–Rényi G(n, p) with weights uniform in `1..=max_weight`.
    pub fn random(n: usize, p: f64, max_weight: u32, seed: Seed) -> Result<Self> {
        if n == 0 {
            return Err(Error::parameter("graph must have at least one node"));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::parameter(format!("edge probability {} outside [0, 1]", p)));
        }
        if max_weight == 0 {
            return Err(Error::parameter("maximum weight must be positive"));
        }
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.random_bool(p) {
                    edges.push((a, b, rng.random_range(1..=max_weight)));
                }
            }
        }
        Ok(Self::from((n, edges)))
    }
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
    pub fn nodes(&self) -> std::ops::Range<Node> {
        0..self.node_count()
    }
    pub fn weight(&self, a: Node, b: Node) -> Option<u32> {
        if a >= self.node_count() || b >= self.node_count() {
            return None;
        }
        self.inner
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .and_then(|e| self.inner.edge_weight(e))
            .copied()
    }
    /// Weighted neighbours of `node`.
    pub fn incident(&self, node: Node) -> impl Iterator<Item = (Node, u32)> + '_ {
        self.inner
            .edges(NodeIndex::new(node))
            .map(move |e| {
                let other = if e.source().index() == node {
                    e.target()
                } else {
                    e.source()
                };
                (other.index(), *e.weight())
            })
    }
    /// Edges as `(a, b, w)`.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node, u32)> + '_ {
        self.inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }
    /// Weight from `node` to its own side and to the other side.
    ///
    /// `side[v]` tells which half `v` is on.
    pub fn sides(&self, node: Node, side: &[bool]) -> (u32, u32) {
        self.incident(node)
            .fold((0, 0), |(own, other), (neighbor, w)| {
                if side[neighbor] == side[node] {
                    (own + w, other)
                } else {
                    (own, other + w)
                }
            })
    }
}

impl From<(usize, Vec<(Node, Node, u32)>)> for Weighted {
    fn from((n, edges): (usize, Vec<(Node, Node, u32)>)) -> Self {
        let mut inner = UnGraph::<(), u32>::with_capacity(n, edges.len());
        (0..n).for_each(|_| {
            inner.add_node(());
        });
        for (a, b, w) in edges {
            inner.update_edge(NodeIndex::new(a), NodeIndex::new(b), w);
        }
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_within_bounds() {
        let graph = Weighted::random(12, 0.7, 10, 12).expect("valid parameters");
        assert_eq!(graph.node_count(), 12);
        assert!(graph.edges().all(|(a, b, w)| a != b && (1..=10).contains(&w)));
    }

    #[test]
    fn deterministic_under_seed() {
        let a = Weighted::random(15, 0.5, 5, 3).expect("valid parameters");
        let b = Weighted::random(15, 0.5, 5, 3).expect("valid parameters");
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }

    #[test]
    fn extreme_probabilities() {
        let empty = Weighted::random(6, 0.0, 3, 0).expect("valid parameters");
        let full = Weighted::random(6, 1.0, 3, 0).expect("valid parameters");
        assert_eq!(empty.edge_count(), 0);
        assert_eq!(full.edge_count(), 15);
    }

    #[test]
    fn sides_split_incident_weight() {
        let graph = Weighted::from((3, vec![(0, 1, 4), (0, 2, 7), (1, 2, 1)]));
        let side = [true, true, false];
        assert_eq!(graph.sides(0, &side), (4, 7));
        assert_eq!(graph.sides(2, &side), (0, 8));
        assert_eq!(graph.weight(2, 0), Some(7));
        assert_eq!(graph.weight(2, 3), None);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Weighted::random(0, 0.5, 3, 0).is_err());
        assert!(Weighted::random(4, 1.5, 3, 0).is_err());
        assert!(Weighted::random(4, 0.5, 0, 0).is_err());
    }
}
