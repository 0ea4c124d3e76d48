use crate::Error;
use crate::Node;
use crate::Result;
use crate::Seed;
use petgraph::graph::NodeIndex;
use petgraph::graph::UnGraph;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;

/// Immutable undirected topology of a match.
///
/// Grown by the Barabási–Albert process: a star on `m + 1` nodes seeds the
/// graph, then every new node attaches to `m` distinct existing nodes picked
/// with probability proportional to their degree. The result is connected,
/// simple, and fully determined by `(n, m, seed)`.
///
/// Node identifiers are the contiguous range `0..n`, matching petgraph's
/// insertion indices.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<(), ()>,
    attachment: usize,
}

/// Construction.
impl Graph {
    /// Builds a preferential-attachment graph with `n` nodes and `m` edges per new node.
    pub fn barabasi(n: usize, m: usize, seed: Seed) -> Result<Self> {
        if n == 0 {
            return Err(Error::parameter("graph must have at least one node"));
        }
        if m == 0 || m >= n {
            return Err(Error::parameter(format!(
                "attachment m={} must satisfy 1 <= m < n={}",
                m, n
            )));
        }
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut inner = UnGraph::<(), ()>::with_capacity(n, m * (n - m));
        (0..n).for_each(|_| {
            inner.add_node(());
        });
        // star seed: hub 0 joined to 1..=m
        let mut repeated = Vec::with_capacity(2 * m * (n - m));
        for leaf in 1..=m {
            inner.add_edge(NodeIndex::new(0), NodeIndex::new(leaf), ());
            repeated.push(0);
            repeated.push(leaf);
        }
        for source in (m + 1)..n {
            let targets = Self::subset(&repeated, m, rng);
            for &target in targets.iter() {
                inner.add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
                repeated.push(target);
                repeated.push(source);
            }
        }
        log::debug!(
            "[graph] barabasi n={} m={} seed={} edges={}",
            n,
            m,
            seed,
            inner.edge_count()
        );
        Ok(Self {
            inner,
            attachment: m,
        })
    }
    /// Draws `m` distinct nodes, each pick weighted by multiplicity in `pool`.
    fn subset(pool: &[Node], m: usize, rng: &mut SmallRng) -> BTreeSet<Node> {
        let mut targets = BTreeSet::new();
        while targets.len() < m {
            if let Some(&node) = pool.choose(rng) {
                targets.insert(node);
            }
        }
        targets
    }
}

/// Topology queries.
impl Graph {
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
    /// Edges each non-seed node attached with.
    pub fn attachment(&self) -> usize {
        self.attachment
    }
    /// All nodes in ascending order.
    pub fn nodes(&self) -> std::ops::Range<Node> {
        0..self.node_count()
    }
    pub fn contains(&self, node: Node) -> bool {
        node < self.node_count()
    }
    /// Neighbours of `node` in ascending order. Empty for unknown nodes.
    pub fn neighbors(&self, node: Node) -> Vec<Node> {
        if !self.contains(node) {
            return vec![];
        }
        let mut neighbors = self
            .inner
            .neighbors(NodeIndex::new(node))
            .map(|n| n.index())
            .collect::<Vec<Node>>();
        neighbors.sort_unstable();
        neighbors
    }
    pub fn degree(&self, node: Node) -> usize {
        if !self.contains(node) {
            return 0;
        }
        self.inner.neighbors(NodeIndex::new(node)).count()
    }
    pub fn is_neighbor(&self, a: Node, b: Node) -> bool {
        self.contains(a)
            && self.contains(b)
            && self
                .inner
                .find_edge(NodeIndex::new(a), NodeIndex::new(b))
                .is_some()
    }
    /// Edges as `(lo, hi)` pairs in ascending order.
    pub fn edges(&self) -> Vec<(Node, Node)> {
        let mut edges = self
            .inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .map(|(a, b)| (a.index().min(b.index()), a.index().max(b.index())))
            .collect::<Vec<(Node, Node)>>();
        edges.sort_unstable();
        edges
    }
    pub fn is_connected(&self) -> bool {
        petgraph::algo::connected_components(&self.inner) == 1
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph(n={}, m={}, edges={})",
            self.node_count(),
            self.attachment,
            self.edge_count()
        )
    }
}
