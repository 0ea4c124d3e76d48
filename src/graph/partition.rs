use crate::Error;
use crate::Graph;
use crate::Label;
use crate::Result;
use rand::Rng;
use std::collections::BTreeSet;

/// Initial split of the node set between seats.
///
/// Group `g` is labelled `order[g]`. Every group gets `n / players` nodes and
/// group 0 additionally takes the remainder, so permuting `order` moves the
/// larger share between labels. Membership is drawn without replacement from
/// the caller's generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    players: usize,
    order: Vec<usize>,
}

impl Partition {
    pub fn new(players: usize, order: Vec<usize>) -> Result<Self> {
        Self::check(players, &order)?;
        Ok(Self { players, order })
    }
    /// Ensures `order` is a permutation of `0..players`.
    pub fn check(players: usize, order: &[usize]) -> Result<()> {
        if players == 0 {
            return Err(Error::parameter("number of players must be positive"));
        }
        if players > Label::LIMIT {
            return Err(Error::parameter(format!(
                "at most {} players are supported",
                Label::LIMIT
            )));
        }
        let distinct = order.iter().copied().collect::<BTreeSet<usize>>();
        if order.len() != players
            || distinct.len() != players
            || distinct.iter().any(|&i| i >= players)
        {
            return Err(Error::parameter(format!(
                "order {:?} is not a permutation of 0..{}",
                order, players
            )));
        }
        Ok(())
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn order(&self) -> &[usize] {
        &self.order
    }
    /// Label given to group `group`.
    pub fn label(&self, group: usize) -> Label {
        Label::from(self.order[group])
    }
    /// Group sizes for `n` nodes, remainder folded into group 0.
    pub fn sizes(&self, n: usize) -> Vec<usize> {
        let share = n / self.players;
        let remainder = n % self.players;
        (0..self.players)
            .map(|i| if i == 0 { share + remainder } else { share })
            .collect()
    }
    /// Labels every node of `graph`, indexed by node.
    pub fn assign<R>(&self, graph: &Graph, rng: &mut R) -> Result<Vec<Label>>
    where
        R: Rng + ?Sized,
    {
        let n = graph.node_count();
        if self.players > n {
            return Err(Error::parameter(format!(
                "{} players exceed {} nodes",
                self.players, n
            )));
        }
        let mut labels = vec![None; n];
        let mut unassigned = graph.nodes().collect::<BTreeSet<usize>>();
        for (group, size) in self.sizes(n).into_iter().enumerate() {
            let pool = unassigned.iter().copied().collect::<Vec<usize>>();
            let members = rand::seq::index::sample(rng, pool.len(), size)
                .into_iter()
                .map(|i| pool[i])
                .collect::<Vec<usize>>();
            for node in members {
                labels[node] = Some(self.label(group));
                unassigned.remove(&node);
            }
        }
        if !unassigned.is_empty() {
            log::warn!(
                "[partition] {} nodes are still unassigned",
                unassigned.len()
            );
        }
        labels
            .into_iter()
            .collect::<Option<Vec<Label>>>()
            .ok_or_else(|| Error::parameter("partition left nodes without a label"))
    }
}
