use super::*;
use crate::Error;
use crate::Node;
use crate::Result;

/// Two-sided partition of a [`Weighted`] graph.
///
/// `side[v]` is `true` when `v` belongs to the first half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    side: Vec<bool>,
}

impl Cut {
    /// Checks that `a` and `b` are disjoint and together cover `0..n`.
    pub fn new(n: usize, a: &[Node], b: &[Node]) -> Result<Self> {
        let mut seen = vec![None; n];
        for (&node, half) in a
            .iter()
            .map(|v| (v, true))
            .chain(b.iter().map(|v| (v, false)))
        {
            match seen.get_mut(node) {
                None => {
                    return Err(Error::parameter(format!(
                        "node {} outside of {} nodes",
                        node, n
                    )));
                }
                Some(Some(_)) => {
                    return Err(Error::parameter(format!(
                        "node {} appears twice in the partition",
                        node
                    )));
                }
                Some(slot) => *slot = Some(half),
            }
        }
        seen.into_iter()
            .enumerate()
            .map(|(node, half)| {
                half.ok_or_else(|| {
                    Error::parameter(format!("node {} missing from the partition", node))
                })
            })
            .collect::<Result<Vec<bool>>>()
            .map(|side| Self { side })
    }
    pub fn side(&self) -> &[bool] {
        &self.side
    }
    /// Moves `node` to the other half.
    pub fn flip(&mut self, node: Node) {
        self.side[node] = !self.side[node];
    }
    /// Total weight of edges whose endpoints sit in different halves.
    pub fn value(&self, graph: &Weighted) -> u64 {
        graph
            .edges()
            .filter(|&(a, b, _)| self.side[a] != self.side[b])
            .map(|(_, _, w)| w as u64)
            .sum()
    }
    /// The two halves in ascending node order.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Node>) {
        let (a, b) = self
            .side
            .into_iter()
            .enumerate()
            .partition::<Vec<(Node, bool)>, _>(|&(_, half)| half);
        (
            a.into_iter().map(|(v, _)| v).collect(),
            b.into_iter().map(|(v, _)| v).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Weighted {
        Weighted::from((3, vec![(0, 1, 4), (0, 2, 7), (1, 2, 1)]))
    }

    #[test]
    fn value_counts_crossing_edges() {
        let cut = Cut::new(3, &[0], &[1, 2]).expect("valid partition");
        assert_eq!(cut.value(&triangle()), 11);
        let cut = Cut::new(3, &[0, 1, 2], &[]).expect("valid partition");
        assert_eq!(cut.value(&triangle()), 0);
    }

    #[test]
    fn parts_round_trip() {
        let cut = Cut::new(4, &[3, 1], &[0, 2]).expect("valid partition");
        assert_eq!(cut.into_parts(), (vec![1, 3], vec![0, 2]));
    }

    #[test]
    fn rejects_malformed_partitions() {
        assert!(Cut::new(3, &[0, 1], &[1, 2]).is_err());
        assert!(Cut::new(3, &[0], &[1]).is_err());
        assert!(Cut::new(3, &[0, 1], &[2, 3]).is_err());
    }
}
