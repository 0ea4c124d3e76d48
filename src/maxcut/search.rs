use super::*;
use crate::Node;
use crate::Result;
use crate::Seed;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Improves the cut `(a, b)` of `graph` until no single move helps.
///
/// Each pass visits every node in a fresh random order and moves it to the
/// other half when more of its weight stays on its own side. Every move
/// strictly raises the cut value, so the search terminates, and the final
/// cut is never worse than the one given.
pub fn local_search(
    graph: &Weighted,
    a: &[Node],
    b: &[Node],
    seed: Seed,
) -> Result<(Vec<Node>, Vec<Node>)> {
    let mut cut = Cut::new(graph.node_count(), a, b)?;
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut order = graph.nodes().collect::<Vec<Node>>();
    let initial = cut.value(graph);
    let mut passes = 0;
    loop {
        passes += 1;
        order.shuffle(rng);
        let mut moved = false;
        for &node in order.iter() {
            let (own, other) = graph.sides(node, cut.side());
            if own > other {
                cut.flip(node);
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }
    log::debug!(
        "[maxcut] {} -> {} after {} passes",
        initial,
        cut.value(graph),
        passes
    );
    Ok(cut.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halves(n: usize) -> (Vec<Node>, Vec<Node>) {
        ((0..n / 2).collect(), (n / 2..n).collect())
    }

    #[test]
    fn never_worse_than_the_start() {
        for seed in 0..5 {
            let ref graph = Weighted::random(30, 0.7, 10, seed).expect("valid parameters");
            let (a, b) = halves(30);
            let before = Cut::new(30, &a, &b).expect("valid partition").value(graph);
            let (a, b) = local_search(graph, &a, &b, seed).expect("valid partition");
            let after = Cut::new(30, &a, &b).expect("valid partition").value(graph);
            assert!(after >= before);
        }
    }

    #[test]
    fn ends_in_a_local_optimum() {
        let ref graph = Weighted::random(25, 0.5, 8, 4).expect("valid parameters");
        let (a, b) = halves(25);
        let (a, b) = local_search(graph, &a, &b, 1).expect("valid partition");
        assert_eq!(a.len() + b.len(), 25);
        let cut = Cut::new(25, &a, &b).expect("valid partition");
        for node in graph.nodes() {
            let (own, other) = graph.sides(node, cut.side());
            assert!(own <= other);
        }
    }

    #[test]
    fn separates_a_heavy_edge() {
        let ref graph = Weighted::from((2, vec![(0, 1, 5)]));
        let (a, b) = local_search(graph, &[0, 1], &[], 0).expect("valid partition");
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn rejects_invalid_partition() {
        let ref graph = Weighted::from((3, vec![(0, 1, 1)]));
        assert!(local_search(graph, &[0], &[0, 1, 2], 0).is_err());
        assert!(local_search(graph, &[0], &[1], 0).is_err());
    }
}
