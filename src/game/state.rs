use super::*;
use crate::Error;
use crate::Graph;
use crate::Node;
use crate::Result;
use crate::Step;

/// The graph of a match plus everything that changes on it.
///
/// Every node carries exactly one label at all times. Labels change only
/// through [`convert`](Self::convert), which is reserved to the engine and
/// appends a [`Record`] for each conversion. Strategies see the state through
/// a [`View`].
///
/// # Fields
///
/// - `graph` — Immutable topology
/// - `players` — Number of distinct labels in play
/// - `labels` — Current label of each node
/// - `initial` — Labels as assigned before the first turn
/// - `history` — Applied conversions in step order
#[derive(Debug, Clone)]
pub struct State {
    graph: Graph,
    players: usize,
    labels: Vec<Label>,
    initial: Vec<Label>,
    history: Vec<Record>,
}

impl State {
    pub fn new(graph: Graph, players: usize, labels: Vec<Label>) -> Result<Self> {
        if labels.len() != graph.node_count() {
            return Err(Error::parameter(format!(
                "{} labels for {} nodes",
                labels.len(),
                graph.node_count()
            )));
        }
        if let Some(label) = labels.iter().find(|l| l.index() >= players) {
            return Err(Error::parameter(format!(
                "label {} outside of {} players",
                label, players
            )));
        }
        Ok(Self {
            graph,
            players,
            initial: labels.clone(),
            labels,
            history: Vec::new(),
        })
    }
    pub fn view(&self) -> View<'_> {
        View::from(self)
    }
}

/// Read access.
impl State {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn label(&self, node: Node) -> Label {
        self.labels[node]
    }
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
    pub fn initial(&self) -> &[Label] {
        &self.initial
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    /// Node count per label index.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.players];
        for label in self.labels.iter() {
            counts[label.index()] += 1;
        }
        counts
    }
    /// Number of labels that still own at least one node.
    pub fn distinct(&self) -> usize {
        self.counts().into_iter().filter(|&c| c > 0).count()
    }
    /// The single remaining label, if the population has fixated.
    pub fn fixation(&self) -> Option<Label> {
        let first = *self.labels.first()?;
        self.labels
            .iter()
            .all(|&l| l == first)
            .then_some(first)
    }
}

/// Mutation, engine only.
impl State {
    /// Overwrites `to` with the label of `from` and records the conversion.
    ///
    /// The caller has already checked that `to` neighbours `from`.
    pub(crate) fn convert(&mut self, step: Step, from: Node, to: Node) -> Record {
        debug_assert!(self.graph.is_neighbor(from, to));
        debug_assert!(self.history.last().map_or(true, |r| r.step < step));
        let record = Record {
            step,
            label: self.labels[from],
            from,
            to,
            prior: self.labels[to],
        };
        self.labels[to] = record.label;
        self.history.push(record);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        let graph = Graph::barabasi(6, 1, 3).expect("valid parameters");
        let labels = (0..6).map(|i| Label::new(i % 2)).collect();
        State::new(graph, 2, labels).expect("consistent labels")
    }

    #[test]
    fn convert_overwrites_and_records() {
        let mut state = state();
        let from = 0;
        let to = state.graph().neighbors(from)[0];
        let prior = state.label(to);
        let record = state.convert(0, from, to);
        assert_eq!(record.prior, prior);
        assert_eq!(state.label(to), state.label(from));
        assert_eq!(state.history(), &[record]);
        assert_ne!(state.labels(), state.initial());
        assert_eq!(state.counts().iter().sum::<usize>(), 6);
    }

    #[test]
    fn fixation_requires_a_single_label() {
        let graph = Graph::barabasi(4, 1, 0).expect("valid parameters");
        let uniform = State::new(graph.clone(), 2, vec![Label::new(1); 4]).expect("consistent");
        let mixed = state();
        assert_eq!(uniform.fixation(), Some(Label::new(1)));
        assert_eq!(uniform.distinct(), 1);
        assert_eq!(mixed.fixation(), None);
        assert_eq!(mixed.distinct(), 2);
    }

    #[test]
    fn rejects_inconsistent_labels() {
        let graph = Graph::barabasi(4, 1, 0).expect("valid parameters");
        assert!(State::new(graph.clone(), 2, vec![Label::new(0); 3]).is_err());
        assert!(State::new(graph, 2, vec![Label::new(2); 4]).is_err());
    }
}
