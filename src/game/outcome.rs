use super::*;
use crate::Params;
use crate::Step;
use serde::Deserialize;
use serde::Serialize;

/// Why a match stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// Every node carries this label.
    Fixation(Label),
    /// The turn budget ran out first.
    StepLimit,
}

impl Ending {
    pub fn is_fixation(&self) -> bool {
        matches!(self, Self::Fixation(_))
    }
}

/// Final node count of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: usize,
    pub name: String,
    pub label: Label,
    pub count: usize,
}

/// Terminal snapshot of a match. Built once, never mutated.
///
/// `winners` holds every label tied for the largest final count; ties are
/// reported, not broken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    params: Params,
    ending: Ending,
    steps: Step,
    winners: Vec<Label>,
    counts: Vec<usize>,
    standings: Vec<Standing>,
    history: Vec<Record>,
}

impl Outcome {
    pub fn new(
        params: Params,
        ending: Ending,
        steps: Step,
        state: State,
        standings: Vec<Standing>,
    ) -> Self {
        let counts = state.counts();
        let max = counts.iter().copied().max().unwrap_or(0);
        let winners = counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == max)
            .map(|(i, _)| Label::from(i))
            .collect();
        Self {
            params,
            ending,
            steps,
            winners,
            counts,
            standings,
            history: state.history().to_vec(),
        }
    }
    pub fn params(&self) -> &Params {
        &self.params
    }
    pub fn ending(&self) -> Ending {
        self.ending
    }
    pub fn steps(&self) -> Step {
        self.steps
    }
    pub fn winners(&self) -> &[Label] {
        &self.winners
    }
    /// Node count per label index.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    pub fn count(&self, label: Label) -> usize {
        self.counts.get(label.index()).copied().unwrap_or(0)
    }
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    /// Final node count of the seat `player`.
    pub fn score(&self, player: usize) -> usize {
        self.standings
            .iter()
            .find(|s| s.player == player)
            .map_or(0, |s| s.count)
    }
    fn name(&self, label: Label) -> &str {
        self.standings
            .iter()
            .find(|s| s.label == label)
            .map_or("?", |s| s.name.as_str())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fixation = match self.ending {
            Ending::Fixation(label) => self.name(label).to_string(),
            Ending::StepLimit => String::from("-"),
        };
        let winners = self
            .winners
            .iter()
            .map(|&l| format!("{}:{}", self.name(l), l))
            .collect::<Vec<String>>()
            .join(" ");
        write!(
            f,
            "Parameters: {}, Fixation: {:^14}, Winner: {}, {} steps,",
            self.params, fixation, winners, self.steps
        )?;
        for standing in self.standings.iter() {
            write!(f, " {}:{}:{}", standing.name, standing.label, standing.count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    fn standings(counts: &[usize]) -> Vec<Standing> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Standing {
                player: i,
                name: format!("p{}", i),
                label: Label::from(i),
                count,
            })
            .collect()
    }

    #[test]
    fn ties_report_every_leader() {
        let graph = Graph::barabasi(6, 1, 0).expect("valid parameters");
        let labels = [0, 1, 2, 0, 1, 1].map(Label::new).to_vec();
        let state = State::new(graph, 3, labels).expect("consistent");
        let outcome = Outcome::new(
            Params::default(),
            Ending::StepLimit,
            100,
            state,
            standings(&[2, 3, 1]),
        );
        assert_eq!(outcome.counts(), &[2, 3, 1]);
        assert_eq!(outcome.winners(), &[Label::new(1)]);

        let graph = Graph::barabasi(4, 1, 0).expect("valid parameters");
        let labels = [0, 1, 0, 1].map(Label::new).to_vec();
        let state = State::new(graph, 2, labels).expect("consistent");
        let outcome = Outcome::new(
            Params::default(),
            Ending::StepLimit,
            100,
            state,
            standings(&[2, 2]),
        );
        assert_eq!(outcome.winners(), &[Label::new(0), Label::new(1)]);
    }

    #[test]
    fn summary_names_fixation_owner() {
        let graph = Graph::barabasi(3, 1, 0).expect("valid parameters");
        let state = State::new(graph, 1, vec![Label::new(0); 3]).expect("consistent");
        let outcome = Outcome::new(
            Params::default(),
            Ending::Fixation(Label::new(0)),
            0,
            state,
            standings(&[3]),
        );
        let summary = outcome.to_string();
        assert!(summary.contains("Winner: p0:A"));
        assert!(summary.ends_with("p0:A:3"));
        assert_eq!(outcome.score(0), 3);
        assert_eq!(outcome.score(1), 0);
    }
}
