use super::*;
use crate::State;

/// Hook invoked after every turn of an interactive match.
///
/// Observers see the state read-only and cannot influence the outcome; they
/// exist for pacing and rendering.
pub trait Observer {
    fn observe(&mut self, state: &State, turn: &Turn);
}

/// Does nothing. Used for batch matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    fn observe(&mut self, _: &State, _: &Turn) {}
}

/// Prints every turn and blocks until Enter is pressed.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Pacer;

#[cfg(feature = "cli")]
impl Observer for Pacer {
    fn observe(&mut self, state: &State, turn: &Turn) {
        use colored::Colorize;
        let line = turn.to_string();
        match turn.record {
            Some(record) if record.is_capture() => println!("{}", line.bold()),
            _ => println!("{}", line.dimmed()),
        }
        println!("{}", Self::status(state, turn));
        if let Err(e) = dialoguer::Input::<String>::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .report(false)
            .interact_text()
        {
            log::warn!("[pacer] prompt failed: {}", e);
        }
    }
}

#[cfg(feature = "cli")]
impl Pacer {
    /// Step, surviving labels, and their node counts.
    pub fn status(state: &State, turn: &Turn) -> String {
        let counts = state
            .counts()
            .into_iter()
            .enumerate()
            .filter(|&(_, c)| c > 0)
            .map(|(i, c)| format!("{}:{}", crate::Label::from(i), c))
            .collect::<Vec<String>>()
            .join(" ");
        format!(
            "Step: {}, Number of labels: {}, Counts: {}",
            turn.step,
            state.distinct(),
            counts
        )
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::Graph;
    use crate::Label;

    #[test]
    fn status_lists_surviving_labels() {
        let graph = Graph::barabasi(5, 1, 0).expect("valid parameters");
        let labels = [0, 0, 2, 2, 2].map(Label::new).to_vec();
        let state = State::new(graph, 3, labels).expect("consistent");
        let turn = Turn {
            step: 4,
            focal: 2,
            label: Label::new(2),
            choice: None,
            record: None,
        };
        assert!(turn.is_pass());
        assert_eq!(
            Pacer::status(&state, &turn),
            "Step: 4, Number of labels: 2, Counts: A:2 C:3"
        );
    }
}
