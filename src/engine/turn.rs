use crate::Label;
use crate::Node;
use crate::Record;
use crate::Step;

/// What happened on one turn.
///
/// - `step` — Turn index, counted from 0
/// - `focal` — Node drawn this turn, acting with `label`
/// - `choice` — Raw answer of the owning strategy
/// - `record` — The conversion, if one was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub step: Step,
    pub focal: Node,
    pub label: Label,
    pub choice: Option<Node>,
    pub record: Option<Record>,
}

impl Turn {
    /// True if the strategy declined to convert anything.
    pub fn is_pass(&self) -> bool {
        self.record.is_none()
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.choice {
            Some(target) if target != self.focal => {
                write!(f, "{}:{} -> {}", self.label, self.focal, target)
            }
            Some(_) => write!(f, "{}:{} -> pass", self.label, self.focal),
            None => write!(f, "{}:{} -> -", self.label, self.focal),
        }
    }
}
