use super::*;
use crate::Node;
use crate::Step;
use serde::Deserialize;
use serde::Serialize;

/// One applied conversion: `label` at `from` overwrote `to`, which was `prior`.
///
/// Only real conversions are recorded. Passes and self-moves consume a step
/// but leave no trace, so `step` values are strictly increasing yet may skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub step: Step,
    pub label: Label,
    pub from: Node,
    pub to: Node,
    pub prior: Label,
}

impl Record {
    /// True if the conversion changed the target's label.
    pub fn is_capture(&self) -> bool {
        self.label != self.prior
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>4} {}:{} -> {} ({})",
            self.step, self.label, self.from, self.to, self.prior
        )
    }
}
