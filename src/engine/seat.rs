use crate::Label;
use crate::Node;
use crate::Seed;
use crate::Standing;
use crate::Strategy;
use crate::View;

/// A strategy bound to the player id and label it plays for.
pub struct Seat {
    player: usize,
    label: Label,
    strategy: Box<dyn Strategy>,
}

impl Seat {
    pub fn new(player: usize, label: Label, strategy: Box<dyn Strategy>) -> Self {
        Self {
            player,
            label,
            strategy,
        }
    }
    pub fn player(&self) -> usize {
        self.player
    }
    pub fn label(&self) -> Label {
        self.label
    }
    pub fn name(&self) -> &str {
        self.strategy.name()
    }
    pub fn initialize(&mut self, view: View<'_>, seed: Seed) {
        self.strategy.initialize(view, self.player, self.label, seed);
    }
    pub fn decide(&mut self, view: View<'_>, focal: Node) -> Option<Node> {
        self.strategy.decide(view, focal)
    }
    pub fn standing(&self, count: usize) -> Standing {
        Standing {
            player: self.player,
            name: self.name().to_string(),
            label: self.label,
            count,
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("player", &self.player)
            .field("label", &self.label)
            .field("strategy", &self.name())
            .finish()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}:{} ({})", self.player, self.label, self.name())
    }
}
