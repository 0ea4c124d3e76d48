use crate::Outcome;
use serde::Serialize;

/// Aggregate of one player over a series of matches.
///
/// `total` sums the player's final node counts; `maximum` is what a full
/// conversion in every match would have earned (`matches * n`).
#[derive(Debug, Clone, Serialize)]
pub struct Score {
    player: usize,
    strategy: String,
    total: usize,
    maximum: usize,
    outcomes: Vec<Outcome>,
}

impl Score {
    pub fn new(player: usize, strategy: impl Into<String>) -> Self {
        Self {
            player,
            strategy: strategy.into(),
            total: 0,
            maximum: 0,
            outcomes: Vec::new(),
        }
    }
    /// Folds one finished match into the aggregate.
    pub fn add(&mut self, outcome: Outcome) {
        self.total += outcome.score(self.player);
        self.maximum += outcome.params().nodes;
        self.outcomes.push(outcome);
    }
    pub fn player(&self) -> usize {
        self.player
    }
    pub fn strategy(&self) -> &str {
        &self.strategy
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn maximum(&self) -> usize {
        self.maximum
    }
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
    /// Share of the maximum, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.maximum == 0 {
            0.
        } else {
            self.total as f64 / self.maximum as f64
        }
    }
    /// Passes if the total reaches `threshold`, else explains the shortfall.
    pub fn check(&self, threshold: usize) -> Result<(), String> {
        if self.total >= threshold {
            Ok(())
        } else {
            Err(format!(
                "The player scored {} out of {} points but should score at least {} points.",
                self.total, self.maximum, threshold
            ))
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} as P{}: {}/{} ({:.1}%)",
            self.strategy,
            self.player,
            self.total,
            self.maximum,
            100. * self.ratio()
        )
    }
}
