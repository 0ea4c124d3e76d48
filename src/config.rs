use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Configuration surface of a single match.
///
/// `interactive` only decides whether pacing hooks run between turns;
/// two matches with equal parameters otherwise play out identically.
///
/// # Fields
///
/// - `players` — Number of seats, each owning one label
/// - `nodes` — Graph size `n`
/// - `attachment` — Edges per new node `m` in preferential attachment
/// - `steps` — Turn budget, `None` to run until fixation
/// - `seed` — Seed of the match generator
/// - `order` — Seat index → label index; a permutation of `0..players`
/// - `interactive` — Invoke pacing hooks after every turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub players: usize,
    pub nodes: usize,
    pub attachment: usize,
    pub steps: Option<Step>,
    pub seed: Seed,
    pub order: Vec<usize>,
    pub interactive: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            nodes: DEFAULT_NODES,
            attachment: DEFAULT_ATTACHMENT,
            steps: Some(DEFAULT_STEPS),
            seed: DEFAULT_SEED,
            order: (0..DEFAULT_PLAYERS).collect(),
            interactive: false,
        }
    }
}

impl Params {
    /// Reads parameters from a JSON document. Missing fields take defaults,
    /// and a missing `order` is the identity over the configured players.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let params = Self::from_json(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        params.validate()?;
        Ok(params)
    }
    /// Parses a JSON document without validating it.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let value = serde_json::from_str::<serde_json::Value>(text)?;
        let explicit = value.get("order").is_some();
        let params = serde_json::from_value::<Self>(value)?;
        Ok(if explicit { params } else { params.ordered() })
    }
    /// Same parameters with an identity seat order for the current player count.
    pub fn ordered(mut self) -> Self {
        self.order = (0..self.players).collect();
        self
    }
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
    pub fn with_order(mut self, order: Vec<usize>) -> Self {
        self.order = order;
        self
    }
    /// Rejects setups that cannot produce a well-formed match.
    pub fn validate(&self) -> Result<()> {
        if self.players == 0 {
            return Err(Error::parameter("number of players must be positive"));
        }
        if self.nodes == 0 {
            return Err(Error::parameter("number of nodes must be positive"));
        }
        if self.players > self.nodes {
            return Err(Error::parameter(format!(
                "{} players exceed {} nodes",
                self.players, self.nodes
            )));
        }
        if self.attachment == 0 || self.attachment >= self.nodes {
            return Err(Error::parameter(format!(
                "attachment m={} must satisfy 1 <= m < n={}",
                self.attachment, self.nodes
            )));
        }
        Partition::check(self.players, &self.order)
    }
}

impl std::fmt::Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "players:{}, n:{}, m:{}, steps:{}, order:{:?}, seed:{}, interactive:{}",
            self.players,
            self.nodes,
            self.attachment,
            self.steps
                .map(|s| s.to_string())
                .unwrap_or_else(|| String::from("-")),
            self.order,
            self.seed,
            self.interactive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Params::default().validate().is_ok());
    }

    #[test]
    fn rejects_more_players_than_nodes() {
        let params = Params {
            players: 5,
            nodes: 4,
            attachment: 1,
            ..Params::default()
        }
        .ordered();
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_attachment_out_of_range() {
        let zero = Params {
            attachment: 0,
            ..Params::default()
        };
        let full = Params {
            attachment: DEFAULT_NODES,
            ..Params::default()
        };
        assert!(zero.validate().is_err());
        assert!(full.validate().is_err());
    }

    #[test]
    fn rejects_order_that_is_not_a_permutation() {
        let params = Params::default().with_order(vec![0, 0]);
        assert!(params.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params = serde_json::from_str::<Params>(r#"{ "nodes": 30, "steps": null }"#)
            .expect("valid json");
        assert_eq!(params.nodes, 30);
        assert_eq!(params.steps, None);
        assert_eq!(params.players, DEFAULT_PLAYERS);
        assert_eq!(params.seed, DEFAULT_SEED);
    }

    #[test]
    fn missing_order_follows_player_count() {
        let params = Params::from_json(r#"{ "players": 3 }"#).expect("valid json");
        assert_eq!(params.order, vec![0, 1, 2]);
        assert!(params.validate().is_ok());
        let params = Params::from_json(r#"{ "order": [1, 0] }"#).expect("valid json");
        assert_eq!(params.order, vec![1, 0]);
    }
}
