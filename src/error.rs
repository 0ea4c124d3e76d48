use crate::Node;
use crate::Step;

/// Failures that abort a match or an evaluation.
///
/// Both variants are fatal: setup errors surface before the first turn,
/// protocol violations surface on the turn they occur, and neither is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed setup: non-positive counts, more players than nodes, etc.
    InvalidParameter(String),
    /// A strategy proposed a node that is neither a pass, itself, nor a neighbour.
    InvalidMove {
        step: Step,
        focal: Node,
        target: Node,
    },
}

impl Error {
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(s) => write!(f, "invalid parameter: {}", s),
            Self::InvalidMove {
                step,
                focal,
                target,
            } => write!(
                f,
                "invalid move: node {} is not a neighbor of node {} in step {}",
                target, focal, step
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_nodes() {
        let error = Error::InvalidMove {
            step: 7,
            focal: 3,
            target: 11,
        };
        assert_eq!(
            error.to_string(),
            "invalid move: node 11 is not a neighbor of node 3 in step 7"
        );
    }
}
