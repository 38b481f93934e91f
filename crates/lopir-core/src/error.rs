use thiserror::Error;

/// Canonical result for the compiler core.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures are caller-input errors surfaced immediately; this layer has
/// no transient or retryable failure modes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arity for {kind}: expected {expected}, got {got}")]
    InvalidArity {
        kind: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("Inconsistent execution properties: {0}")]
    InconsistentProperties(String),

    #[error("Unresolved operand: {0}")]
    UnresolvedOperand(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Invalid plan description: {0}")]
    Plan(String),

    #[error("Hashing error: {0}")]
    Hash(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
