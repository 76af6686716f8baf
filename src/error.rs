/// Error taxonomy for threshold computation
///
/// Every failure is surfaced synchronously to the caller; nothing is retried
/// internally since the computation is deterministic.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    /// Shape string is empty, malformed, or does not anchor on both ends
    #[error("invalid shape '{0}': {1}")]
    InvalidShape(String, String),

    /// Shape span exceeds the text length, so no window fits. The threshold
    /// is undefined here, not zero: 0 is a legitimate (weak) threshold for
    /// feasible instances and must not be conflated with this condition.
    #[error("infeasible instance: shape span {span} exceeds text length {length}")]
    InfeasibleInstance { span: usize, length: usize },

    /// Algorithm selector does not name a known variant
    #[error("unsupported algorithm '{0}' (expected lemma, exact, or apx)")]
    UnsupportedAlgorithm(String),
}
