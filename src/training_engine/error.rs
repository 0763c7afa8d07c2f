use thiserror::Error;

/// Errors raised while building cards, hands and table parameters from text
/// or raw values. These signal bad static data or bad caller input; the range
/// matcher and the evaluator never produce them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid rank character '{0}'")]
    InvalidRank(char),

    #[error("rank value {0} out of range (expected 2..=14)")]
    InvalidRankValue(u8),

    #[error("invalid suit character '{0}'")]
    InvalidSuit(char),

    #[error("invalid {what} string '{input}': expected {expected} characters")]
    InvalidLength {
        what: &'static str,
        input: String,
        expected: usize,
    },

    #[error("a hand cannot hold the same card twice ({0})")]
    DuplicateCard(String),

    #[error("unsupported player count {0} (expected 2, 6 or 9)")]
    InvalidPlayerCount(u8),

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}
