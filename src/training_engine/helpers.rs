//! Shared builders for verdicts and display strings.
//!
//! Both judges assemble the same pieces: a verdict, a feedback line and
//! occasionally a citation. These helpers keep the judge files focused on
//! the strategy itself.

use crate::training_engine::models::{Card, EvaluationResult};

/// Format a board as space-separated cards (e.g. "Kh 7d 2c").
pub fn board_str(board: &[Card]) -> String {
    board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Parse a fixed card literal from the built-in tables.
///
/// Panics on a malformed literal: the tables are static data and a bad entry
/// is a programming error caught by the unit tests.
pub fn card(s: &str) -> Card {
    s.parse().unwrap_or_else(|e| panic!("bad card literal {s:?}: {e}"))
}

pub fn correct(feedback: impl Into<String>) -> EvaluationResult {
    EvaluationResult { is_correct: true, feedback: feedback.into(), citation: None }
}

pub fn incorrect(feedback: impl Into<String>) -> EvaluationResult {
    EvaluationResult { is_correct: false, feedback: feedback.into(), citation: None }
}

/// An incorrect verdict that quotes the rule it broke.
pub fn incorrect_cited(feedback: impl Into<String>, citation: impl Into<String>) -> EvaluationResult {
    EvaluationResult { is_correct: false, feedback: feedback.into(), citation: Some(citation.into()) }
}

pub fn unknown_action() -> EvaluationResult {
    incorrect("Unknown action.")
}

pub fn unknown_scenario() -> EvaluationResult {
    incorrect("Unknown scenario.")
}

/// Format a big-blind amount without a trailing ".0" for whole numbers.
pub fn bb(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}bb")
    } else {
        format!("{amount}bb")
    }
}
