//! Per-street scenario builders and judges.
//!
//! Each module exposes the same pair of entry points:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, player_count: PlayerCount) -> Scenario
//! pub fn evaluate(scenario: &Scenario, action: &GameAction) -> EvaluationResult
//! ```
//!
//! `generator.rs` and `evaluator.rs` dispatch to these.

/// Limped pots: iso-raise, over-limp or fold.
pub mod preflop;
/// Facing a check-raise after a continuation bet.
pub mod postflop;
