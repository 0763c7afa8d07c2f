//! # iso_trainer
//!
//! An offline, deterministic trainer for limped-pot poker decisions.
//!
//! The crate generates training scenarios and judges a player's answer
//! against a fixed, hand-authored strategy table:
//!
//! - **Preflop**: one or more players have limped. Iso-raise, over-limp or fold?
//!   Position, limper count and a possible straddle change the answer.
//! - **Flop**: the hero's continuation bet is check-raised by a passive
//!   station, a maniac or a nit. Fold, call or re-raise?
//!
//! ## How it works
//!
//! 1. Strategy lives in [`RangeCategory`] as lists of range expressions such
//!    as `"QQ+"`, `"A2s-A9s"` or `"45s-78s"`.
//! 2. [`is_hand_in_range`] matches a concrete two-card hand against one
//!    expression. Malformed expressions simply match nothing.
//! 3. [`generate_scenario`] / [`generate_postflop_scenario`] build a random
//!    [`Scenario`] from any `rand::Rng`; [`generate_training`] does the same
//!    from a [`ScenarioRequest`] with an optional seed.
//! 4. [`evaluate_action`] recomputes the correct play and returns an
//!    [`EvaluationResult`] with feedback and, for mis-sized raises, the
//!    sizing rule as a citation.
//!
//! ## Quick start
//!
//! ```rust
//! use iso_trainer::{
//!     evaluate_action, generate_training, GameAction, PlayerCount, ScenarioRequest,
//! };
//!
//! let scenario = generate_training(ScenarioRequest::new(PlayerCount::SixMax).with_seed(42));
//! println!("{}", scenario.description);
//!
//! let verdict = evaluate_action(&scenario, &GameAction::fold());
//! println!("{} {}", verdict.is_correct, verdict.feedback);
//! ```

pub mod client_adapter;
pub mod training_engine;

// Convenience re-exports so callers can use `iso_trainer::generate_scenario`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    evaluate_action, generate_postflop_scenario, generate_scenario, generate_training,
    is_hand_in_range, iso_raise_band, preflop_plan, range_chart, render_chart, ActionKind,
    BoardTexture, Card, ChartAction, ChartCell, EvaluationResult, FlopHolding, GameAction, Hand,
    ParseError, PlayerCount, Position, PreflopPlan, RangeCategory, RangeExpr, Rank, Scenario,
    ScenarioRequest, Stage, StageSelector, Suit, VillainType,
};

#[cfg(test)]
mod tests;
