//! Core training engine: range matching, scenario generation and judging.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: cards, hands, positions, scenario, action, verdict |
//! | `error`       | `ParseError` for card/hand/table-size construction |
//! | `ranges`      | Range notation parser and matcher (`"QQ+"`, `"A2s-A9s"`, ...) |
//! | `range_table` | The authored raise/limp categories |
//! | `chart`       | 13x13 starting-hand chart built from the range table |
//! | `deck`        | Card universe and uniform random hands |
//! | `helpers`     | Verdict builders and display formatting |
//! | `generator`   | `generate_scenario`, `generate_postflop_scenario`, seeded `generate_training` |
//! | `evaluator`   | `evaluate_action`, dispatching to the street judges |
//! | `topics`      | Per-street generation and judging (preflop, postflop) |

pub mod chart;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod range_table;
pub mod ranges;
pub mod topics;

pub use chart::{range_chart, render_chart, ChartAction, ChartCell};
pub use error::ParseError;
pub use evaluator::evaluate_action;
pub use generator::{generate_postflop_scenario, generate_scenario, generate_training};
pub use models::{
    ActionKind, BoardTexture, Card, EvaluationResult, FlopHolding, GameAction, Hand,
    PlayerCount, Position, Rank, Scenario, ScenarioRequest, Stage, StageSelector, Suit,
    VillainType,
};
pub use range_table::RangeCategory;
pub use ranges::{is_hand_in_range, RangeExpr};
pub use topics::preflop::{iso_raise_band, plan as preflop_plan, PreflopPlan};
