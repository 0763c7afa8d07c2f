use log::trace;

use crate::training_engine::{
    models::{EvaluationResult, GameAction, Scenario, Stage},
    topics,
};

/// Judge `action` against the strategy for `scenario`.
///
/// Always returns a verdict. Actions the strategy has no answer for (such as
/// checking) and flop scenarios missing their villain or holding come back
/// as incorrect with an "Unknown ..." message.
pub fn evaluate_action(scenario: &Scenario, action: &GameAction) -> EvaluationResult {
    let result = match scenario.stage {
        Stage::Preflop => topics::preflop::evaluate(scenario, action),
        Stage::Flop    => topics::postflop::evaluate(scenario, action),
    };
    trace!(
        "{:?} {} {:?} -> correct={}",
        scenario.stage,
        action.kind,
        action.amount,
        result.is_correct
    );
    result
}
