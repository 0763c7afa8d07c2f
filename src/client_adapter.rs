use serde_json::{json, Value};
use crate::training_engine::{
    chart::range_chart,
    models::{Card, EvaluationResult, Scenario, Stage},
};

/// Cards as the table view draws them: "As", "Td", "2c".
fn cards(list: &[Card]) -> Value {
    Value::Array(list.iter().map(|c| Value::String(c.to_string())).collect())
}

fn stage_str(stage: Stage) -> &'static str {
    match stage {
        Stage::Preflop => "preflop",
        Stage::Flop    => "flop",
    }
}

/// Map a `Scenario` to the camelCase object the table view consumes.
///
/// Flop-only fields are `null` on preflop scenarios.
pub fn scenario_to_json(scenario: &Scenario) -> Value {
    json!({
        "heroPosition": scenario.hero_position.to_string(),
        "heroHand": cards(&scenario.hero_hand.cards()),
        "handNotation": scenario.hero_hand.notation(),
        "limpers": scenario.limpers,
        "isStraddled": scenario.is_straddled,
        "potSize": scenario.pot_size,
        "stackSize": scenario.stack_size,
        "playerCount": scenario.player_count.seats(),
        "description": scenario.description,
        "stage": stage_str(scenario.stage),
        "board": cards(&scenario.board),
        "boardTexture": scenario.texture.map(|t| t.to_string()),
        "villainType": scenario.villain_type.map(|v| v.to_string()),
        "villainAction": scenario.villain_action,
        "holding": scenario.holding.map(|h| h.to_string()),
    })
}

/// Map a verdict to the feedback panel shape. `citation` is omitted when absent.
pub fn evaluation_to_json(result: &EvaluationResult) -> Value {
    let mut out = json!({
        "isCorrect": result.is_correct,
        "feedback": result.feedback,
    });
    if let Some(citation) = &result.citation {
        out["citation"] = Value::String(citation.clone());
    }
    out
}

/// The range chart as rows of `{ "hand": "AKs", "action": "raise" }`.
pub fn chart_to_json() -> Value {
    let rows: Vec<Value> = range_chart()
        .into_iter()
        .map(|row| {
            Value::Array(
                row.into_iter()
                    .map(|cell| {
                        json!({
                            "hand": cell.label,
                            "action": format!("{:?}", cell.action).to_lowercase(),
                        })
                    })
                    .collect(),
            )
        })
        .collect();
    Value::Array(rows)
}
