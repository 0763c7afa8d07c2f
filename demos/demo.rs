//! Walk through a few seeded scenarios and judge every answer.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Range chart** - the baseline raise/limp/fold grid from the range table.
//! 2. **Preflop** - one seeded limped pot per table size.
//! 3. **Flop** - a few seeded check-raise spots.

use iso_trainer::{
    evaluate_action, generate_training, iso_raise_band, render_chart, GameAction, PlayerCount,
    Scenario, ScenarioRequest, Stage, StageSelector,
};

fn answers(scenario: &Scenario) -> Vec<GameAction> {
    let (min, max) = iso_raise_band(scenario.limpers, scenario.hero_position);
    let mut out = vec![GameAction::fold(), GameAction::call(), GameAction::raise((min + max) / 2.0)];
    if scenario.stage == Stage::Preflop {
        // Deliberately oversized to show the sizing citation.
        out.push(GameAction::raise(max + 6.0));
    }
    out
}

fn print_scenario(scenario: &Scenario) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} {:?}]  Hero: {} ({})  Pot: {}bb  Stack: {}bb",
        scenario.player_count, scenario.stage, scenario.hero_hand,
        scenario.hero_hand.notation(), scenario.pot_size, scenario.stack_size);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", scenario.description);
    println!();
    for action in answers(scenario) {
        let verdict = evaluate_action(scenario, &action);
        let marker = if verdict.is_correct { "✓" } else { " " };
        let size = action.amount.map(|a| format!(" {a}bb")).unwrap_or_default();
        println!("  [{marker}] {}{size}: {}", action.kind, verdict.feedback);
        if let Some(citation) = verdict.citation {
            println!("        ↳ {citation}");
        }
    }
    println!();
}

fn main() {
    env_logger::init();

    println!("Range chart (R = raise, L = limp, . = fold)\n");
    println!("{}\n", render_chart());

    for (count, seed) in [(PlayerCount::HeadsUp, 3), (PlayerCount::SixMax, 42), (PlayerCount::NineMax, 7)] {
        print_scenario(&generate_training(ScenarioRequest::new(count).with_seed(seed)));
    }

    for seed in [1, 2, 3] {
        let request = ScenarioRequest::new(PlayerCount::SixMax)
            .with_stage(StageSelector::Flop)
            .with_seed(seed);
        print_scenario(&generate_training(request));
    }
}
