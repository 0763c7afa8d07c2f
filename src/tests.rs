//! Unit tests for the `iso_trainer` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical scenario; same input → identical verdict |
//! | Structural | Pot formula, stack size, board length per stage, limper bounds |
//! | End-to-end | AKs on the Button vs one limper; straddled small pair |
//! | Request | Stage selector, entropy smoke test, serde round trip |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::training_engine::{
    evaluate_action, generate_postflop_scenario, generate_scenario, generate_training,
    preflop_plan, ActionKind, GameAction, PlayerCount, Position, RangeCategory, Scenario,
    ScenarioRequest, Stage, StageSelector,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(player_count: PlayerCount, seed: u64) -> ScenarioRequest {
    ScenarioRequest::new(player_count).with_seed(seed)
}

const COUNTS: [PlayerCount; 3] = [PlayerCount::HeadsUp, PlayerCount::SixMax, PlayerCount::NineMax];

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn every_action() -> [GameAction; 5] {
    [
        GameAction::fold(),
        GameAction::check(),
        GameAction::call(),
        GameAction::raise(5.0),
        GameAction::raise(14.0),
    ]
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_scenario() {
    for count in COUNTS {
        for stage in [StageSelector::Preflop, StageSelector::Flop, StageSelector::Any] {
            let a = generate_training(req(count, 12345).with_stage(stage));
            let b = generate_training(req(count, 12345).with_stage(stage));
            assert_eq!(a, b, "scenario mismatch for {count} {stage:?}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_hands() {
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_training(req(PlayerCount::NineMax, seed));
        let b = generate_training(req(PlayerCount::NineMax, seed + 500));
        if a.hero_hand == b.hero_hand {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical hands ({same}/{pairs})");
}

#[test]
fn evaluation_is_deterministic() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let scenarios = [
            generate_scenario(&mut rng, PlayerCount::SixMax),
            generate_postflop_scenario(&mut rng, PlayerCount::SixMax),
        ];
        for s in &scenarios {
            for action in every_action() {
                assert_eq!(evaluate_action(s, &action), evaluate_action(s, &action));
            }
        }
    }
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn preflop_pot_follows_limpers_and_straddle() {
    for count in COUNTS {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = generate_scenario(&mut rng, count);
            let expected = 1.5 + f64::from(s.limpers) + if s.is_straddled { 2.0 } else { 0.0 };
            assert_eq!(s.pot_size, expected, "{count} seed {seed}");
            assert_eq!(s.stack_size, if s.is_straddled { 50.0 } else { 100.0 });
            assert_eq!(s.stage, Stage::Preflop);
            assert!(s.board.is_empty());
            assert!(s.limpers <= count.max_limpers());
            assert!(s.villain_type.is_none() && s.holding.is_none());
        }
    }
}

#[test]
fn heads_up_first_to_act_never_faces_a_limp() {
    for seed in 0..300 {
        let s = generate_training(req(PlayerCount::HeadsUp, seed));
        if s.hero_position == PlayerCount::HeadsUp.first_to_act() {
            assert_eq!(s.limpers, 0, "seed {seed}");
        }
    }
}

#[test]
fn flop_scenarios_always_have_three_board_cards() {
    for seed in SEEDS {
        let s = generate_training(req(PlayerCount::SixMax, seed).with_stage(StageSelector::Flop));
        assert_eq!(s.stage, Stage::Flop);
        assert_eq!(s.board.len(), 3);
        for c in s.hero_hand.cards() {
            assert!(!s.board.contains(&c), "hero card {c} is on the board");
        }
    }
}

#[test]
fn every_scenario_gets_a_non_empty_verdict() {
    for seed in SEEDS {
        for stage in [StageSelector::Preflop, StageSelector::Flop] {
            let s = generate_training(req(PlayerCount::NineMax, seed).with_stage(stage));
            for action in every_action() {
                let r = evaluate_action(&s, &action);
                assert!(!r.feedback.is_empty());
                if action.kind == ActionKind::Check {
                    assert!(!r.is_correct);
                }
            }
        }
    }
}

#[test]
fn every_flop_scenario_has_a_correct_answer() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = generate_postflop_scenario(&mut rng, PlayerCount::SixMax);
        let fold = evaluate_action(&s, &GameAction::fold());
        let call = evaluate_action(&s, &GameAction::call());
        let raise = evaluate_action(&s, &GameAction::raise(60.0));
        assert!(
            fold.is_correct || call.is_correct || raise.is_correct,
            "seed {seed}: no correct answer for {}",
            s.description
        );
    }
}

// ── end-to-end ───────────────────────────────────────────────────────────────

fn button_ace_king() -> Scenario {
    Scenario::preflop(PlayerCount::SixMax, Position::BTN, "AsKs".parse().unwrap(), 1, false)
}

#[test]
fn ace_king_suited_isolates_one_limper() {
    let s = button_ace_king();
    let plan = preflop_plan(&s);
    assert_eq!(plan.raise_category, Some(RangeCategory::IsolationValue));
    assert!(plan.should_raise);

    let sized = evaluate_action(&s, &GameAction::raise(5.0));
    assert!(sized.is_correct, "{}", sized.feedback);
    assert!(sized.citation.is_none());
}

#[test]
fn ace_king_suited_oversized_raise_cites_formula() {
    let r = evaluate_action(&button_ace_king(), &GameAction::raise(12.0));
    assert!(!r.is_correct);
    assert!(r.citation.is_some());
    assert!(r.feedback.contains("Target: 5-6bb"), "{}", r.feedback);
}

#[test]
fn ace_king_suited_fold_misses_isolation() {
    let r = evaluate_action(&button_ace_king(), &GameAction::fold());
    assert!(!r.is_correct);
    assert!(r.feedback.contains("isolation"), "{}", r.feedback);
}

#[test]
fn straddled_small_pair_should_not_limp() {
    let s = Scenario::preflop(PlayerCount::NineMax, Position::CO, "5h5c".parse().unwrap(), 2, true);
    let plan = preflop_plan(&s);
    assert!(!plan.should_limp);
    assert!(!plan.should_raise);

    let call = evaluate_action(&s, &GameAction::call());
    assert!(!call.is_correct);
    assert!(call.feedback.contains("implied odds"), "{}", call.feedback);
    assert!(evaluate_action(&s, &GameAction::fold()).is_correct);
}

#[test]
fn unstraddled_small_pair_over_limps() {
    let s = Scenario::preflop(PlayerCount::NineMax, Position::CO, "5h5c".parse().unwrap(), 2, false);
    assert!(evaluate_action(&s, &GameAction::call()).is_correct);
}

// ── request / config ─────────────────────────────────────────────────────────

#[test]
fn any_stage_selector_yields_both_streets() {
    let stages: Vec<Stage> = (0..60)
        .map(|seed| generate_training(req(PlayerCount::SixMax, seed).with_stage(StageSelector::Any)).stage)
        .collect();
    assert!(stages.contains(&Stage::Preflop));
    assert!(stages.contains(&Stage::Flop));
}

#[test]
fn entropy_seed_produces_a_valid_scenario() {
    let s = generate_training(ScenarioRequest::default());
    assert_eq!(s.player_count, PlayerCount::SixMax);
    assert!(!s.description.is_empty());
    assert!(s.limpers <= PlayerCount::SixMax.max_limpers());
}

#[test]
fn request_and_scenario_round_trip_through_json() {
    let request: ScenarioRequest =
        serde_json::from_str(r#"{ "player_count": 9, "rng_seed": 77 }"#).unwrap();
    assert_eq!(request.player_count, PlayerCount::NineMax);
    assert_eq!(request.stage, StageSelector::Preflop);

    let bad = serde_json::from_str::<ScenarioRequest>(r#"{ "player_count": 4 }"#);
    assert!(bad.is_err());

    let s = generate_training(request.with_stage(StageSelector::Flop));
    let json = serde_json::to_string(&s).unwrap();
    let back: Scenario = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);

    let action: GameAction = serde_json::from_str(r#"{ "type": "raise", "amount": 6 }"#).unwrap();
    assert_eq!(action, GameAction::raise(6.0));
}
