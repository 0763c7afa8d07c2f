use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use crate::training_engine::{
    helpers::{board_str, card, correct, incorrect, unknown_action, unknown_scenario},
    models::{
        ActionKind, BoardTexture, EvaluationResult, FlopHolding, GameAction, Hand, PlayerCount,
        Position, Scenario, Stage, VillainType,
    },
};

pub const POT_BB: f64 = 20.0;
pub const STACK_BB: f64 = 100.0;
pub const VILLAIN_ACTION: &str = "Check-Raise";

/// Passive stations show up three times as often as each of the others.
const VILLAIN_WEIGHTS: [(VillainType, u32); 3] = [
    (VillainType::PassiveStation, 3),
    (VillainType::Maniac, 1),
    (VillainType::Nit, 1),
];

// ---------------------------------------------------------------------------
// Board exemplars and hero holdings
// ---------------------------------------------------------------------------

type Holding = (FlopHolding, &'static str);

/// How the hero's holding is picked for a texture.
enum Menu {
    /// Uniform over the listed holdings.
    Uniform(&'static [Holding]),
    /// Weighted ladder for boards without a curated menu.
    Ladder(&'static [(u32, FlopHolding, &'static str)]),
}

/// The fixed flop that stands for each texture.
pub fn board_for(texture: BoardTexture) -> [&'static str; 3] {
    match texture {
        BoardTexture::Dry      => ["Kh", "7d", "2c"],
        BoardTexture::Wet      => ["Jh", "Th", "8c"],
        BoardTexture::Paired   => ["Js", "6s", "6d"],
        BoardTexture::Monotone => ["Qs", "9s", "4s"],
    }
}

fn menu_for(texture: BoardTexture) -> Menu {
    match texture {
        BoardTexture::Dry => Menu::Uniform(&[
            (FlopHolding::Overpair, "AsAd"),
            (FlopHolding::TopPairTopKicker, "AcKs"),
            (FlopHolding::Set, "7s7c"),
        ]),
        BoardTexture::Wet => Menu::Uniform(&[
            (FlopHolding::Overpair, "QcQd"),
            (FlopHolding::TopPairTopKicker, "AcJs"),
            (FlopHolding::Set, "8d8s"),
            (FlopHolding::ComboDraw, "KhQh"),
            (FlopHolding::WeakDraw, "Qs3s"),
        ]),
        BoardTexture::Monotone => Menu::Uniform(&[
            (FlopHolding::Overpair, "KdKc"),
            (FlopHolding::TopPairTopKicker, "AdQc"),
            (FlopHolding::Set, "9d9h"),
            (FlopHolding::ComboDraw, "JsTd"),
            (FlopHolding::WeakDraw, "5s3h"),
        ]),
        // 30% overpair, 20% top pair, 20% set, 30% draw.
        BoardTexture::Paired => Menu::Ladder(&[
            (3, FlopHolding::Overpair, "QhQc"),
            (2, FlopHolding::TopPairTopKicker, "AcJh"),
            (2, FlopHolding::Set, "JcJd"),
            (3, FlopHolding::WeakDraw, "8s7s"),
        ]),
    }
}

fn pick_holding<R: Rng>(rng: &mut R, texture: BoardTexture) -> (FlopHolding, Hand) {
    let (holding, literal) = match menu_for(texture) {
        Menu::Uniform(options) => options[rng.gen_range(0..options.len())],
        Menu::Ladder(rungs) => {
            let weights = WeightedIndex::new(rungs.iter().map(|&(w, _, _)| w))
                .unwrap_or_else(|e| unreachable!("ladder weights are static and positive: {e}"));
            let (_, holding, literal) = rungs[weights.sample(rng)];
            (holding, literal)
        }
    };
    let hand = literal
        .parse()
        .unwrap_or_else(|e| panic!("bad holding literal {literal:?}: {e}"));
    (holding, hand)
}

fn pick_villain<R: Rng>(rng: &mut R) -> VillainType {
    let weights = WeightedIndex::new(VILLAIN_WEIGHTS.iter().map(|&(_, w)| w))
        .unwrap_or_else(|e| unreachable!("villain weights are static and positive: {e}"));
    VILLAIN_WEIGHTS[weights.sample(rng)].0
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

pub fn generate<R: Rng>(rng: &mut R, player_count: PlayerCount) -> Scenario {
    let villain = pick_villain(rng);
    let texture = BoardTexture::ALL[rng.gen_range(0..BoardTexture::ALL.len())];
    let board: Vec<_> = board_for(texture).iter().map(|s| card(s)).collect();
    let (holding, hero_hand) = pick_holding(rng, texture);

    let description = format!(
        "You raised preflop on the Button and continuation-bet the {texture} flop ({}). \
         The {villain} check-raises. You hold {hero_hand}, {holding}.",
        board_str(&board),
    );

    Scenario {
        hero_position: Position::BTN,
        hero_hand,
        limpers: 0,
        is_straddled: false,
        pot_size: POT_BB,
        stack_size: STACK_BB,
        player_count,
        description,
        stage: Stage::Flop,
        board,
        texture: Some(texture),
        villain_type: Some(villain),
        villain_action: Some(VILLAIN_ACTION.to_string()),
        holding: Some(holding),
    }
}

// ---------------------------------------------------------------------------
// Judge
// ---------------------------------------------------------------------------

pub fn evaluate(scenario: &Scenario, action: &GameAction) -> EvaluationResult {
    let (Some(villain), Some(holding)) = (scenario.villain_type, scenario.holding) else {
        return unknown_scenario();
    };
    if scenario.board.len() != 3 {
        return unknown_scenario();
    }

    match villain {
        VillainType::PassiveStation | VillainType::Nit => versus_tight_raise(villain, holding, action.kind),
        VillainType::Maniac => versus_maniac(holding, action.kind),
    }
}

/// A check-raise from a player who rarely bluffs means a strong hand.
fn versus_tight_raise(villain: VillainType, holding: FlopHolding, kind: ActionKind) -> EvaluationResult {
    use FlopHolding::*;

    match (kind, holding) {
        (ActionKind::Fold, Overpair | TopPairTopKicker | WeakDraw) => correct(format!(
            "Correct. A {villain} almost never check-raises as a bluff. With {holding} you are \
             behind most of that range, so let it go."
        )),
        (ActionKind::Fold, Set) => incorrect(
            "Incorrect. A set is near the top of your range here. Never fold it to a check-raise.",
        ),
        (ActionKind::Fold, ComboDraw) => incorrect(
            "Incorrect. A combo draw has too much equity to fold. Re-raise and use your fold equity.",
        ),

        (ActionKind::Raise, Set) => correct(
            "Correct. Fast-play your set. The board can only get scarier and the check-raiser \
             will pay you off with strong one-pair hands and draws.",
        ),
        (ActionKind::Raise, ComboDraw) => correct(
            "Correct. Re-raising a combo draw wins the pot outright when they fold and keeps \
             plenty of equity when they call.",
        ),
        (ActionKind::Raise, Overpair | TopPairTopKicker | WeakDraw) => incorrect(format!(
            "Incorrect. Re-raising {holding} only gets called by hands that beat you. \
             Against a {villain} check-raise, fold."
        )),

        (ActionKind::Call, Set) => correct(
            "Correct. Calling with a set keeps the bluffs and weaker value hands in.",
        ),
        (ActionKind::Call, ComboDraw) => incorrect(
            "Incorrect. A passive call wastes your fold equity. Re-raise the combo draw.",
        ),
        (ActionKind::Call, Overpair | TopPairTopKicker | WeakDraw) => incorrect(format!(
            "Incorrect. Calling with {holding} pays off a range that is ahead of you. Fold."
        )),

        (ActionKind::Check, _) => unknown_action(),
    }
}

/// A maniac check-raises with air often enough that folding is a mistake.
fn versus_maniac(holding: FlopHolding, kind: ActionKind) -> EvaluationResult {
    match kind {
        ActionKind::Fold => incorrect(format!(
            "Incorrect. A Maniac check-raises with a very wide range. {} is too strong to fold.",
            capitalise(&holding.to_string())
        )),
        ActionKind::Call => correct(
            "Correct. Calling down keeps the Maniac bluffing into you on later streets.",
        ),
        ActionKind::Raise => correct(
            "Correct. Re-raising isolates the Maniac's wide range and gets value from worse hands.",
        ),
        ActionKind::Check => unknown_action(),
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
