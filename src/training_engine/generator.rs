use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    models::{PlayerCount, Scenario, ScenarioRequest, StageSelector},
    topics,
};

/// A random preflop spot: position, limpers, straddle and a weighted hand.
pub fn generate_scenario<R: Rng>(rng: &mut R, player_count: PlayerCount) -> Scenario {
    let scenario = topics::preflop::generate(rng, player_count);
    debug!(
        "preflop scenario: {} {} limpers={} straddled={}",
        scenario.hero_position,
        scenario.hero_hand.notation(),
        scenario.limpers,
        scenario.is_straddled
    );
    scenario
}

/// A random flop spot where the hero's c-bet is check-raised.
pub fn generate_postflop_scenario<R: Rng>(rng: &mut R, player_count: PlayerCount) -> Scenario {
    let scenario = topics::postflop::generate(rng, player_count);
    debug!(
        "flop scenario: villain={:?} texture={:?} holding={:?}",
        scenario.villain_type, scenario.texture, scenario.holding
    );
    scenario
}

/// Seeded entry point: builds the RNG from the request and dispatches on stage.
pub fn generate_training(request: ScenarioRequest) -> Scenario {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let flop = match request.stage {
        StageSelector::Preflop => false,
        StageSelector::Flop    => true,
        StageSelector::Any     => rng.gen_bool(0.5),
    };

    if flop {
        generate_postflop_scenario(&mut rng, request.player_count)
    } else {
        generate_scenario(&mut rng, request.player_count)
    }
}
