//! Headless battle runner.
//!
//! Drives `BattleSession` with no presentation pacing: the enemy turn
//! is pumped until it cedes, and statistics are tracked externally
//! from the emitted events.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{BattleStats, SimReport};
use crate::battle::logic::{advance_enemy_turn, begin_battle, request_basic_attack, request_spin};
use crate::battle::types::{BattleEvent, BattlePhase, BattleSession};
use crate::slots::types::{ReelSpin, WinCategory};

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_battles = Vec::with_capacity(config.num_battles as usize);

    for battle_idx in 0..config.num_battles {
        // Per-battle RNG so individual battles are reproducible
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + battle_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_battle(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Battle {}/{} - {:?} in {} turns (player {} HP, enemy {} HP)",
                battle_idx + 1,
                config.num_battles,
                stats.outcome,
                stats.turns,
                stats.final_player_hp,
                stats.final_enemy_hp
            );
        }

        all_battles.push(stats);
    }

    SimReport::from_battles(all_battles)
}

/// Play one battle to its end (or the turn cap).
fn simulate_single_battle<R: Rng>(config: &SimConfig, rng: &mut R) -> BattleStats {
    let mut session = BattleSession::with_default_units();
    let mut stats = BattleStats::default();

    track_events(&mut stats, &begin_battle(&mut session));

    let mut turns = 0u32;
    while session.outcome().is_none() && turns < config.max_turns_per_battle {
        turns += 1;
        let events = if rng.gen::<f64>() < config.spin_chance {
            request_spin(&mut session, rng, [ReelSpin::Random; 3])
        } else {
            request_basic_attack(&mut session)
        };
        track_events(&mut stats, &events);

        // Charm re-rolls count against the turn cap so a battle can
        // never spin forever
        while session.phase() == BattlePhase::EnemyTurn && turns < config.max_turns_per_battle {
            turns += 1;
            let events = advance_enemy_turn(&mut session, rng);
            track_events(&mut stats, &events);
        }
    }

    stats.turns = turns;
    stats.outcome = session.outcome();
    stats.final_player_hp = session.player().current_hp;
    stats.final_enemy_hp = session.enemy().current_hp;
    stats
}

fn track_events(stats: &mut BattleStats, events: &[BattleEvent]) {
    for event in events {
        match event {
            BattleEvent::SpinResolved { result } => match result.category {
                WinCategory::TripleMatch => stats.triple_matches += 1,
                WinCategory::PartialMatch => stats.partial_matches += 1,
                WinCategory::NoMatch => stats.no_matches += 1,
            },
            BattleEvent::EnemyCharmed => stats.charm_skips += 1,
            _ => {}
        }
    }
}
