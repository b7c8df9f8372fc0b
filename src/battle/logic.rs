//! Battle state machine transitions.
//!
//! Every transition returns the events it produced; presentation
//! drivers replay them with pacing, headless drivers apply them
//! immediately. The enemy turn is pumped one attempt at a time: a
//! charmed enemy leaves the phase at `EnemyTurn`, so the driver calls
//! `advance_enemy_turn` again until the enemy lands a real attack.

use rand::Rng;

use super::types::*;
use crate::core::constants::*;
use crate::slots::logic::{evaluate_spin, resolve_spin};
use crate::slots::types::{symbol_name, ReelSpin, SpinEffect, SpinResult, WinCategory};

/// One-time setup: announce the encounter and hand the first turn to
/// the player. Ignored outside `Start`.
pub fn begin_battle(session: &mut BattleSession) -> Vec<BattleEvent> {
    if session.phase != BattlePhase::Start {
        return Vec::new();
    }
    let mut events = Vec::new();
    let line = format!("A wild {} approaches...", session.enemy.name);
    dialogue(session, &mut events, line);
    start_player_turn(session, &mut events);
    events
}

/// Player action: plain attack with the player's base damage.
/// Ignored outside the player's turn; an accepted action consumes it.
pub fn request_basic_attack(session: &mut BattleSession) -> Vec<BattleEvent> {
    if session.phase != BattlePhase::PlayerTurn {
        return Vec::new();
    }
    let mut events = Vec::new();

    let enemy_dead = session.enemy.take_damage(session.player.base_damage as u32);
    events.push(BattleEvent::HpChanged {
        side: Side::Enemy,
        new_hp: session.enemy.current_hp,
    });
    dialogue(session, &mut events, "The attack is successful!".to_string());

    finish_player_action(session, &mut events, enemy_dead);
    events
}

/// Player action: pull the lever. Resolves the three reels, evaluates
/// the result, and applies its effect in one atomic step. Ignored
/// outside the player's turn. `[ReelSpin::Random; 3]` is the normal
/// pathway; forced spins rig individual reels.
pub fn request_spin<R: Rng>(
    session: &mut BattleSession,
    rng: &mut R,
    spins: [ReelSpin; 3],
) -> Vec<BattleEvent> {
    if session.phase != BattlePhase::PlayerTurn {
        return Vec::new();
    }
    let mut events = Vec::new();

    let outcomes = resolve_spin(rng, spins);
    let result = evaluate_spin(&outcomes, &session.player, &session.enemy);
    events.push(BattleEvent::SpinResolved { result });
    dialogue(session, &mut events, flavor_line(&result));

    let mut enemy_dead = false;
    match result.effect {
        SpinEffect::Skip => {}
        SpinEffect::Heal(amount) => {
            session.player.heal(amount);
            events.push(BattleEvent::HpChanged {
                side: Side::Player,
                new_hp: session.player.current_hp,
            });
        }
        SpinEffect::Damage(amount) => {
            enemy_dead = session.enemy.take_damage(amount as u32);
            events.push(BattleEvent::HpChanged {
                side: Side::Enemy,
                new_hp: session.enemy.current_hp,
            });
        }
    }

    finish_player_action(session, &mut events, enemy_dead);
    events
}

/// One enemy attempt. A roll strictly above `CHARM_PROBABILITY` skips
/// the attack without touching either unit and leaves the phase at
/// `EnemyTurn` for another attempt; otherwise the enemy strikes and
/// the turn passes. Ignored outside the enemy's turn.
pub fn advance_enemy_turn<R: Rng>(session: &mut BattleSession, rng: &mut R) -> Vec<BattleEvent> {
    if session.phase != BattlePhase::EnemyTurn {
        return Vec::new();
    }
    let mut events = Vec::new();
    let line = format!("{} attacks!", session.enemy.name);
    dialogue(session, &mut events, line);

    let probability = rng.gen::<f64>();
    if probability > CHARM_PROBABILITY {
        events.push(BattleEvent::EnemyCharmed);
        dialogue(session, &mut events, "Get Charmed!!!".to_string());
        dialogue(session, &mut events, "Your turn is skipped.".to_string());
        return events;
    }

    let player_dead = session.player.take_damage(session.enemy.base_damage as u32);
    events.push(BattleEvent::HpChanged {
        side: Side::Player,
        new_hp: session.player.current_hp,
    });

    if player_dead {
        end_battle(session, &mut events, BattleOutcome::Lost);
    } else {
        start_player_turn(session, &mut events);
    }
    events
}

fn start_player_turn(session: &mut BattleSession, events: &mut Vec<BattleEvent>) {
    session.phase = BattlePhase::PlayerTurn;
    dialogue(session, events, "PULL THE LEVER!".to_string());
}

fn finish_player_action(
    session: &mut BattleSession,
    events: &mut Vec<BattleEvent>,
    enemy_dead: bool,
) {
    if enemy_dead {
        end_battle(session, events, BattleOutcome::Won);
    } else {
        session.phase = BattlePhase::EnemyTurn;
    }
}

fn end_battle(session: &mut BattleSession, events: &mut Vec<BattleEvent>, outcome: BattleOutcome) {
    session.phase = match outcome {
        BattleOutcome::Won => BattlePhase::Won,
        BattleOutcome::Lost => BattlePhase::Lost,
    };
    let line = match outcome {
        BattleOutcome::Won => "You won the battle!",
        BattleOutcome::Lost => "You were defeated.",
    };
    dialogue(session, events, line.to_string());
    events.push(BattleEvent::BattleEnded(outcome));
}

fn dialogue(session: &mut BattleSession, events: &mut Vec<BattleEvent>, line: String) {
    session.push_dialogue(line.clone());
    events.push(BattleEvent::Dialogue(line));
}

fn flavor_line(result: &SpinResult) -> String {
    match result.category {
        WinCategory::TripleMatch => match result.left {
            CREDIT_SYMBOL => "Get Credit Carded!!".to_string(),
            WHALE_SYMBOL => "Get Whaled!!!!!!!!".to_string(),
            _ => "Heal yourself of your emotional pains!".to_string(),
        },
        WinCategory::PartialMatch => "Make it rain!!".to_string(),
        WinCategory::NoMatch => format!(
            "{} | {} | {}... no luck. A desperate swing!",
            symbol_name(result.left),
            symbol_name(result.middle),
            symbol_name(result.right)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Rng stub returning a fixed word, to pin the charm branch:
    /// `u64::MAX` maps to ~1.0 (charm), `0` maps to 0.0 (attack).
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest.iter_mut() {
                *byte = self.0 as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn charm_rng() -> ConstRng {
        ConstRng(u64::MAX)
    }

    fn attack_rng() -> ConstRng {
        ConstRng(0)
    }

    fn session_in_player_turn() -> BattleSession {
        let mut session = BattleSession::with_default_units();
        begin_battle(&mut session);
        assert_eq!(session.phase(), BattlePhase::PlayerTurn);
        session
    }

    fn has_dialogue(events: &[BattleEvent], needle: &str) -> bool {
        events.iter().any(|e| match e {
            BattleEvent::Dialogue(line) => line.contains(needle),
            _ => false,
        })
    }

    #[test]
    fn test_begin_battle_announces_and_hands_turn_to_player() {
        let mut session = BattleSession::with_default_units();
        let events = begin_battle(&mut session);

        assert!(has_dialogue(&events, "A wild Pit Boss approaches..."));
        assert!(has_dialogue(&events, "PULL THE LEVER!"));
        assert_eq!(session.phase(), BattlePhase::PlayerTurn);
        assert!(session.can_accept_spin_input());
    }

    #[test]
    fn test_begin_battle_only_from_start() {
        let mut session = session_in_player_turn();
        assert!(begin_battle(&mut session).is_empty());
        assert_eq!(session.phase(), BattlePhase::PlayerTurn);
    }

    #[test]
    fn test_basic_attack_damages_enemy_and_passes_turn() {
        let mut session = session_in_player_turn();
        let events = request_basic_attack(&mut session);

        assert_eq!(session.enemy().current_hp, 20 - 10);
        assert!(events.iter().any(|e| matches!(
            e,
            BattleEvent::HpChanged {
                side: Side::Enemy,
                new_hp: 10
            }
        )));
        assert!(has_dialogue(&events, "The attack is successful!"));
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_basic_attack_lethal_wins_battle() {
        let mut session = session_in_player_turn();
        session.enemy.current_hp = 5;

        let events = request_basic_attack(&mut session);

        assert_eq!(session.phase(), BattlePhase::Won);
        assert_eq!(session.outcome(), Some(BattleOutcome::Won));
        assert_eq!(session.enemy().current_hp, -5);
        assert!(events.contains(&BattleEvent::BattleEnded(BattleOutcome::Won)));
        assert!(has_dialogue(&events, "You won the battle!"));
    }

    #[test]
    fn test_second_action_in_same_turn_is_ignored() {
        let mut session = session_in_player_turn();
        request_basic_attack(&mut session);
        let enemy_hp = session.enemy().current_hp;

        // The turn is consumed; both entry points no-op now
        assert!(request_basic_attack(&mut session).is_empty());
        assert!(request_spin(&mut session, &mut attack_rng(), [ReelSpin::Random; 3]).is_empty());
        assert_eq!(session.enemy().current_hp, enemy_hp);
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_actions_ignored_in_terminal_phase() {
        let mut session = session_in_player_turn();
        session.enemy.current_hp = 1;
        request_basic_attack(&mut session);
        assert_eq!(session.phase(), BattlePhase::Won);

        assert!(request_basic_attack(&mut session).is_empty());
        assert!(request_spin(&mut session, &mut attack_rng(), [ReelSpin::Random; 3]).is_empty());
        assert!(advance_enemy_turn(&mut session, &mut attack_rng()).is_empty());
        assert!(!session.can_accept_spin_input());
    }

    #[test]
    fn test_spin_heal_triple_heals_player_and_passes_turn() {
        let mut session = session_in_player_turn();
        session.player.current_hp = 45;

        let spins = [ReelSpin::Forced(2); 3];
        let events = request_spin(&mut session, &mut attack_rng(), spins);

        // Heal of 10 capped at max 50; enemy untouched
        assert_eq!(session.player().current_hp, 50);
        assert_eq!(session.enemy().current_hp, 20);
        assert!(has_dialogue(&events, "Heal yourself of your emotional pains!"));
        assert!(events.iter().any(|e| matches!(
            e,
            BattleEvent::HpChanged {
                side: Side::Player,
                new_hp: 50
            }
        )));
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_spin_flavor_triples_change_no_hp() {
        for (symbol, line) in [(CREDIT_SYMBOL, "Get Credit Carded!!"), (WHALE_SYMBOL, "Get Whaled!!!!!!!!")] {
            let mut session = session_in_player_turn();
            let events = request_spin(&mut session, &mut attack_rng(), [ReelSpin::Forced(symbol); 3]);

            assert_eq!(session.player().current_hp, 50);
            assert_eq!(session.enemy().current_hp, 20);
            assert!(has_dialogue(&events, line));
            assert!(!events.iter().any(|e| matches!(e, BattleEvent::HpChanged { .. })));
            assert_eq!(session.phase(), BattlePhase::EnemyTurn);
        }
    }

    #[test]
    fn test_spin_partial_match_deals_fixed_damage() {
        let mut session = session_in_player_turn();
        let spins = [ReelSpin::Forced(3), ReelSpin::Forced(3), ReelSpin::Forced(5)];
        let events = request_spin(&mut session, &mut attack_rng(), spins);

        assert_eq!(session.enemy().current_hp, 20 - PARTIAL_MATCH_DAMAGE);
        assert!(has_dialogue(&events, "Make it rain!!"));
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_spin_no_match_lethal_wins() {
        let mut session = session_in_player_turn();
        session.enemy.current_hp = 5;

        let spins = [ReelSpin::Forced(0), ReelSpin::Forced(1), ReelSpin::Forced(2)];
        let events = request_spin(&mut session, &mut attack_rng(), spins);

        // Base damage 10 against 5 HP: overshoot recorded, battle won
        assert_eq!(session.enemy().current_hp, -5);
        assert_eq!(session.phase(), BattlePhase::Won);
        assert!(events.contains(&BattleEvent::BattleEnded(BattleOutcome::Won)));

        let resolved = events.iter().find_map(|e| match e {
            BattleEvent::SpinResolved { result } => Some(*result),
            _ => None,
        });
        let result = resolved.expect("spin should resolve");
        assert_eq!(result.category, WinCategory::NoMatch);
        assert!(result.ends_battle);
    }

    #[test]
    fn test_enemy_charm_keeps_enemy_turn_and_mutates_nothing() {
        let mut session = session_in_player_turn();
        request_basic_attack(&mut session);
        let player_hp = session.player().current_hp;
        let enemy_hp = session.enemy().current_hp;

        let events = advance_enemy_turn(&mut session, &mut charm_rng());

        assert!(events.contains(&BattleEvent::EnemyCharmed));
        assert!(has_dialogue(&events, "Get Charmed!!!"));
        assert!(has_dialogue(&events, "Your turn is skipped."));
        assert_eq!(session.player().current_hp, player_hp);
        assert_eq!(session.enemy().current_hp, enemy_hp);
        // Deliberate re-roll: the enemy keeps its turn, not the player
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_charmed_enemy_eventually_attacks_when_pumped() {
        let mut session = session_in_player_turn();
        request_basic_attack(&mut session);

        // Two charms, then a real attack
        advance_enemy_turn(&mut session, &mut charm_rng());
        advance_enemy_turn(&mut session, &mut charm_rng());
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);

        let events = advance_enemy_turn(&mut session, &mut attack_rng());
        assert_eq!(session.player().current_hp, 50 - 7);
        assert!(events.iter().any(|e| matches!(
            e,
            BattleEvent::HpChanged {
                side: Side::Player,
                ..
            }
        )));
        assert_eq!(session.phase(), BattlePhase::PlayerTurn);
    }

    #[test]
    fn test_enemy_attack_lethal_loses_battle() {
        let mut session = session_in_player_turn();
        request_basic_attack(&mut session);
        session.player.current_hp = 3;

        let events = advance_enemy_turn(&mut session, &mut attack_rng());

        assert_eq!(session.phase(), BattlePhase::Lost);
        assert_eq!(session.outcome(), Some(BattleOutcome::Lost));
        assert_eq!(session.player().current_hp, 3 - 7);
        assert!(events.contains(&BattleEvent::BattleEnded(BattleOutcome::Lost)));
        assert!(has_dialogue(&events, "You were defeated."));
    }

    #[test]
    fn test_enemy_turn_ignored_outside_enemy_phase() {
        let mut session = session_in_player_turn();
        assert!(advance_enemy_turn(&mut session, &mut attack_rng()).is_empty());
        assert_eq!(session.phase(), BattlePhase::PlayerTurn);
    }

    #[test]
    fn test_heal_spin_scenario_from_low_hp() {
        // Player 50 max at 30 HP, spin (2,2,2): heal to 40, enemy unchanged
        let mut session = session_in_player_turn();
        session.player.current_hp = 30;

        request_spin(&mut session, &mut attack_rng(), [ReelSpin::Forced(2); 3]);

        assert_eq!(session.player().current_hp, 40);
        assert_eq!(session.enemy().current_hp, 20);
        assert_eq!(session.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_dialogue_log_mirrors_events() {
        let mut session = BattleSession::with_default_units();
        begin_battle(&mut session);
        assert!(session
            .dialogue_log()
            .iter()
            .any(|line| line.contains("approaches")));
    }
}
