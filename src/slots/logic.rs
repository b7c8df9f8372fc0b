//! Reel resolution and spin evaluation.
//!
//! Resolution is the only randomized step; evaluation is a pure
//! function of the three landed symbols and the two units' stats.

use rand::Rng;

use super::types::*;
use crate::battle::types::Unit;
use crate::core::constants::*;

/// Resolve a single reel. Stateless: each call is independent of any
/// prior spin. A forced index must be a valid symbol.
pub fn resolve_reel<R: Rng>(rng: &mut R, position: ReelPosition, spin: ReelSpin) -> ReelOutcome {
    let symbol = match spin {
        ReelSpin::Random => rng.gen_range(0..SYMBOL_COUNT),
        ReelSpin::Forced(index) => {
            assert!(
                index < SYMBOL_COUNT,
                "forced symbol index {} out of range",
                index
            );
            index
        }
    };
    ReelOutcome { position, symbol }
}

/// Resolve all three reels, left to right.
pub fn resolve_spin<R: Rng>(rng: &mut R, spins: [ReelSpin; 3]) -> [ReelOutcome; 3] {
    [
        resolve_reel(rng, ReelPosition::Left, spins[0]),
        resolve_reel(rng, ReelPosition::Middle, spins[1]),
        resolve_reel(rng, ReelPosition::Right, spins[2]),
    ]
}

/// Classify three landed symbols into a win category.
pub fn classify(left: usize, middle: usize, right: usize) -> WinCategory {
    if left == middle && middle == right {
        WinCategory::TripleMatch
    } else if left == middle || left == right || middle == right {
        WinCategory::PartialMatch
    } else {
        WinCategory::NoMatch
    }
}

/// Evaluate a resolved spin into its combat effect.
///
/// Triple matches on the credit or whale symbol are pure flavor; any
/// other triple heals the acting unit. A two-symbol match deals the
/// fixed money damage; three distinct symbols fall back to the acting
/// unit's base damage. Units are read, never mutated; the caller
/// applies the effect.
pub fn evaluate_spin(outcomes: &[ReelOutcome; 3], acting: &Unit, opposing: &Unit) -> SpinResult {
    for outcome in outcomes {
        assert!(
            outcome.symbol < SYMBOL_COUNT,
            "symbol index {} out of range",
            outcome.symbol
        );
    }
    let (left, middle, right) = (outcomes[0].symbol, outcomes[1].symbol, outcomes[2].symbol);

    let category = classify(left, middle, right);
    let effect = match category {
        WinCategory::TripleMatch => match left {
            CREDIT_SYMBOL | WHALE_SYMBOL => SpinEffect::Skip,
            _ => SpinEffect::Heal(TRIPLE_HEAL_AMOUNT),
        },
        WinCategory::PartialMatch => SpinEffect::Damage(PARTIAL_MATCH_DAMAGE),
        WinCategory::NoMatch => SpinEffect::Damage(acting.base_damage),
    };

    // Healing never ends the battle; damage is checked against the
    // opposing unit's HP before it is applied.
    let ends_battle = match effect {
        SpinEffect::Damage(amount) => opposing.current_hp - amount <= 0,
        SpinEffect::Heal(_) | SpinEffect::Skip => false,
    };

    SpinResult {
        left,
        middle,
        right,
        category,
        effect,
        ends_battle,
    }
}
