//! Slot machine data structures.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;

/// Which of the three reels an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReelPosition {
    Left,
    Middle,
    Right,
}

/// A spin request for a single reel.
///
/// `Random` draws a uniform symbol. `Forced` lands on the given index
/// and is the rigged/testing pathway; the index must name a valid
/// symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelSpin {
    Random,
    Forced(usize),
}

/// One reel's landed symbol. Immutable once produced; consumed by the
/// evaluator and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelOutcome {
    pub position: ReelPosition,
    pub symbol: usize,
}

/// Win classification for a three-reel result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCategory {
    /// All three reels show the same symbol.
    TripleMatch,
    /// Exactly two of the three reels share a symbol.
    PartialMatch,
    /// All three symbols are distinct.
    NoMatch,
}

impl WinCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TripleMatch => "triple match",
            Self::PartialMatch => "partial match",
            Self::NoMatch => "no match",
        }
    }
}

/// Combat effect computed from a classified spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinEffect {
    /// Damage dealt to the opposing unit.
    Damage(i32),
    /// Healing applied to the acting unit, capped at its max HP.
    Heal(u32),
    /// Cosmetic outcome: no HP change on either side.
    Skip,
}

/// The full evaluation of one spin cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub left: usize,
    pub middle: usize,
    pub right: usize,
    pub category: WinCategory,
    pub effect: SpinEffect,
    /// True when applying `effect` leaves the opposing unit at or
    /// below zero HP. Never set by heals or cosmetic outcomes.
    pub ends_battle: bool,
}

impl SpinResult {
    pub fn symbols(&self) -> [usize; 3] {
        [self.left, self.middle, self.right]
    }
}

/// Display name for a symbol index.
pub fn symbol_name(symbol: usize) -> &'static str {
    SYMBOL_NAMES.get(symbol).copied().unwrap_or("Unknown")
}
