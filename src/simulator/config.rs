//! Simulation configuration.

/// Configuration for a batch of simulated battles.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to run
    pub num_battles: u32,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Maximum turn steps per battle before it counts as timed out
    pub max_turns_per_battle: u32,

    /// Probability that the player pulls the lever instead of using
    /// the basic attack
    pub spin_chance: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per battle)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_battles: 1000,
            seed: None,
            max_turns_per_battle: 1000,
            spin_chance: 0.75,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a deterministic smoke run.
    pub fn seeded(seed: u64, num_battles: u32) -> Self {
        Self {
            num_battles,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
