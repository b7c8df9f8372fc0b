// Slot machine symbols
pub const SYMBOL_COUNT: usize = 6;
pub const SYMBOL_NAMES: [&str; SYMBOL_COUNT] = [
    "Credit Card",
    "Whale",
    "Cherry",
    "Clover",
    "Diamond",
    "Seven",
];

// Triple-match sub-classification: these two symbols are pure flavor,
// every other symbol heals the acting unit.
pub const CREDIT_SYMBOL: usize = 0;
pub const WHALE_SYMBOL: usize = 1;

// Spin effect magnitudes
pub const TRIPLE_HEAL_AMOUNT: u32 = 10;
pub const PARTIAL_MATCH_DAMAGE: i32 = 6;

// Enemy behavior: a turn roll strictly above this skips the attack
// and the enemy re-rolls its turn.
pub const CHARM_PROBABILITY: f64 = 0.8;

// Default stat blocks: (level, max_hp, base_damage)
pub const PLAYER_NAME: &str = "Gambler";
pub const PLAYER_STATS: (u32, i32, i32) = (1, 50, 10);
pub const ENEMY_NAME: &str = "Pit Boss";
pub const ENEMY_STATS: (u32, i32, i32) = (1, 20, 7);

// Rolling dialogue log kept on the session
pub const DIALOGUE_LOG_CAPACITY: usize = 10;

// Presentation pacing hints (seconds). The simulation never waits on
// these; drivers with a display insert them between event beats.
pub const SETUP_DELAY_SECONDS: f64 = 7.0;
pub const NARRATIVE_BEAT_SECONDS: f64 = 2.0;
pub const SPIN_RESOLVE_SECONDS: f64 = 8.0;
