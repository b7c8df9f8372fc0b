//! Simulation report generation.

use serde::Serialize;

use crate::battle::types::BattleOutcome;

/// Statistics tracked for a single simulated battle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BattleStats {
    pub outcome: Option<BattleOutcome>,
    pub turns: u32,
    pub triple_matches: u32,
    pub partial_matches: u32,
    pub no_matches: u32,
    pub charm_skips: u32,
    pub final_player_hp: i32,
    pub final_enemy_hp: i32,
}

/// Aggregated results from a batch of simulated battles.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,
    pub win_rate: f64,
    pub avg_turns: f64,

    // Spin analysis
    pub total_spins: u32,
    pub triple_matches: u32,
    pub partial_matches: u32,
    pub no_matches: u32,
    pub charm_skips: u32,

    // Individual battle stats for detailed analysis
    pub battle_stats: Vec<BattleStats>,
}

impl SimReport {
    /// Create a report from completed battle stats.
    pub fn from_battles(battles: Vec<BattleStats>) -> Self {
        let num_battles = battles.len() as u32;
        let wins = battles
            .iter()
            .filter(|b| b.outcome == Some(BattleOutcome::Won))
            .count() as u32;
        let losses = battles
            .iter()
            .filter(|b| b.outcome == Some(BattleOutcome::Lost))
            .count() as u32;
        let timeouts = num_battles - wins - losses;

        let avg_turns =
            battles.iter().map(|b| b.turns as f64).sum::<f64>() / num_battles.max(1) as f64;

        let triple_matches = battles.iter().map(|b| b.triple_matches).sum::<u32>();
        let partial_matches = battles.iter().map(|b| b.partial_matches).sum::<u32>();
        let no_matches = battles.iter().map(|b| b.no_matches).sum::<u32>();
        let charm_skips = battles.iter().map(|b| b.charm_skips).sum::<u32>();
        let total_spins = triple_matches + partial_matches + no_matches;

        let win_rate = wins as f64 / num_battles.max(1) as f64;

        Self {
            num_battles,
            wins,
            losses,
            timeouts,
            win_rate,
            avg_turns,
            total_spins,
            triple_matches,
            partial_matches,
            no_matches,
            charm_skips,
            battle_stats: battles,
        }
    }

    /// Human-readable summary table.
    pub fn to_text(&self) -> String {
        let spin_pct = |count: u32| {
            if self.total_spins == 0 {
                0.0
            } else {
                100.0 * count as f64 / self.total_spins as f64
            }
        };

        let mut out = String::new();
        out.push_str("=== Battle Simulation Report ===\n");
        out.push_str(&format!("Battles:          {}\n", self.num_battles));
        out.push_str(&format!(
            "Wins:             {} ({:.1}%)\n",
            self.wins,
            self.win_rate * 100.0
        ));
        out.push_str(&format!("Losses:           {}\n", self.losses));
        out.push_str(&format!("Timeouts:         {}\n", self.timeouts));
        out.push_str(&format!("Avg turns:        {:.1}\n", self.avg_turns));
        out.push('\n');
        out.push_str(&format!("Total spins:      {}\n", self.total_spins));
        out.push_str(&format!(
            "  Triple match:   {} ({:.1}%)\n",
            self.triple_matches,
            spin_pct(self.triple_matches)
        ));
        out.push_str(&format!(
            "  Partial match:  {} ({:.1}%)\n",
            self.partial_matches,
            spin_pct(self.partial_matches)
        ));
        out.push_str(&format!(
            "  No match:       {} ({:.1}%)\n",
            self.no_matches,
            spin_pct(self.no_matches)
        ));
        out.push_str(&format!("Charm re-rolls:   {}\n", self.charm_skips));
        out
    }

    /// Full report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
