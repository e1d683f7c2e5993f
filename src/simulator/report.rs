//! Simulation report generation.

use super::runner::{FightOutcome, FightResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Results against one opponent type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnemyStats {
    pub fights: u32,
    pub wins: u32,
    pub turns: u64,
}

impl EnemyStats {
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64, self.fights as f64)
    }
}

/// Statistics for one simulated campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub battles: u32,
    pub victories: u32,
    pub defeats: u32,
    pub timeouts: u32,
    pub total_turns: u64,
    pub xp_gained: u64,
    pub gold_gained: u64,
    pub level_ups: u32,
    pub final_level: u32,
    pub per_enemy: BTreeMap<String, EnemyStats>,
}

impl RunStats {
    pub fn record(&mut self, enemy: &str, result: &FightResult) {
        self.battles += 1;
        self.total_turns += result.turns as u64;

        let entry = self.per_enemy.entry(enemy.to_string()).or_default();
        entry.fights += 1;
        entry.turns += result.turns as u64;

        match result.outcome {
            FightOutcome::Victory {
                xp,
                gold,
                leveled_up,
            } => {
                self.victories += 1;
                self.xp_gained += xp as u64;
                self.gold_gained += gold as u64;
                if leveled_up {
                    self.level_ups += 1;
                }
                entry.wins += 1;
            }
            FightOutcome::Defeat => self.defeats += 1,
            FightOutcome::TimedOut => self.timeouts += 1,
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub total_battles: u32,
    pub win_rate: f64,
    pub defeat_rate: f64,
    pub timeout_rate: f64,

    pub avg_turns_per_battle: f64,
    pub avg_xp_per_run: f64,
    pub avg_gold_per_run: f64,
    pub avg_final_level: f64,

    pub level_distribution: BTreeMap<u32, u32>,
    pub per_enemy: BTreeMap<String, EnemyStats>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_f = num_runs as f64;

        let total_battles: u32 = runs.iter().map(|r| r.battles).sum();
        let victories: u32 = runs.iter().map(|r| r.victories).sum();
        let defeats: u32 = runs.iter().map(|r| r.defeats).sum();
        let timeouts: u32 = runs.iter().map(|r| r.timeouts).sum();
        let total_turns: u64 = runs.iter().map(|r| r.total_turns).sum();
        let battles_f = total_battles as f64;

        let mut level_distribution = BTreeMap::new();
        let mut per_enemy: BTreeMap<String, EnemyStats> = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            for (name, stats) in &run.per_enemy {
                let entry = per_enemy.entry(name.clone()).or_default();
                entry.fights += stats.fights;
                entry.wins += stats.wins;
                entry.turns += stats.turns;
            }
        }

        Self {
            num_runs,
            total_battles,
            win_rate: ratio(victories as f64, battles_f),
            defeat_rate: ratio(defeats as f64, battles_f),
            timeout_rate: ratio(timeouts as f64, battles_f),
            avg_turns_per_battle: ratio(total_turns as f64, battles_f),
            avg_xp_per_run: ratio(runs.iter().map(|r| r.xp_gained as f64).sum(), runs_f),
            avg_gold_per_run: ratio(runs.iter().map(|r| r.gold_gained as f64).sum(), runs_f),
            avg_final_level: ratio(runs.iter().map(|r| r.final_level as f64).sum(), runs_f),
            level_distribution,
            per_enemy,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  ARENA SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, battles: {}\n\n",
            self.num_runs, self.total_battles
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Win Rate:        {:>5.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!("  Defeat Rate:     {:>5.1}%\n", self.defeat_rate * 100.0));
        report.push_str(&format!("  Timed Out:       {:>5.1}%\n", self.timeout_rate * 100.0));
        report.push_str(&format!(
            "  Avg Turns/Battle: {:.1}\n\n",
            self.avg_turns_per_battle
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg XP/Run:      {:.0}\n", self.avg_xp_per_run));
        report.push_str(&format!("  Avg Gold/Run:    {:.0}\n", self.avg_gold_per_run));
        report.push_str(&format!("  Avg Final Level: {:.2}\n\n", self.avg_final_level));

        report.push_str("── LEVEL DISTRIBUTION ───────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = ratio(*count as f64, self.num_runs as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── PER-ENEMY BREAKDOWN ──────────────────────────────────────────\n");
        report.push_str("  Enemy              Fights    Win %    Avg Turns\n");
        report.push_str("  ─────              ──────    ─────    ─────────\n");
        for (name, stats) in &self.per_enemy {
            report.push_str(&format!(
                "  {:<18} {:6}   {:5.1}   {:9.1}\n",
                name,
                stats.fights,
                stats.win_rate() * 100.0,
                ratio(stats.turns as f64, stats.fights as f64)
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        for (name, stats) in &self.per_enemy {
            if stats.fights > 0 && stats.win_rate() < 0.25 {
                report.push_str(&format!(
                    "  ⚠️  {} wins {:.0}% of fights - too strong?\n",
                    name,
                    (1.0 - stats.win_rate()) * 100.0
                ));
            }
        }
        if self.timeout_rate > 0.1 {
            report.push_str("  ⚠️  Many battles hit the turn cap - enemy hp too high?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
