//! Simulation runner driving the real `GameStore` with a scripted bot.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::combat::session::{BattleEvent, ItemKind};
use crate::combat::spells::{spell, SpellId};
use crate::combat::types::{random_town_enemy, BattleSource};
use crate::core::config::EngineConfig;
use crate::core::scheduler::InstantScheduler;
use crate::core::store::GameStore;
use crate::utils::persistence::MemorySlot;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

type SimStore = GameStore<MemorySlot, ChaCha8Rng>;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, {}W/{}L/{}T, {} turns, {} xp, {} gold",
                run_idx + 1,
                config.num_runs,
                run.final_level,
                run.victories,
                run.defeats,
                run.timeouts,
                run.total_turns,
                run.xp_gained,
                run.gold_gained
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one campaign of back-to-back town battles with a fresh player.
pub fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    // The store gets its own stream so enemy picks don't shift the damage rolls
    let store_rng = ChaCha8Rng::seed_from_u64(rng.gen());
    let mut store: SimStore = GameStore::load(MemorySlot::new(), store_rng, EngineConfig::instant());
    let mut stats = RunStats::default();

    for _ in 0..config.battles_per_run {
        let template = random_town_enemy(store.player().level, rng);
        let name = template.name.clone();

        store.restore_for_battle();
        store.start_battle(&template, BattleSource::Town);
        let result = fight(&mut store, config);

        stats.record(&name, &result);
    }

    stats.final_level = store.player().level;
    stats
}

/// How one simulated battle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    Victory { xp: u32, gold: u32, leveled_up: bool },
    Defeat,
    TimedOut,
}

#[derive(Debug, Clone, Copy)]
pub struct FightResult {
    pub outcome: FightOutcome,
    pub turns: u32,
}

fn fight(store: &mut SimStore, config: &SimConfig) -> FightResult {
    let mut scheduler = InstantScheduler;
    let mut turns = 0;
    let mut outcome = None;

    // A template that starts at 0 hp resolves without a single action
    collect_outcome(store.run_pending(&mut scheduler), &mut outcome);

    while store.in_battle() {
        if turns >= config.max_turns_per_battle {
            store.flee();
            return FightResult {
                outcome: FightOutcome::TimedOut,
                turns,
            };
        }
        turns += 1;
        take_turn(store, config.heal_threshold);
        collect_outcome(store.run_pending(&mut scheduler), &mut outcome);
    }

    FightResult {
        outcome: outcome.unwrap_or(FightOutcome::TimedOut),
        turns,
    }
}

fn collect_outcome(events: Vec<BattleEvent>, outcome: &mut Option<FightOutcome>) {
    for event in events {
        match event {
            BattleEvent::Victory { rewards } => {
                *outcome = Some(FightOutcome::Victory {
                    xp: rewards.xp,
                    gold: rewards.gold,
                    leveled_up: rewards.leveled_up,
                })
            }
            BattleEvent::Defeat => *outcome = Some(FightOutcome::Defeat),
            BattleEvent::EnemyTurnStarted | BattleEvent::EnemyAttacked { .. } => {}
        }
    }
}

/// Bot policy: potion when low, Fireball when affordable, otherwise attack.
fn take_turn(store: &mut SimStore, heal_threshold: f64) -> bool {
    let player = store.player();
    let low_hp = (player.hp as f64) < player.max_hp as f64 * heal_threshold;
    let can_drink = player.health_potions > 0;
    let can_cast = player.mp >= spell(SpellId::Fireball).cost;

    if low_hp && can_drink && store.use_item(ItemKind::HealthPotion) {
        return true;
    }
    if can_cast && store.cast_spell(SpellId::Fireball) {
        return true;
    }
    store.attack()
}
