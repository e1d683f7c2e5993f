//! The turn state machine for a single battle.
//!
//! Every accepted action mutates the combatants right away and leaves exactly
//! one pending [`Continuation`] behind. Time only moves when the owner calls
//! [`BattleSession::advance`] or [`BattleSession::fire_pending`].

use super::math::{roll_enemy_attack, roll_player_attack};
use super::spells::{spell, SpellEffect, SpellId};
use super::types::{BattleSource, Enemy, EnemyTemplate};
use crate::character::player::Player;
use crate::character::progression::{award_victory, BattleRewards};
use crate::core::config::EngineConfig;
use crate::core::constants::MAX_BATTLE_LOG;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl BattlePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, BattlePhase::Victory | BattlePhase::Defeat)
    }
}

/// Consumables usable from the battle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    HealthPotion,
    ManaPotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationKind {
    /// Player's action finished playing; the enemy takes the turn
    EndPlayerAction,
    EnemyAction,
    ResolveVictory,
    ResolveDefeat,
}

/// A delayed step waiting to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub delay: Duration,
    pub kind: ContinuationKind,
}

/// What happened when a continuation fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    EnemyTurnStarted,
    EnemyAttacked { damage: u32 },
    Victory { rewards: BattleRewards },
    Defeat,
}

#[derive(Debug, Clone)]
pub struct BattleSession {
    enemy: Enemy,
    phase: BattlePhase,
    source: BattleSource,
    turn: u32,
    log: VecDeque<String>,
    pending: Option<Continuation>,
    waited: Duration,
}

impl BattleSession {
    pub fn new(template: &EnemyTemplate, source: BattleSource) -> Self {
        Self {
            enemy: Enemy::from_template(template),
            phase: BattlePhase::PlayerTurn,
            source,
            turn: 1,
            log: VecDeque::new(),
            pending: None,
            waited: Duration::ZERO,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn source(&self) -> BattleSource {
        self.source
    }

    /// Round counter, bumped each time control returns to the player.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn last_log(&self) -> Option<&str> {
        self.log.back().map(String::as_str)
    }

    pub fn pending(&self) -> Option<Continuation> {
        self.pending
    }

    /// True while a continuation is pending. No player action is accepted.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// True once victory or defeat has been scheduled or reached.
    pub fn is_resolving(&self) -> bool {
        self.phase.is_terminal()
            || matches!(
                self.pending.map(|c| c.kind),
                Some(ContinuationKind::ResolveVictory | ContinuationKind::ResolveDefeat)
            )
    }

    pub fn can_act(&self) -> bool {
        self.phase == BattlePhase::PlayerTurn && self.pending.is_none()
    }

    /// Fleeing stays open until victory or defeat actually fires, and
    /// forfeits a pending victory.
    pub fn can_flee(&self) -> bool {
        !self.phase.is_terminal()
    }

    fn push_log(&mut self, line: String) {
        tracing::debug!(target: "battle", "{}", line);
        if self.log.len() == MAX_BATTLE_LOG {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }

    fn schedule(&mut self, kind: ContinuationKind, delay: Duration) {
        self.pending = Some(Continuation { delay, kind });
        self.waited = Duration::ZERO;
    }

    /// Schedules victory or defeat if either side is down. The enemy is
    /// checked first, so a double knockout is a win.
    pub fn check_resolution(&mut self, player: &Player, config: &EngineConfig) -> bool {
        if self.is_resolving() {
            return true;
        }
        if !self.enemy.is_alive() {
            self.schedule(ContinuationKind::ResolveVictory, config.resolution_delay);
            return true;
        }
        if !player.is_alive() {
            self.schedule(ContinuationKind::ResolveDefeat, config.resolution_delay);
            return true;
        }
        false
    }

    fn finish_player_action(&mut self, player: &Player, config: &EngineConfig) {
        if !self.check_resolution(player, config) {
            self.schedule(ContinuationKind::EndPlayerAction, config.player_action_delay);
        }
    }

    pub fn attack(&mut self, player: &mut Player, rng: &mut impl Rng, config: &EngineConfig) -> bool {
        if !self.can_act() {
            return false;
        }

        let damage = roll_player_attack(rng);
        self.enemy.take_damage(damage);
        self.push_log(format!(
            "{} attacks {} for {} damage!",
            player.name, self.enemy.name, damage
        ));
        self.finish_player_action(player, config);
        true
    }

    /// Casts a spell. Short on mp logs "Not enough MP!" and changes nothing else.
    pub fn cast_spell(&mut self, player: &mut Player, id: SpellId, config: &EngineConfig) -> bool {
        if !self.can_act() {
            return false;
        }

        let spell = spell(id);
        if !player.spend_mp(spell.cost) {
            self.push_log("Not enough MP!".to_string());
            return false;
        }

        match spell.effect {
            SpellEffect::Damage(amount) => {
                self.enemy.take_damage(amount);
                self.push_log(format!(
                    "{} casts {} for {} damage!",
                    player.name, spell.name, amount
                ));
            }
            SpellEffect::Heal(amount) => {
                player.heal(amount);
                self.push_log(format!(
                    "{} casts {} and heals for {} HP!",
                    player.name, spell.name, amount
                ));
            }
        }
        self.finish_player_action(player, config);
        true
    }

    pub fn use_item(&mut self, player: &mut Player, kind: ItemKind, config: &EngineConfig) -> bool {
        if !self.can_act() {
            return false;
        }

        let line = match kind {
            ItemKind::HealthPotion => match player.drink_health_potion() {
                Some(restored) => format!(
                    "{} drinks a health potion and recovers {} HP!",
                    player.name, restored
                ),
                None => {
                    self.push_log("No health potions left!".to_string());
                    return false;
                }
            },
            ItemKind::ManaPotion => match player.drink_mana_potion() {
                Some(restored) => format!(
                    "{} drinks a mana potion and recovers {} MP!",
                    player.name, restored
                ),
                None => {
                    self.push_log("No mana potions left!".to_string());
                    return false;
                }
            },
        };
        self.push_log(line);
        self.finish_player_action(player, config);
        true
    }

    /// Runs the pending continuation now, regardless of elapsed time.
    pub fn fire_pending(
        &mut self,
        player: &mut Player,
        rng: &mut impl Rng,
        config: &EngineConfig,
    ) -> Option<BattleEvent> {
        let continuation = self.pending.take()?;
        self.waited = Duration::ZERO;

        match continuation.kind {
            ContinuationKind::EndPlayerAction => {
                self.phase = BattlePhase::EnemyTurn;
                self.schedule(ContinuationKind::EnemyAction, config.enemy_think_delay);
                Some(BattleEvent::EnemyTurnStarted)
            }
            ContinuationKind::EnemyAction => {
                if !self.enemy.is_alive() || !player.is_alive() {
                    self.check_resolution(player, config);
                    return None;
                }
                let damage = roll_enemy_attack(rng);
                player.take_damage(damage);
                self.push_log(format!("{} attacks for {} damage!", self.enemy.name, damage));
                self.phase = BattlePhase::PlayerTurn;
                self.turn += 1;
                self.check_resolution(player, config);
                Some(BattleEvent::EnemyAttacked { damage })
            }
            ContinuationKind::ResolveVictory => {
                self.phase = BattlePhase::Victory;
                let rewards = award_victory(player, &self.enemy);
                tracing::info!(
                    enemy = %self.enemy.name,
                    xp = rewards.xp,
                    gold = rewards.gold,
                    "{} defeated {}",
                    player.name,
                    self.enemy.name
                );
                Some(BattleEvent::Victory { rewards })
            }
            ContinuationKind::ResolveDefeat => {
                self.phase = BattlePhase::Defeat;
                tracing::info!(enemy = %self.enemy.name, "{} was defeated", player.name);
                Some(BattleEvent::Defeat)
            }
        }
    }

    /// Adds `elapsed` to the clock and fires every continuation that came due,
    /// in order. Stops at a terminal phase.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        player: &mut Player,
        rng: &mut impl Rng,
        config: &EngineConfig,
    ) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        if self.pending.is_none() {
            return events;
        }

        self.waited += elapsed;
        while let Some(continuation) = self.pending {
            if self.waited < continuation.delay {
                break;
            }
            let leftover = self.waited - continuation.delay;
            if let Some(event) = self.fire_pending(player, rng, config) {
                events.push(event);
            }
            if self.phase.is_terminal() {
                break;
            }
            if self.pending.is_some() {
                self.waited = leftover;
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn template(hp: u32) -> EnemyTemplate {
        EnemyTemplate {
            name: "Goblin".to_string(),
            level: 2,
            hp,
            max_hp: hp,
            mp: 0,
            max_mp: 0,
            xp_reward: Some(80),
            gold_reward: Some(40),
        }
    }

    fn setup(hp: u32) -> (BattleSession, Player, StdRng, EngineConfig) {
        (
            BattleSession::new(&template(hp), BattleSource::Town),
            Player::default(),
            StdRng::seed_from_u64(42),
            EngineConfig::default(),
        )
    }

    #[test]
    fn test_attack_hands_turn_to_enemy_after_delay() {
        let (mut battle, mut player, mut rng, config) = setup(500);

        assert!(battle.attack(&mut player, &mut rng, &config));
        assert!(battle.is_animating());
        assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
        assert_eq!(
            battle.pending(),
            Some(Continuation {
                delay: Duration::from_millis(500),
                kind: ContinuationKind::EndPlayerAction
            })
        );

        let events = battle.advance(Duration::from_millis(499), &mut player, &mut rng, &config);
        assert!(events.is_empty());

        let events = battle.advance(Duration::from_millis(1), &mut player, &mut rng, &config);
        assert_eq!(events, vec![BattleEvent::EnemyTurnStarted]);
        assert_eq!(battle.phase(), BattlePhase::EnemyTurn);
        assert!(battle.is_animating());
    }

    #[test]
    fn test_second_action_rejected_while_animating() {
        let (mut battle, mut player, mut rng, config) = setup(500);
        assert!(battle.attack(&mut player, &mut rng, &config));
        let enemy_hp = battle.enemy().hp;

        assert!(!battle.attack(&mut player, &mut rng, &config));
        assert!(!battle.cast_spell(&mut player, SpellId::Fireball, &config));
        assert!(!battle.use_item(&mut player, ItemKind::HealthPotion, &config));
        assert_eq!(battle.enemy().hp, enemy_hp);
        assert_eq!(player.mp, player.max_mp);
    }

    #[test]
    fn test_enemy_attack_returns_turn() {
        let (mut battle, mut player, mut rng, config) = setup(500);
        battle.attack(&mut player, &mut rng, &config);

        let events = battle.advance(Duration::from_millis(1500), &mut player, &mut rng, &config);
        assert_eq!(events.len(), 2);
        let damage = match events[1] {
            BattleEvent::EnemyAttacked { damage } => damage,
            ref other => panic!("unexpected event {:?}", other),
        };
        assert!((20..=49).contains(&damage));
        assert_eq!(player.hp, player.max_hp - damage);
        assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
        assert_eq!(battle.turn(), 2);
        assert!(battle.can_act());
        assert_eq!(
            battle.last_log(),
            Some(format!("Goblin attacks for {} damage!", damage).as_str())
        );
    }

    #[test]
    fn test_not_enough_mp_is_logged_and_rejected() {
        let (mut battle, mut player, _rng, config) = setup(500);
        player.mp = 20;

        assert!(!battle.cast_spell(&mut player, SpellId::Fireball, &config));
        assert_eq!(player.mp, 20);
        assert_eq!(battle.enemy().hp, 500);
        assert_eq!(battle.last_log(), Some("Not enough MP!"));
        assert!(!battle.is_animating());
        assert!(battle.can_act());
    }

    #[test]
    fn test_heal_spell_caps_at_max() {
        let (mut battle, mut player, _rng, config) = setup(500);
        player.hp = player.max_hp - 10;

        assert!(battle.cast_spell(&mut player, SpellId::Heal, &config));
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.mp, player.max_mp - 20);
        assert_eq!(
            battle.last_log(),
            Some("Yankees12100 casts Heal and heals for 60 HP!")
        );
    }

    #[test]
    fn test_empty_potion_rejected() {
        let (mut battle, mut player, _rng, config) = setup(500);
        player.health_potions = 0;
        player.hp = 50;

        assert!(!battle.use_item(&mut player, ItemKind::HealthPotion, &config));
        assert_eq!(player.hp, 50);
        assert!(battle.can_act());
    }

    #[test]
    fn test_lethal_spell_schedules_victory_not_enemy_turn() {
        let (mut battle, mut player, mut rng, config) = setup(60);

        assert!(battle.cast_spell(&mut player, SpellId::Fireball, &config));
        assert_eq!(battle.enemy().hp, 0);
        assert!(battle.is_resolving());
        assert_eq!(
            battle.pending().map(|c| c.kind),
            Some(ContinuationKind::ResolveVictory)
        );

        let events = battle.advance(Duration::from_millis(1500), &mut player, &mut rng, &config);
        assert_eq!(battle.phase(), BattlePhase::Victory);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], BattleEvent::Victory { .. }));
        assert_eq!(player.xp, 80);
    }

    #[test]
    fn test_double_knockout_favours_victory() {
        let (mut battle, mut player, _rng, config) = setup(60);
        player.hp = 0;
        battle.enemy.hp = 0;
        assert!(battle.check_resolution(&player, &config));
        assert_eq!(
            battle.pending().map(|c| c.kind),
            Some(ContinuationKind::ResolveVictory)
        );
    }

    #[test]
    fn test_defeat_awards_nothing() {
        let (mut battle, mut player, mut rng, config) = setup(5000);
        player.hp = 1;
        battle.attack(&mut player, &mut rng, &config);

        let events = battle.advance(Duration::from_secs(10), &mut player, &mut rng, &config);
        assert_eq!(events.last(), Some(&BattleEvent::Defeat));
        assert_eq!(battle.phase(), BattlePhase::Defeat);
        assert_eq!(player.hp, 0);
        assert_eq!(player.xp, 0);
        assert_eq!(player.gold, 100);
    }

    #[test]
    fn test_fire_pending_ignores_clock() {
        let (mut battle, mut player, mut rng, config) = setup(500);
        battle.attack(&mut player, &mut rng, &config);
        assert_eq!(
            battle.fire_pending(&mut player, &mut rng, &config),
            Some(BattleEvent::EnemyTurnStarted)
        );
        assert!(matches!(
            battle.fire_pending(&mut player, &mut rng, &config),
            Some(BattleEvent::EnemyAttacked { .. })
        ));
        assert_eq!(battle.fire_pending(&mut player, &mut rng, &config), None);
    }

    #[test]
    fn test_log_is_capped() {
        let (mut battle, mut player, _rng, config) = setup(500);
        player.mp = 0;
        for _ in 0..(MAX_BATTLE_LOG + 10) {
            battle.cast_spell(&mut player, SpellId::Lightning, &config);
        }
        assert_eq!(battle.log().count(), MAX_BATTLE_LOG);
    }
}
