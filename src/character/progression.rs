//! Converts a won battle into xp, gold, potions and level-ups.

use super::player::Player;
use crate::combat::types::Enemy;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// What a victory paid out. Kept by the store until the caller clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRewards {
    pub xp: u32,
    pub gold: u32,
    pub leveled_up: bool,
    pub new_level: u32,
}

/// Applies the rewards for defeating `enemy`.
///
/// Levels up at most once, even when xp overshoots several thresholds. Every
/// victory grants one health and one mana potion. Counters saturate, so a
/// loaded record sitting at the type's limit cannot overflow.
pub fn award_victory(player: &mut Player, enemy: &Enemy) -> BattleRewards {
    let xp_gain = enemy.xp_reward;
    let gold_gain = enemy.gold_reward;

    player.xp = player.xp.saturating_add(xp_gain as u64);
    player.gold = player.gold.saturating_add(gold_gain);

    let leveled_up = player.xp >= player.xp_threshold();
    if leveled_up {
        apply_level_up(player);
    }

    player.health_potions = player.health_potions.saturating_add(VICTORY_HEALTH_POTIONS);
    player.mana_potions = player.mana_potions.saturating_add(VICTORY_MANA_POTIONS);

    BattleRewards {
        xp: xp_gain,
        gold: gold_gain,
        leveled_up,
        new_level: player.level,
    }
}

fn apply_level_up(player: &mut Player) {
    player.level = player.level.saturating_add(1);
    player.max_hp = player.max_hp.saturating_add(LEVEL_UP_MAX_HP);
    player.hp = player.max_hp;
    player.max_mp = player.max_mp.saturating_add(LEVEL_UP_MAX_MP);
    player.mp = player.max_mp;
    tracing::info!(level = player.level, "{} reached level {}", player.name, player.level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::EnemyTemplate;

    fn enemy_with_rewards(xp: Option<u32>, gold: Option<u32>) -> Enemy {
        Enemy::from_template(&EnemyTemplate {
            name: "Training Dummy".to_string(),
            level: 1,
            hp: 10,
            max_hp: 10,
            mp: 0,
            max_mp: 0,
            xp_reward: xp,
            gold_reward: gold,
        })
    }

    #[test]
    fn test_level_up_on_reaching_threshold() {
        let mut p = Player::default();
        p.gold = 100;
        p.hp = 12;
        let enemy = enemy_with_rewards(Some(1000), Some(50));

        let rewards = award_victory(&mut p, &enemy);

        assert_eq!(p.xp, 1000);
        assert_eq!(p.gold, 150);
        assert_eq!(p.level, 2);
        assert_eq!(p.max_hp, 193 + 50);
        assert_eq!(p.hp, p.max_hp);
        assert_eq!(p.max_mp, 192 + 30);
        assert_eq!(p.mp, p.max_mp);
        assert_eq!(p.health_potions, 6);
        assert_eq!(p.mana_potions, 6);
        assert_eq!(
            rewards,
            BattleRewards { xp: 1000, gold: 50, leveled_up: true, new_level: 2 }
        );
    }

    #[test]
    fn test_victory_without_level_up_still_grants_potions() {
        let mut p = Player::default();
        p.hp = 40;
        let enemy = enemy_with_rewards(Some(80), Some(40));

        let rewards = award_victory(&mut p, &enemy);

        assert!(!rewards.leveled_up);
        assert_eq!(rewards.new_level, 1);
        assert_eq!(p.hp, 40);
        assert_eq!(p.max_hp, 193);
        assert_eq!(p.health_potions, 6);
        assert_eq!(p.mana_potions, 6);
    }

    #[test]
    fn test_missing_rewards_use_defaults() {
        let mut p = Player::default();
        let enemy = enemy_with_rewards(None, None);

        let rewards = award_victory(&mut p, &enemy);

        assert_eq!(rewards.xp, 100);
        assert_eq!(rewards.gold, 50);
        assert_eq!(p.xp, 100);
        assert_eq!(p.gold, 150);
    }

    #[test]
    fn test_no_multi_level_cascade() {
        let mut p = Player::default();
        let enemy = enemy_with_rewards(Some(5000), Some(1));

        let rewards = award_victory(&mut p, &enemy);

        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 5000);
        assert_eq!(rewards.new_level, 2);
        assert_eq!(p.max_hp, 243);
    }

    #[test]
    fn test_threshold_scales_with_level() {
        let mut p = Player::default();
        p.level = 3;
        p.xp = 2500;
        let enemy = enemy_with_rewards(Some(499), Some(1));
        assert!(!award_victory(&mut p, &enemy).leveled_up);
        let enemy = enemy_with_rewards(Some(1), Some(1));
        assert!(award_victory(&mut p, &enemy).leveled_up);
        assert_eq!(p.level, 4);
    }

    #[test]
    fn test_rewards_saturate_at_counter_limits() {
        let mut p = Player::default();
        p.level = u32::MAX;
        p.xp = u64::MAX - 10;
        p.gold = u32::MAX - 1;
        p.max_hp = u32::MAX - 20;
        p.max_mp = u32::MAX;
        p.health_potions = u32::MAX;
        p.mana_potions = u32::MAX;
        let enemy = enemy_with_rewards(Some(1000), Some(50));

        let rewards = award_victory(&mut p, &enemy);

        assert!(rewards.leveled_up);
        assert_eq!(p.level, u32::MAX);
        assert_eq!(p.xp, u64::MAX);
        assert_eq!(p.gold, u32::MAX);
        assert_eq!((p.hp, p.max_hp), (u32::MAX, u32::MAX));
        assert_eq!(p.max_mp, u32::MAX);
        assert_eq!((p.health_potions, p.mana_potions), (u32::MAX, u32::MAX));
    }
}
