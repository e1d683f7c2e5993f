use crate::core::constants::{DEFAULT_GOLD_REWARD, DEFAULT_XP_REWARD};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Caller-supplied description of an opponent. Rewards fall back to
/// 100 xp / 50 gold when left unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyTemplate {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    #[serde(default)]
    pub xp_reward: Option<u32>,
    #[serde(default)]
    pub gold_reward: Option<u32>,
}

/// A combat opponent. Lives for exactly one battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            name: template.name.clone(),
            level: template.level,
            hp: template.hp.min(template.max_hp),
            max_hp: template.max_hp,
            mp: template.mp.min(template.max_mp),
            max_mp: template.max_mp,
            // Zero counts as unset
            xp_reward: template.xp_reward.filter(|&xp| xp > 0).unwrap_or(DEFAULT_XP_REWARD),
            gold_reward: template.gold_reward.filter(|&gold| gold > 0).unwrap_or(DEFAULT_GOLD_REWARD),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Which screen started the battle. Only used to route back afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleSource {
    #[default]
    Town,
    Castle,
}

/// The town's sparring roster, scaled to the player's level.
pub fn town_roster(player_level: u32) -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate {
            name: "Berserker (+20)".to_string(),
            level: player_level.saturating_add(20),
            hp: 786,
            max_hp: 786,
            mp: 128,
            max_mp: 128,
            xp_reward: Some(200),
            gold_reward: Some(100),
        },
        EnemyTemplate {
            name: "Goblin Warrior".to_string(),
            level: player_level.saturating_add(5),
            hp: 150,
            max_hp: 150,
            mp: 50,
            max_mp: 50,
            xp_reward: Some(80),
            gold_reward: Some(40),
        },
        EnemyTemplate {
            name: "Dark Knight".to_string(),
            level: player_level.saturating_add(10),
            hp: 400,
            max_hp: 400,
            mp: 200,
            max_mp: 200,
            xp_reward: Some(150),
            gold_reward: Some(75),
        },
    ]
}

/// Picks a uniformly random opponent from the town roster.
pub fn random_town_enemy(player_level: u32, rng: &mut impl Rng) -> EnemyTemplate {
    let mut roster = town_roster(player_level);
    let index = rng.gen_range(0..roster.len());
    roster.swap_remove(index)
}
