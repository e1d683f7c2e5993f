//! Damage rolls. Pure functions over an injected RNG.

use crate::core::constants::*;
use rand::Rng;

/// Player basic attack: 25 + uniform [1, 50], i.e. uniform over [26, 75].
pub fn roll_player_attack(rng: &mut impl Rng) -> u32 {
    PLAYER_ATTACK_BASE_DAMAGE + rng.gen_range(1..=PLAYER_ATTACK_VARIATION)
}

/// Enemy attack: uniform over [20, 49].
pub fn roll_enemy_attack(rng: &mut impl Rng) -> u32 {
    rng.gen_range(ENEMY_ATTACK_MIN_DAMAGE..=ENEMY_ATTACK_MAX_DAMAGE)
}
