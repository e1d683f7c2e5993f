//! Engine configuration.

use super::constants::{ENEMY_THINK_DELAY_MS, PLAYER_ACTION_DELAY_MS, RESOLUTION_DELAY_MS};
use std::time::Duration;

/// Pacing for the battle state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Pause after a player action before the enemy gets the turn
    pub player_action_delay: Duration,

    /// How long the enemy "thinks" before attacking
    pub enemy_think_delay: Duration,

    /// Pause between the lethal hit and victory/defeat, so the last action can render
    pub resolution_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_action_delay: Duration::from_millis(PLAYER_ACTION_DELAY_MS),
            enemy_think_delay: Duration::from_millis(ENEMY_THINK_DELAY_MS),
            resolution_delay: Duration::from_millis(RESOLUTION_DELAY_MS),
        }
    }
}

impl EngineConfig {
    /// Zero delays everywhere. Used by tests and the simulator.
    pub fn instant() -> Self {
        Self {
            player_action_delay: Duration::ZERO,
            enemy_think_delay: Duration::ZERO,
            resolution_delay: Duration::ZERO,
        }
    }
}
