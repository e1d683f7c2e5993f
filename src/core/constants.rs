// Player attack: BASE + uniform [1, VARIATION]
pub const PLAYER_ATTACK_BASE_DAMAGE: u32 = 25;
pub const PLAYER_ATTACK_VARIATION: u32 = 50;

// Enemy attack: uniform [MIN, MAX]
pub const ENEMY_ATTACK_MIN_DAMAGE: u32 = 20;
pub const ENEMY_ATTACK_MAX_DAMAGE: u32 = 49;

// Potions restore this fraction of the matching max pool
pub const POTION_RESTORE_RATIO: f64 = 0.5;

// Battle pacing (milliseconds)
pub const PLAYER_ACTION_DELAY_MS: u64 = 500;
pub const ENEMY_THINK_DELAY_MS: u64 = 1000;
pub const RESOLUTION_DELAY_MS: u64 = 1500;

// Rewards used when an enemy template leaves them unset
pub const DEFAULT_XP_REWARD: u32 = 100;
pub const DEFAULT_GOLD_REWARD: u32 = 50;

// Leveling: xp threshold is level * XP_PER_LEVEL
pub const XP_PER_LEVEL: u64 = 1000;
pub const LEVEL_UP_MAX_HP: u32 = 50;
pub const LEVEL_UP_MAX_MP: u32 = 30;
pub const VICTORY_HEALTH_POTIONS: u32 = 1;
pub const VICTORY_MANA_POTIONS: u32 = 1;

// Element modifiers: BASE + floor(level * LEVEL_FACTOR)
pub const ELEMENT_BASE_MODIFIER: u32 = 50;
pub const ELEMENT_LEVEL_FACTOR: f64 = 0.5;

// Starting character
pub const DEFAULT_PLAYER_NAME: &str = "Yankees12100";
pub const STARTING_HP: u32 = 193;
pub const STARTING_MP: u32 = 192;
pub const STARTING_SP: u32 = 322;
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_HEALTH_POTIONS: u32 = 5;
pub const STARTING_MANA_POTIONS: u32 = 5;

// Battle log lines kept per session
pub const MAX_BATTLE_LOG: usize = 50;

// Save file
pub const SAVE_FILE_NAME: &str = "player.json";
pub const SAVE_DIR_NAME: &str = "quest-arena";
