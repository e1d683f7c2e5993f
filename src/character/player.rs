use crate::core::constants::*;
use crate::items::equipment::Equipment;
use crate::items::types::{EquipmentSlot, Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Why a loaded player record was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("level must be at least 1")]
    LevelZero,

    #[error("{pool} {value} exceeds max {max}")]
    PoolOverMax {
        pool: &'static str,
        value: u32,
        max: u32,
    },

    #[error("{name} is equipped in the {slot} slot")]
    WrongSlot { name: String, slot: EquipmentSlot },

    #[error("item {0} is owned twice")]
    DuplicateItem(ItemId),
}

/// The persisted player record.
///
/// Pools (`hp`, `mp`, `sp`) never exceed their maxima; every mutator clamps.
/// Fields added after the first release carry `#[serde(default)]` so older
/// snapshots still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub sp: u32,
    pub max_sp: u32,
    pub xp: u64,
    pub gold: u32,
    #[serde(default)]
    pub health_potions: u32,
    #[serde(default)]
    pub mana_potions: u32,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub equipped: Equipment,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME.to_string())
    }
}

impl Player {
    /// Creates a level 1 character with the starting kit.
    pub fn new(name: String) -> Self {
        Self {
            name,
            level: 1,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            mp: STARTING_MP,
            max_mp: STARTING_MP,
            sp: STARTING_SP,
            max_sp: STARTING_SP,
            xp: 0,
            gold: STARTING_GOLD,
            health_potions: STARTING_HEALTH_POTIONS,
            mana_potions: STARTING_MANA_POTIONS,
            inventory: Vec::new(),
            equipped: Equipment::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restores hp up to max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Restores mp up to max. Returns the amount actually restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let before = self.mp;
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
        self.mp - before
    }

    /// Debits mp if the pool covers `cost`.
    pub fn spend_mp(&mut self, cost: u32) -> bool {
        if self.mp < cost {
            return false;
        }
        self.mp -= cost;
        true
    }

    /// Drinks a health potion, restoring half of max hp. Returns the hp restored,
    /// or `None` when no potion is left.
    pub fn drink_health_potion(&mut self) -> Option<u32> {
        if self.health_potions == 0 {
            return None;
        }
        self.health_potions -= 1;
        let amount = (self.max_hp as f64 * POTION_RESTORE_RATIO).floor() as u32;
        Some(self.heal(amount))
    }

    /// Mana counterpart of [`Player::drink_health_potion`].
    pub fn drink_mana_potion(&mut self) -> Option<u32> {
        if self.mana_potions == 0 {
            return None;
        }
        self.mana_potions -= 1;
        let amount = (self.max_mp as f64 * POTION_RESTORE_RATIO).floor() as u32;
        Some(self.restore_mp(amount))
    }

    /// Tops up hp and mp (the town does this before every fight).
    pub fn restore_for_battle(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }

    /// Tops up every pool, stamina included.
    pub fn full_heal(&mut self) {
        self.restore_for_battle();
        self.sp = self.max_sp;
    }

    pub fn spend_gold(&mut self, price: u32) -> bool {
        if self.gold < price {
            return false;
        }
        self.gold -= price;
        true
    }

    /// XP required for the next level-up.
    pub fn xp_threshold(&self) -> u64 {
        self.level as u64 * XP_PER_LEVEL
    }

    pub fn equipped_in(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipped.get(slot).as_ref()
    }

    /// Checks the invariants a loaded snapshot must satisfy.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.level == 0 {
            return Err(SnapshotError::LevelZero);
        }
        let pools = [
            ("hp", self.hp, self.max_hp),
            ("mp", self.mp, self.max_mp),
            ("sp", self.sp, self.max_sp),
        ];
        for (pool, value, max) in pools {
            if value > max {
                return Err(SnapshotError::PoolOverMax { pool, value, max });
            }
        }

        for slot in EquipmentSlot::all() {
            if let Some(item) = self.equipped_in(slot) {
                if item.slot != slot {
                    return Err(SnapshotError::WrongSlot {
                        name: item.name.clone(),
                        slot,
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        let owned = self.inventory.iter().chain(self.equipped.iter_equipped());
        for item in owned {
            if !seen.insert(item.id) {
                return Err(SnapshotError::DuplicateItem(item.id));
            }
        }

        Ok(())
    }
}
