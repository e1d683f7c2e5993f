//! Quest Arena - turn-based combat and character progression engine.
//!
//! The engine behind a single-player browser RPG: a battle state machine,
//! xp/gold/level progression, equipment with elemental modifiers, and a
//! persisted player record. [`GameStore`] is the entry point; rendering and
//! navigation live outside this crate.

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod simulator;
pub mod utils;

pub use crate::character::{BattleRewards, Player, SnapshotError};
pub use crate::combat::{BattleEvent, BattlePhase, BattleSession, BattleSource, EnemyTemplate, ItemKind, SpellId};
pub use crate::core::{EngineConfig, GameStore, InstantScheduler, Scheduler, SleepScheduler};
pub use crate::items::{EquipmentSlot, PurchaseKind};
pub use crate::utils::{FileSlot, MemorySlot, PersistenceError, SaveSlot};
