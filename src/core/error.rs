//! Rejections raised by shop and inventory actions.

use crate::items::types::{EquipmentSlot, ItemId};
use thiserror::Error;

/// A player action that was refused. Nothing was mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough gold! ({gold}/{price})")]
    NotEnoughGold { price: u32, gold: u32 },

    #[error("item {0} is not in the inventory")]
    ItemNotFound(ItemId),

    #[error("{item} goes in the {expected} slot, not {requested}")]
    SlotMismatch {
        item: String,
        expected: EquipmentSlot,
        requested: EquipmentSlot,
    },
}
