use super::types::{Element, EquipmentSlot, Item, ItemId};
use crate::core::constants::{ELEMENT_BASE_MODIFIER, ELEMENT_LEVEL_FACTOR};
use crate::core::error::ActionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Player equipment slots.
///
/// Serialized as `{weapon, helmet, armor, boots}` with `null` for empty slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub helmet: Option<Item>,
    pub armor: Option<Item>,
    pub boots: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Boots => &self.boots,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Boots => &mut self.boots,
        }
    }

    /// Puts `item` into `slot`, handing back whatever was there.
    pub fn replace(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.helmet, &self.armor, &self.boots]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }
}

/// Moves an item from the inventory into `slot`.
///
/// A displaced item goes back to the end of the inventory. Returns the id of
/// the displaced item, if any.
pub fn equip(
    inventory: &mut Vec<Item>,
    equipment: &mut Equipment,
    item_id: ItemId,
    slot: EquipmentSlot,
) -> Result<Option<ItemId>, ActionError> {
    let index = inventory
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(ActionError::ItemNotFound(item_id))?;

    if inventory[index].slot != slot {
        return Err(ActionError::SlotMismatch {
            item: inventory[index].name.clone(),
            expected: inventory[index].slot,
            requested: slot,
        });
    }

    let item = inventory.remove(index);
    let displaced = equipment.replace(slot, item);
    let displaced_id = displaced.as_ref().map(|d| d.id);
    if let Some(old) = displaced {
        inventory.push(old);
    }

    Ok(displaced_id)
}

/// Moves the item in `slot` back to the inventory. Returns false if the slot was empty.
pub fn unequip(inventory: &mut Vec<Item>, equipment: &mut Equipment, slot: EquipmentSlot) -> bool {
    match equipment.take(slot) {
        Some(item) => {
            inventory.push(item);
            true
        }
        None => false,
    }
}

/// Per-element percentage modifiers derived from level and equipped items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementModifiers(BTreeMap<Element, u32>);

impl ElementModifiers {
    pub fn get(&self, element: Element) -> u32 {
        self.0.get(&element).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        self.0.iter().map(|(e, v)| (*e, *v))
    }
}

/// Base modifier every element starts from at a given level.
pub fn base_element_modifier(level: u32) -> u32 {
    ELEMENT_BASE_MODIFIER.saturating_add((level as f64 * ELEMENT_LEVEL_FACTOR).floor() as u32)
}

/// Computes element modifiers. Pure: depends only on level and the equipped set.
/// Sums saturate at `u32::MAX`.
pub fn element_modifiers(level: u32, equipment: &Equipment) -> ElementModifiers {
    let base = base_element_modifier(level);
    let mut modifiers: BTreeMap<Element, u32> =
        Element::all().into_iter().map(|e| (e, base)).collect();

    for item in equipment.iter_equipped() {
        for (element, bonus) in &item.element_bonuses {
            if let Some(value) = modifiers.get_mut(element) {
                *value = value.saturating_add(*bonus);
            }
        }
    }

    ElementModifiers(modifiers)
}
