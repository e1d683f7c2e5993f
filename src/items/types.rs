use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Armor,
    Boots,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 4] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Helmet,
            EquipmentSlot::Armor,
            EquipmentSlot::Boots,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Helmet => "helmet",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Boots => "boots",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elemental affinities tracked by the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Wind,
    Ice,
    Earth,
    Energy,
    Light,
}

impl Element {
    pub fn all() -> [Element; 7] {
        [
            Element::Fire,
            Element::Water,
            Element::Wind,
            Element::Ice,
            Element::Earth,
            Element::Energy,
            Element::Light,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Wind => "wind",
            Element::Ice => "ice",
            Element::Earth => "earth",
            Element::Energy => "energy",
            Element::Light => "light",
        }
    }
}

/// Percentage bonus per element. Elements without an entry contribute zero.
pub type ElementBonuses = BTreeMap<Element, u32>;

/// Identity of an owned item, assigned when the item is acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Description of a piece of equipment before it is owned by anyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    pub name: String,
    pub icon: String,
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub element_bonuses: ElementBonuses,
}

impl ItemTemplate {
    /// Mints an owned item with a fresh id.
    pub fn instantiate(&self) -> Item {
        Item {
            id: ItemId::new(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            slot: self.slot,
            element_bonuses: self.element_bonuses.clone(),
        }
    }
}

/// An owned piece of equipment. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub slot: EquipmentSlot,
    pub icon: String,
    #[serde(default)]
    pub element_bonuses: ElementBonuses,
}

impl Item {
    pub fn bonus(&self, element: Element) -> u32 {
        self.element_bonuses.get(&element).copied().unwrap_or(0)
    }
}
