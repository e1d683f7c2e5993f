//! Shop catalog shipped with the game.
//!
//! The store never reads this table directly: a shop screen picks an entry
//! and hands `entry.purchase_kind()` and `entry.price` to `GameStore::purchase`.

use super::types::{Element, EquipmentSlot, ItemTemplate};

/// What a purchase adds to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseKind {
    HealthPotion,
    ManaPotion,
    Equipment(ItemTemplate),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogKind {
    HealthPotion,
    ManaPotion,
    Equipment {
        slot: EquipmentSlot,
        bonuses: &'static [(Element, u32)],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub icon: &'static str,
    pub kind: CatalogKind,
}

impl CatalogEntry {
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self.kind {
            CatalogKind::Equipment { slot, .. } => Some(slot),
            _ => None,
        }
    }

    pub fn purchase_kind(&self) -> PurchaseKind {
        match self.kind {
            CatalogKind::HealthPotion => PurchaseKind::HealthPotion,
            CatalogKind::ManaPotion => PurchaseKind::ManaPotion,
            CatalogKind::Equipment { slot, bonuses } => PurchaseKind::Equipment(ItemTemplate {
                name: self.name.to_string(),
                icon: self.icon.to_string(),
                slot,
                element_bonuses: bonuses.iter().copied().collect(),
            }),
        }
    }
}

use Element::*;
use EquipmentSlot::*;

const fn gear(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: u32,
    icon: &'static str,
    slot: EquipmentSlot,
    bonuses: &'static [(Element, u32)],
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        description,
        price,
        icon,
        kind: CatalogKind::Equipment { slot, bonuses },
    }
}

pub const SHOP_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "healthPotion",
        name: "Health Potion",
        description: "Restores 50% of max HP",
        price: 50,
        icon: "🧪",
        kind: CatalogKind::HealthPotion,
    },
    CatalogEntry {
        id: "manaPotion",
        name: "Mana Potion",
        description: "Restores 50% of max MP",
        price: 50,
        icon: "💧",
        kind: CatalogKind::ManaPotion,
    },
    // Weapons
    gear("fireSword", "Fire Sword", "Weapon: +15% Fire, +5% Energy", 200, "⚔️", Weapon, &[(Fire, 15), (Energy, 5)]),
    gear("iceBlade", "Ice Blade", "Weapon: +15% Ice, +5% Water", 200, "🗡️", Weapon, &[(Ice, 15), (Water, 5)]),
    gear("windSpear", "Wind Spear", "Weapon: +15% Wind, +5% Earth", 200, "🔱", Weapon, &[(Wind, 15), (Earth, 5)]),
    gear("earthHammer", "Earth Hammer", "Weapon: +15% Earth, +5% Fire", 200, "🔨", Weapon, &[(Earth, 15), (Fire, 5)]),
    gear(
        "energyStaff",
        "Energy Staff",
        "Weapon: +10% All Elements",
        300,
        "🪄",
        Weapon,
        &[(Fire, 10), (Water, 10), (Wind, 10), (Ice, 10), (Earth, 10), (Energy, 10)],
    ),
    // Helmets
    gear("fireHelmet", "Fire Helmet", "Helmet: +10% Fire, +5% Energy", 150, "🪖", Helmet, &[(Fire, 10), (Energy, 5)]),
    gear("iceHelmet", "Ice Helmet", "Helmet: +10% Ice, +5% Water", 150, "⛑️", Helmet, &[(Ice, 10), (Water, 5)]),
    gear("windHelmet", "Wind Helmet", "Helmet: +10% Wind, +5% Earth", 150, "🎩", Helmet, &[(Wind, 10), (Earth, 5)]),
    // Armor
    gear("fireArmor", "Fire Armor", "Armor: +12% Fire, +8% Energy", 250, "🛡️", Armor, &[(Fire, 12), (Energy, 8)]),
    gear("iceArmor", "Ice Armor", "Armor: +12% Ice, +8% Water", 250, "❄️", Armor, &[(Ice, 12), (Water, 8)]),
    gear("windArmor", "Wind Armor", "Armor: +12% Wind, +8% Earth", 250, "💨", Armor, &[(Wind, 12), (Earth, 8)]),
    gear(
        "energyArmor",
        "Energy Armor",
        "Armor: +8% All Elements",
        350,
        "✨",
        Armor,
        &[(Fire, 8), (Water, 8), (Wind, 8), (Ice, 8), (Earth, 8), (Energy, 8)],
    ),
    // Boots
    gear("fireBoots", "Fire Boots", "Boots: +8% Fire, +3% Energy", 100, "👢", Boots, &[(Fire, 8), (Energy, 3)]),
    gear("iceBoots", "Ice Boots", "Boots: +8% Ice, +3% Water", 100, "🥾", Boots, &[(Ice, 8), (Water, 3)]),
    gear("windBoots", "Wind Boots", "Boots: +8% Wind, +3% Earth", 100, "👟", Boots, &[(Wind, 8), (Earth, 3)]),
];

pub fn find_entry(id: &str) -> Option<&'static CatalogEntry> {
    SHOP_CATALOG.iter().find(|e| e.id == id)
}
