//! Integration test: Shop purchases and equipment
//!
//! Buys catalog items through the store, equips and unequips them, and checks
//! item identity, rejected purchases and the element modifier table.

use proptest::prelude::*;
use quest_arena::core::error::ActionError;
use quest_arena::core::{EngineConfig, GameStore};
use quest_arena::items::catalog::{find_entry, PurchaseKind, SHOP_CATALOG};
use quest_arena::items::types::{Element, EquipmentSlot, ItemId};
use quest_arena::utils::MemorySlot;
use quest_arena::Player;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Store = GameStore<MemorySlot, StdRng>;

fn rich_store() -> Store {
    let mut player = Player::default();
    player.gold = 10_000;
    GameStore::with_player(
        player,
        MemorySlot::new(),
        StdRng::seed_from_u64(1),
        EngineConfig::instant(),
    )
}

fn buy(store: &mut Store, id: &str) -> ItemId {
    let entry = find_entry(id).unwrap();
    store
        .purchase(entry.purchase_kind(), entry.price)
        .unwrap()
        .expect("equipment purchases mint an item")
}

// =============================================================================
// Purchases
// =============================================================================

#[test]
fn test_purchase_over_budget_changes_nothing() {
    let mut store = GameStore::load(
        MemorySlot::new(),
        StdRng::seed_from_u64(1),
        EngineConfig::instant(),
    );
    let sword = find_entry("fireSword").unwrap();
    let before = store.player().clone();

    let result = store.purchase(sword.purchase_kind(), sword.price);

    assert_eq!(
        result,
        Err(ActionError::NotEnoughGold {
            price: 200,
            gold: 100
        })
    );
    assert_eq!(store.player(), &before);
    assert_eq!(store.slot().writes, 0);
}

#[test]
fn test_potion_purchase_increments_count() {
    let mut store = rich_store();
    let potion = find_entry("manaPotion").unwrap();

    assert_eq!(store.purchase(potion.purchase_kind(), potion.price), Ok(None));

    assert_eq!(store.player().mana_potions, 6);
    assert_eq!(store.player().gold, 9_950);
}

#[test]
fn test_exact_gold_is_enough() {
    let mut store = GameStore::load(
        MemorySlot::new(),
        StdRng::seed_from_u64(1),
        EngineConfig::instant(),
    );
    let boots = find_entry("windBoots").unwrap();
    assert_eq!(boots.price, 100);

    assert!(store.purchase(boots.purchase_kind(), boots.price).is_ok());
    assert_eq!(store.player().gold, 0);
}

#[test]
fn test_buying_same_entry_twice_gives_distinct_items() {
    let mut store = rich_store();
    let a = buy(&mut store, "iceHelmet");
    let b = buy(&mut store, "iceHelmet");

    assert_ne!(a, b);
    assert_eq!(store.player().inventory.len(), 2);
    assert!(store.player().validate().is_ok());
}

#[test]
fn test_purchase_accepts_items_outside_catalog() {
    let mut store = rich_store();
    let custom = quest_arena::items::types::ItemTemplate {
        name: "Light Crown".to_string(),
        icon: "👑".to_string(),
        slot: EquipmentSlot::Helmet,
        element_bonuses: [(Element::Light, 20)].into_iter().collect(),
    };

    let id = store
        .purchase(PurchaseKind::Equipment(custom), 1)
        .unwrap()
        .unwrap();
    store.equip(id, EquipmentSlot::Helmet).unwrap();

    assert_eq!(store.element_modifiers().get(Element::Light), 70);
}

// =============================================================================
// Equip / unequip
// =============================================================================

#[test]
fn test_equip_then_unequip_restores_inventory() {
    let mut store = rich_store();
    let sword = buy(&mut store, "fireSword");
    let boots = buy(&mut store, "iceBoots");
    let before: Vec<ItemId> = store.player().inventory.iter().map(|i| i.id).collect();

    store.equip(sword, EquipmentSlot::Weapon).unwrap();
    assert_eq!(store.player().inventory.len(), 1);
    assert_eq!(store.player().inventory[0].id, boots);
    assert!(store.unequip(EquipmentSlot::Weapon));

    let mut after: Vec<ItemId> = store.player().inventory.iter().map(|i| i.id).collect();
    let mut expected = before.clone();
    after.sort_by_key(|id| id.to_string());
    expected.sort_by_key(|id| id.to_string());
    assert_eq!(after, expected);
    assert!(store.player().equipped.weapon.is_none());
}

#[test]
fn test_swapping_weapons_keeps_both() {
    let mut store = rich_store();
    let fire = buy(&mut store, "fireSword");
    let ice = buy(&mut store, "iceBlade");

    assert_eq!(store.equip(fire, EquipmentSlot::Weapon), Ok(None));
    assert_eq!(store.equip(ice, EquipmentSlot::Weapon), Ok(Some(fire)));

    assert_eq!(store.player().inventory.len(), 1);
    assert_eq!(store.player().inventory[0].id, fire);
    assert!(store.player().validate().is_ok());
}

#[test]
fn test_equip_unknown_item_rejected() {
    let mut store = rich_store();
    buy(&mut store, "fireArmor");
    let stranger = ItemId::new();

    assert_eq!(
        store.equip(stranger, EquipmentSlot::Armor),
        Err(ActionError::ItemNotFound(stranger))
    );
    assert!(store.player().equipped.armor.is_none());
}

#[test]
fn test_full_set_element_modifiers() {
    let mut store = rich_store();
    for (id, slot) in [
        ("energyStaff", EquipmentSlot::Weapon),
        ("fireHelmet", EquipmentSlot::Helmet),
        ("energyArmor", EquipmentSlot::Armor),
        ("fireBoots", EquipmentSlot::Boots),
    ] {
        let item = buy(&mut store, id);
        store.equip(item, slot).unwrap();
    }

    let mods = store.element_modifiers();
    // level 1 base is 50
    assert_eq!(mods.get(Element::Fire), 50 + 10 + 10 + 8 + 8);
    assert_eq!(mods.get(Element::Energy), 50 + 10 + 5 + 8 + 3);
    assert_eq!(mods.get(Element::Water), 50 + 10 + 8);
    assert_eq!(mods.get(Element::Light), 50);
}

proptest! {
    #[test]
    fn prop_equip_unequip_preserves_owned_items(picks in proptest::collection::vec(0usize..SHOP_CATALOG.len(), 1..12)) {
        let mut store = rich_store();
        let mut owned = Vec::new();
        for index in picks {
            let entry = &SHOP_CATALOG[index];
            if let Some(slot) = entry.slot() {
                let id = store.purchase(entry.purchase_kind(), 0).unwrap().unwrap();
                owned.push(id);
                store.equip(id, slot).unwrap();
            }
        }
        for slot in EquipmentSlot::all() {
            store.unequip(slot);
        }

        let mut held: Vec<String> = store.player().inventory.iter().map(|i| i.id.to_string()).collect();
        let mut bought: Vec<String> = owned.iter().map(|id| id.to_string()).collect();
        held.sort();
        bought.sort();
        prop_assert_eq!(held, bought);
        prop_assert!(store.player().validate().is_ok());
    }
}
