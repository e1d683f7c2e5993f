//! The game store: single owner of the player, the running battle and the
//! save slot. Its methods are the only way to change game state.

use super::config::EngineConfig;
use super::error::ActionError;
use super::scheduler::Scheduler;
use crate::character::player::Player;
use crate::character::progression::BattleRewards;
use crate::combat::session::{BattleEvent, BattleSession, ItemKind};
use crate::combat::spells::SpellId;
use crate::combat::types::{BattleSource, Enemy, EnemyTemplate};
use crate::items::catalog::PurchaseKind;
use crate::items::equipment::{self, element_modifiers, ElementModifiers};
use crate::items::types::{EquipmentSlot, ItemId};
use crate::utils::persistence::{PersistenceStore, SaveSlot};
use rand::Rng;
use std::time::Duration;

pub struct GameStore<S: SaveSlot, R: Rng> {
    player: Player,
    battle: Option<BattleSession>,
    battle_rewards: Option<BattleRewards>,
    battle_source: BattleSource,
    persistence: PersistenceStore<S>,
    config: EngineConfig,
    rng: R,
}

impl<S: SaveSlot, R: Rng> GameStore<S, R> {
    /// Opens the store, loading the saved player from `slot` (or the default
    /// player if the slot is empty or unreadable).
    pub fn load(slot: S, rng: R, config: EngineConfig) -> Self {
        let persistence = PersistenceStore::new(slot);
        let player = persistence.load_or_default();
        Self {
            player,
            battle: None,
            battle_rewards: None,
            battle_source: BattleSource::default(),
            persistence,
            config,
            rng,
        }
    }

    /// Opens the store with an explicit player and writes it to the slot.
    pub fn with_player(player: Player, slot: S, rng: R, config: EngineConfig) -> Self {
        let mut store = Self {
            player,
            battle: None,
            battle_rewards: None,
            battle_source: BattleSource::default(),
            persistence: PersistenceStore::new(slot),
            config,
            rng,
        };
        store.persist();
        store
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.battle.as_ref().map(BattleSession::enemy)
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        self.battle.as_ref()
    }

    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }

    pub fn battle_rewards(&self) -> Option<&BattleRewards> {
        self.battle_rewards.as_ref()
    }

    pub fn battle_source(&self) -> BattleSource {
        self.battle_source
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn slot(&self) -> &S {
        self.persistence.slot()
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.player) {
            tracing::warn!("Failed to save player: {}", e);
        }
    }

    // =========================================================================
    // Battle
    // =========================================================================

    /// Starts a fresh battle against `template`. Any battle still running is
    /// dropped without reward.
    pub fn start_battle(&mut self, template: &EnemyTemplate, source: BattleSource) {
        if self.battle.is_some() {
            tracing::debug!("Replacing unfinished battle");
        }

        let mut session = BattleSession::new(template, source);
        tracing::debug!(enemy = %template.name, ?source, "Battle started");
        session.check_resolution(&self.player, &self.config);

        self.battle = Some(session);
        self.battle_source = source;
    }

    /// Basic attack. Returns false when the action was not accepted.
    pub fn attack(&mut self) -> bool {
        let Some(battle) = self.battle.as_mut() else {
            return false;
        };
        battle.attack(&mut self.player, &mut self.rng, &self.config)
    }

    pub fn cast_spell(&mut self, spell: SpellId) -> bool {
        let Some(battle) = self.battle.as_mut() else {
            return false;
        };
        let accepted = battle.cast_spell(&mut self.player, spell, &self.config);
        if accepted {
            self.persist();
        }
        accepted
    }

    pub fn use_item(&mut self, kind: ItemKind) -> bool {
        let Some(battle) = self.battle.as_mut() else {
            return false;
        };
        let accepted = battle.use_item(&mut self.player, kind, &self.config);
        if accepted {
            self.persist();
        }
        accepted
    }

    /// Leaves the battle with no reward, discarding whatever is pending.
    pub fn flee(&mut self) -> bool {
        match self.battle.as_ref() {
            Some(battle) if battle.can_flee() => {
                tracing::info!(enemy = %battle.enemy().name, "{} fled", self.player.name);
                self.end_battle(None);
                true
            }
            _ => false,
        }
    }

    /// Drops the battle without a log entry, e.g. when the player navigates away.
    pub fn abort_battle(&mut self) {
        if self.battle.is_some() {
            tracing::debug!("Battle aborted");
            self.end_battle(None);
        }
    }

    fn end_battle(&mut self, rewards: Option<BattleRewards>) {
        self.battle = None;
        self.battle_rewards = rewards;
        self.persist();
    }

    /// Advances the battle clock by `elapsed`, firing due continuations.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<BattleEvent> {
        let Some(battle) = self.battle.as_mut() else {
            return Vec::new();
        };
        let events = battle.advance(elapsed, &mut self.player, &mut self.rng, &self.config);
        self.after_continuations(&events);
        events
    }

    /// Fires the pending continuation, if any, after waiting out its delay.
    pub fn fire_pending(&mut self, scheduler: &mut impl Scheduler) -> Option<BattleEvent> {
        let battle = self.battle.as_mut()?;
        let continuation = battle.pending()?;
        scheduler.wait(continuation.delay);
        let event = battle.fire_pending(&mut self.player, &mut self.rng, &self.config);
        let events: Vec<BattleEvent> = event.iter().cloned().collect();
        self.after_continuations(&events);
        event
    }

    /// Fires continuations until the player may act again or the battle ends.
    pub fn run_pending(&mut self, scheduler: &mut impl Scheduler) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        while self.battle.as_ref().is_some_and(|b| b.is_animating()) {
            match self.fire_pending(scheduler) {
                Some(event) => events.push(event),
                None if self.battle.as_ref().is_some_and(|b| b.is_animating()) => continue,
                None => break,
            }
        }
        events
    }

    fn after_continuations(&mut self, events: &[BattleEvent]) {
        if events.is_empty() {
            return;
        }
        let finished = self
            .battle
            .as_ref()
            .is_some_and(|b| b.phase().is_terminal());
        if finished {
            let rewards = events.iter().find_map(|event| match event {
                BattleEvent::Victory { rewards } => Some(*rewards),
                _ => None,
            });
            self.end_battle(rewards);
        } else {
            self.persist();
        }
    }

    // =========================================================================
    // Character, inventory and shop
    // =========================================================================

    pub fn clear_battle_rewards(&mut self) {
        self.battle_rewards = None;
    }

    /// Town healer: every pool back to max.
    pub fn full_heal(&mut self) {
        self.player.full_heal();
        self.persist();
    }

    /// Tops up hp and mp before the town sends the player into a fight.
    pub fn restore_for_battle(&mut self) {
        self.player.restore_for_battle();
        self.persist();
    }

    pub fn equip(&mut self, item_id: ItemId, slot: EquipmentSlot) -> Result<Option<ItemId>, ActionError> {
        let displaced = equipment::equip(
            &mut self.player.inventory,
            &mut self.player.equipped,
            item_id,
            slot,
        )?;
        tracing::debug!(%item_id, %slot, "Equipped item");
        self.persist();
        Ok(displaced)
    }

    /// Moves the item in `slot` back to the inventory. Empty slot is a no-op.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> bool {
        let moved = equipment::unequip(&mut self.player.inventory, &mut self.player.equipped, slot);
        if moved {
            tracing::debug!(%slot, "Unequipped item");
            self.persist();
        }
        moved
    }

    /// Buys one unit of `kind` for `price` gold. Equipment is minted with a
    /// fresh id and appended to the inventory.
    pub fn purchase(&mut self, kind: PurchaseKind, price: u32) -> Result<Option<ItemId>, ActionError> {
        if !self.player.spend_gold(price) {
            return Err(ActionError::NotEnoughGold {
                price,
                gold: self.player.gold,
            });
        }

        let minted = match kind {
            PurchaseKind::HealthPotion => {
                self.player.health_potions = self.player.health_potions.saturating_add(1);
                None
            }
            PurchaseKind::ManaPotion => {
                self.player.mana_potions = self.player.mana_potions.saturating_add(1);
                None
            }
            PurchaseKind::Equipment(template) => {
                let item = template.instantiate();
                let id = item.id;
                self.player.inventory.push(item);
                Some(id)
            }
        };

        tracing::debug!(price, gold = self.player.gold, "Purchase complete");
        self.persist();
        Ok(minted)
    }

    pub fn element_modifiers(&self) -> ElementModifiers {
        element_modifiers(self.player.level, &self.player.equipped)
    }
}
