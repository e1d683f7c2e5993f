use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpellId {
    Fireball,
    IceBolt,
    Lightning,
    Heal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellEffect {
    /// Fixed damage to the enemy
    Damage(u32),
    /// Fixed hp restored to the caster, capped at max hp
    Heal(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spell {
    pub id: SpellId,
    pub name: &'static str,
    pub icon: &'static str,
    pub cost: u32,
    pub effect: SpellEffect,
}

pub const SPELLBOOK: [Spell; 4] = [
    Spell {
        id: SpellId::Fireball,
        name: "Fireball",
        icon: "🔥",
        cost: 25,
        effect: SpellEffect::Damage(60),
    },
    Spell {
        id: SpellId::IceBolt,
        name: "Ice Bolt",
        icon: "❄️",
        cost: 20,
        effect: SpellEffect::Damage(55),
    },
    Spell {
        id: SpellId::Lightning,
        name: "Lightning",
        icon: "⚡",
        cost: 30,
        effect: SpellEffect::Damage(70),
    },
    Spell {
        id: SpellId::Heal,
        name: "Heal",
        icon: "💚",
        cost: 20,
        effect: SpellEffect::Heal(60),
    },
];

pub fn spell(id: SpellId) -> &'static Spell {
    match id {
        SpellId::Fireball => &SPELLBOOK[0],
        SpellId::IceBolt => &SPELLBOOK[1],
        SpellId::Lightning => &SPELLBOOK[2],
        SpellId::Heal => &SPELLBOOK[3],
    }
}
