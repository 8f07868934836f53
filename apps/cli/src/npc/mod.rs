//! NPC record model — the structured bundle one generation request produces.
//!
//! A record is created once per request, normalized once (`normalize`),
//! formatted once (`page`), then handed off. Nothing retains or mutates it
//! afterward.

pub mod generate;
pub mod normalize;
mod tables;

use serde::{Deserialize, Serialize};

/// A complete generated character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub description: Description,
    pub physical: Physical,
    pub traits: PersonalityTraits,
    pub religion: Religion,
    pub quirks: Quirks,
    pub abilities: Abilities,
    pub relationship: Relationship,
    pub alignment: Alignment,
    pub hook: PlotHook,
}

/// Identity fields. `race` is a lowercase key — it drives both the
/// normalization rules and the Race relation lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    pub name: String,
    /// Alternate name used only when `race` is "kenku" (kenku are named
    /// after sounds they mimic). Swapped in by the normalizer.
    pub kenku_name: String,
    pub age: u32,
    pub gender: String,
    pub race: String,
    pub occupation: String,
    /// Capitalized subject pronoun ("He", "She") used to open the
    /// pronoun-prefixed description sentences.
    pub pronoun: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Physical {
    pub hair: String,
    pub eyes: String,
    pub skin: String,
    pub height_cm: u32,
    pub build: String,
    pub face: String,
    /// Optional free-text feature sentences, rendered only when present.
    pub special1: Option<String>,
    pub special2: Option<String>,
}

/// Two trait slots plus the race-conditional alternates that can replace
/// `primary` during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub primary: String,
    pub secondary: String,
    pub lizardfolk_primary: String,
    pub goliath_primary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Religion {
    pub description: String,
}

/// Free text holding one or more sentences terminated by `.`, `!` or `?`.
/// The formatter splits these back out into individual lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quirks {
    pub description: String,
}

/// The six raw ability scores. The key set is closed, so a fixed struct
/// (rather than a map) preserves stored order by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Abilities {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Abilities {
    /// Ability keys and raw scores in stored order.
    pub fn entries(&self) -> [(&'static str, i32); 6] {
        [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("constitution", self.constitution),
            ("intelligence", self.intelligence),
            ("wisdom", self.wisdom),
            ("charisma", self.charisma),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub orientation: String,
    pub status: String,
}

/// Tendency weights for the six alignment axes. Both neutral axes are kept
/// distinct here even though they render under the same label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Alignment {
    pub good: u32,
    pub moral_neutral: u32,
    pub evil: u32,
    pub lawful: u32,
    pub ethical_neutral: u32,
    pub chaotic: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotHook {
    pub description: String,
}
