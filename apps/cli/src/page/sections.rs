//! Section assemblers and the display-only formatting primitives.
//!
//! Five pure functions each turn a normalized record into the ordered lines
//! of one page section. Ability scores are clamped and modified for display
//! only — the record itself is never mutated here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::npc::Npc;

/// Matches one sentence: a run of non-terminal characters followed by one
/// or more of `.`, `!`, `?`. Text with no terminal punctuation yields no
/// matches at all.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

// ────────────────────────────────────────────────────────────────────────────
// Formatting primitives
// ────────────────────────────────────────────────────────────────────────────

/// Converts a height in centimeters to a `{feet}'{inches}"` display string.
///
/// cm × 0.3937 ÷ 12 → real feet; both feet and inches floor. Inches land in
/// 0–11 for any finite non-negative input; no clamping is applied.
pub fn to_feet(cm: f64) -> String {
    let real_feet = cm * 0.3937 / 12.0;
    let feet = real_feet.floor();
    let inches = ((real_feet - feet) * 12.0).floor();
    format!("{feet}'{inches}\"")
}

/// Renders a raw ability score as `{score} [{signed modifier}]`.
///
/// Raw scores below 3 clamp up to 3 for display. The modifier is
/// floor((score − 10) / 2) — `div_euclid` keeps the floor on negatives, so
/// an effective 9 renders `[-1]`, not `[0]`. Positive modifiers carry an
/// explicit `+`; zero renders bare.
pub fn render_ability(raw: i32) -> String {
    let ability = raw.max(3);
    let modifier = (ability - 10).div_euclid(2);
    if modifier > 0 {
        format!("{ability} [+{modifier}]")
    } else {
        format!("{ability} [{modifier}]")
    }
}

/// Splits free text into trimmed sentences on terminal punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Section assemblers
// ────────────────────────────────────────────────────────────────────────────

/// Description: identity sentence, the pronoun-prefixed physical sentences,
/// then any special feature sentences that are present.
pub fn description_lines(npc: &Npc) -> Vec<String> {
    let d = &npc.description;
    let p = &npc.physical;

    let mut lines = vec![
        format!(
            "{} is a {} year old {} {} {}.",
            d.name, d.age, d.gender, d.race, d.occupation
        ),
        format!("{} has {} and {}.", d.pronoun, p.hair, p.eyes),
        format!("{} has {}.", d.pronoun, p.skin),
        format!(
            "{} stands {}cm ({}) tall and has {}.",
            d.pronoun,
            p.height_cm,
            to_feet(f64::from(p.height_cm)),
            p.build
        ),
        format!("{} has {}.", d.pronoun, p.face),
    ];

    if let Some(special) = &p.special1 {
        lines.push(special.clone());
    }
    if let Some(special) = &p.special2 {
        lines.push(special.clone());
    }

    lines
}

/// Personality Traits: religion, the two trait slots, then every sentence
/// split out of the quirks text. Every item is trimmed.
pub fn personality_lines(npc: &Npc) -> Vec<String> {
    let mut lines = vec![
        npc.religion.description.clone(),
        npc.traits.primary.clone(),
        npc.traits.secondary.clone(),
    ];
    lines.extend(split_sentences(&npc.quirks.description));

    lines.iter().map(|line| line.trim().to_string()).collect()
}

/// Ability Scores: one line per ability in the record's stored key order.
pub fn ability_lines(npc: &Npc) -> Vec<String> {
    npc.abilities
        .entries()
        .iter()
        .map(|(key, score)| format!("{} - {}", key.to_uppercase(), render_ability(*score)))
        .collect()
}

/// Relationships: exactly two fixed lines.
pub fn relationship_lines(npc: &Npc) -> Vec<String> {
    vec![
        format!("Sexual Orientation - {}", npc.relationship.orientation),
        format!("Relationship Status - {}", npc.relationship.status),
    ]
}

/// Alignment Tendencies: exactly six fixed lines. Both neutral axes render
/// under the literal label "Neutral".
pub fn alignment_lines(npc: &Npc) -> Vec<String> {
    let a = &npc.alignment;
    vec![
        format!("Good - {}", a.good),
        format!("Neutral - {}", a.moral_neutral),
        format!("Evil - {}", a.evil),
        format!("Lawful - {}", a.lawful),
        format!("Neutral - {}", a.ethical_neutral),
        format!("Chaotic - {}", a.chaotic),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
