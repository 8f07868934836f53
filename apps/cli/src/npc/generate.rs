//! Table-driven random NPC generator.
//!
//! Produces one complete record per call. Output is raw — callers apply
//! `normalize` before formatting so the race-conditional overrides fire
//! exactly once.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::npc::tables;
use crate::npc::{
    Abilities, Alignment, Description, Npc, PersonalityTraits, Physical, PlotHook, Quirks,
    Relationship, Religion,
};

/// Chance of each optional special feature appearing on a record.
const SPECIAL_FEATURE_CHANCE: f64 = 0.25;

/// Generates one NPC record with freshly rolled attributes.
pub fn generate() -> Npc {
    let mut rng = rand::thread_rng();

    let female = rng.gen_bool(0.5);
    let (gender, pronoun, name) = if female {
        ("female", "She", pick(&mut rng, tables::FEMALE_NAMES))
    } else {
        ("male", "He", pick(&mut rng, tables::MALE_NAMES))
    };

    // "lizardfolk" is a table key only — records carry the gendered form,
    // which is what the normalizer and the relation lookup see.
    let race = match pick(&mut rng, tables::RACES) {
        "lizardfolk" if female => "lizardwoman".to_string(),
        "lizardfolk" => "lizardman".to_string(),
        other => other.to_string(),
    };

    let hair = format!(
        "{} {} hair",
        pick(&mut rng, tables::HAIR_STYLES),
        pick(&mut rng, tables::HAIR_COLORS)
    );

    Npc {
        description: Description {
            name: name.to_string(),
            kenku_name: pick(&mut rng, tables::KENKU_NAMES).to_string(),
            age: rng.gen_range(16..=95),
            gender: gender.to_string(),
            race,
            occupation: pick(&mut rng, tables::OCCUPATIONS).to_string(),
            pronoun: pronoun.to_string(),
        },
        physical: Physical {
            hair,
            eyes: format!("{} eyes", pick(&mut rng, tables::EYE_COLORS)),
            skin: format!("{} skin", pick(&mut rng, tables::SKIN_TONES)),
            height_cm: rng.gen_range(145..=205),
            build: pick(&mut rng, tables::BUILDS).to_string(),
            face: pick(&mut rng, tables::FACES).to_string(),
            special1: roll_special(&mut rng),
            special2: roll_special(&mut rng),
        },
        traits: PersonalityTraits {
            primary: pick(&mut rng, tables::TRAITS).to_string(),
            secondary: pick(&mut rng, tables::TRAITS).to_string(),
            lizardfolk_primary: pick(&mut rng, tables::LIZARDFOLK_TRAITS).to_string(),
            goliath_primary: pick(&mut rng, tables::GOLIATH_TRAITS).to_string(),
        },
        religion: Religion {
            description: pick(&mut rng, tables::RELIGIONS).to_string(),
        },
        quirks: Quirks {
            description: roll_quirks(&mut rng),
        },
        abilities: Abilities {
            strength: roll_3d6(&mut rng),
            dexterity: roll_3d6(&mut rng),
            constitution: roll_3d6(&mut rng),
            intelligence: roll_3d6(&mut rng),
            wisdom: roll_3d6(&mut rng),
            charisma: roll_3d6(&mut rng),
        },
        relationship: Relationship {
            orientation: pick(&mut rng, tables::ORIENTATIONS).to_string(),
            status: pick(&mut rng, tables::STATUSES).to_string(),
        },
        alignment: Alignment {
            good: rng.gen_range(0..=10),
            moral_neutral: rng.gen_range(0..=10),
            evil: rng.gen_range(0..=10),
            lawful: rng.gen_range(0..=10),
            ethical_neutral: rng.gen_range(0..=10),
            chaotic: rng.gen_range(0..=10),
        },
        hook: PlotHook {
            description: pick(&mut rng, tables::HOOKS).to_string(),
        },
    }
}

fn pick<'a>(rng: &mut impl Rng, table: &[&'a str]) -> &'a str {
    table.choose(rng).copied().expect("flavor tables are non-empty")
}

fn roll_3d6(rng: &mut impl Rng) -> i32 {
    (0..3).map(|_| rng.gen_range(1..=6)).sum()
}

fn roll_special(rng: &mut impl Rng) -> Option<String> {
    rng.gen_bool(SPECIAL_FEATURE_CHANCE)
        .then(|| pick(rng, tables::SPECIAL_FEATURES).to_string())
}

/// One to three quirk sentences joined into a single free-text field.
/// The formatter splits them back apart on terminal punctuation.
fn roll_quirks(rng: &mut impl Rng) -> String {
    let count = rng.gen_range(1..=3);
    tables::QUIRKS
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_record_has_populated_identity() {
        for _ in 0..50 {
            let npc = generate();
            assert!(!npc.description.name.is_empty());
            assert!(!npc.description.kenku_name.is_empty());
            assert!(!npc.description.race.is_empty());
            assert!(!npc.description.occupation.is_empty());
            assert!((16..=95).contains(&npc.description.age));
        }
    }

    #[test]
    fn test_ability_scores_are_3d6_range() {
        for _ in 0..50 {
            let npc = generate();
            for (key, score) in npc.abilities.entries() {
                assert!(
                    (3..=18).contains(&score),
                    "{key} rolled {score}, outside 3d6 range"
                );
            }
        }
    }

    #[test]
    fn test_quirks_always_split_into_at_least_one_sentence() {
        for _ in 0..50 {
            let npc = generate();
            let sentences = crate::page::sections::split_sentences(&npc.quirks.description);
            // 1-3 table entries, and one entry is itself two sentences.
            assert!(
                !sentences.is_empty() && sentences.len() <= 6,
                "expected 1-6 quirk sentences, got {}",
                sentences.len()
            );
        }
    }

    #[test]
    fn test_race_is_never_the_raw_lizardfolk_key() {
        for _ in 0..200 {
            let npc = generate();
            assert_ne!(npc.description.race, "lizardfolk");
        }
    }

    #[test]
    fn test_pronoun_matches_gender() {
        for _ in 0..50 {
            let npc = generate();
            match npc.description.gender.as_str() {
                "female" => assert_eq!(npc.description.pronoun, "She"),
                "male" => assert_eq!(npc.description.pronoun, "He"),
                other => panic!("unexpected gender {other}"),
            }
        }
    }
}
