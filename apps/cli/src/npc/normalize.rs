//! Race-conditional record overrides, applied once before any rendering.
//!
//! The rules are ordered, independent, and non-exclusive — each is checked
//! against the record's race and more than one may fire. Only
//! `traits.primary` and `description.name` are ever replaced; everything
//! else passes through untouched. Applying the normalizer twice is a no-op.

use crate::npc::Npc;

/// Applies the race-conditional overrides and returns the normalized record.
pub fn normalize(mut npc: Npc) -> Npc {
    if npc.description.race == "lizardman" || npc.description.race == "lizardwoman" {
        npc.traits.primary = npc.traits.lizardfolk_primary.clone();
    }
    if npc.description.race == "goliath" {
        npc.traits.primary = npc.traits.goliath_primary.clone();
    }
    if npc.description.race == "kenku" {
        npc.description.name = npc.description.kenku_name.clone();
    }
    npc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::generate::generate;

    fn record_with_race(race: &str) -> Npc {
        let mut npc = generate();
        npc.description.race = race.to_string();
        npc.description.name = "Original Name".to_string();
        npc.description.kenku_name = "Rusted Hinge".to_string();
        npc.traits.primary = "base trait".to_string();
        npc.traits.lizardfolk_primary = "lizardfolk trait".to_string();
        npc.traits.goliath_primary = "goliath trait".to_string();
        npc
    }

    #[test]
    fn test_lizardman_and_lizardwoman_take_lizardfolk_trait() {
        for race in ["lizardman", "lizardwoman"] {
            let npc = normalize(record_with_race(race));
            assert_eq!(npc.traits.primary, "lizardfolk trait");
            assert_eq!(npc.description.name, "Original Name");
        }
    }

    #[test]
    fn test_goliath_takes_goliath_trait() {
        let npc = normalize(record_with_race("goliath"));
        assert_eq!(npc.traits.primary, "goliath trait");
    }

    #[test]
    fn test_kenku_takes_mimicry_name() {
        let npc = normalize(record_with_race("kenku"));
        assert_eq!(npc.description.name, "Rusted Hinge");
        // Trait slots are untouched by the kenku rule.
        assert_eq!(npc.traits.primary, "base trait");
    }

    #[test]
    fn test_unmatched_race_passes_through_unchanged() {
        let before = record_with_race("human");
        let after = normalize(before.clone());
        assert_eq!(after.description.name, before.description.name);
        assert_eq!(after.traits.primary, before.traits.primary);
        assert_eq!(after.traits.secondary, before.traits.secondary);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for race in ["lizardwoman", "goliath", "kenku", "human"] {
            let once = normalize(record_with_race(race));
            let twice = normalize(once.clone());
            assert_eq!(twice.description.name, once.description.name);
            assert_eq!(twice.traits.primary, once.traits.primary);
        }
    }
}
