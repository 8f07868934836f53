use std::collections::HashMap;

use anyhow::{Context, Result};

/// Race keys and the environment variables holding their related page ids.
/// Every entry is optional — a missing variable leaves that race unlinked.
/// Note the table knows "lizardfolk" while generated records carry the
/// gendered "lizardman"/"lizardwoman" keys, so those records stay unlinked.
const RACE_RELATION_ENV: &[(&str, &str)] = &[
    ("aasimar", "AASIMAR"),
    ("dragonborn", "DRAGONBORN"),
    ("dwarf", "DWARF"),
    ("mountain dwarf", "MOUNTAIN_DWARF"),
    ("hill dwarf", "HILL_DWARF"),
    ("elf", "ELF"),
    ("drow", "DROW"),
    ("high elf", "HIGH_ELF"),
    ("wood elf", "WOOD_ELF"),
    ("firbolg", "FIRBOLG"),
    ("gnome", "GNOME"),
    ("forest gnome", "FOREST_GNOME"),
    ("rock gnome", "ROCK_GNOME"),
    ("giant", "GIANT"),
    ("goblin", "GOBLIN"),
    ("goblinoid", "GOBLINOID"),
    ("goliath", "GOLIATH"),
    ("halfling", "HALFLING"),
    ("lightfoot halfling", "LIGHTFOOT_HALFLING"),
    ("stout halfling", "STOUT_HALFLING"),
    ("half-elf", "HALF_ELF"),
    ("half-orc", "HALF_ORC"),
    ("human", "HUMAN"),
    ("kenku", "KENKU"),
    ("lizardfolk", "LIZARDFOLK"),
    ("medusa", "MEDUSA"),
    ("ogre", "OGRE"),
    ("orc", "ORC"),
    ("tabaxi", "TABAXI"),
    ("tiefling", "TIEFLING"),
    ("triton", "TRITON"),
    ("troglodyte", "TROGLODYTE"),
];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_api_key: String,
    pub notion_database_id: String,
    pub rust_log: String,
    /// Lowercase race key → related page id in the race database.
    pub race_relations: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            notion_api_key: require_env("NOTION_API_KEY")?,
            notion_database_id: require_env("NOTION_DATABASE_ID")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            race_relations: race_relations_from_env(),
        })
    }
}

fn race_relations_from_env() -> HashMap<String, String> {
    RACE_RELATION_ENV
        .iter()
        .filter_map(|(race, var)| std::env::var(var).ok().map(|id| (race.to_string(), id)))
        .collect()
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
