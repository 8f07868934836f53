//! Document Composer — assembles the final property map and ordered block
//! sequence for one normalized record. Output is inert data; submission is
//! the `PageStore` implementation's job.

use std::collections::HashMap;

use crate::notion::types::{Block, PageProperties};
use crate::npc::Npc;
use crate::page::sections;

/// Builds the page property map. `race_relations` maps lowercase race keys
/// to the configured related page ids; unknown races yield an unlinked
/// relation.
pub fn page_properties(npc: &Npc, race_relations: &HashMap<String, String>) -> PageProperties {
    PageProperties::new(
        &npc.description.name,
        race_relations.get(&npc.description.race).cloned(),
    )
}

/// Builds the ordered block sequence: one heading per section followed by
/// one paragraph per assembled line, then the Plot Hook heading and its
/// single paragraph.
pub fn page_children(npc: &Npc) -> Vec<Block> {
    let sections: [(&str, Vec<String>); 5] = [
        ("Description", sections::description_lines(npc)),
        ("Personality Traits", sections::personality_lines(npc)),
        ("Ability Scores", sections::ability_lines(npc)),
        ("Relationships", sections::relationship_lines(npc)),
        ("Alignment Tendencies", sections::alignment_lines(npc)),
    ];

    let mut children = Vec::new();
    for (title, lines) in sections {
        children.push(Block::heading_3(title));
        children.extend(lines.into_iter().map(Block::paragraph));
    }

    children.push(Block::heading_3("Plot Hook"));
    children.push(Block::paragraph(npc.hook.description.clone()));

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::generate::generate;
    use crate::npc::normalize::normalize;

    fn race_table() -> HashMap<String, String> {
        HashMap::from([
            ("human".to_string(), "page-human".to_string()),
            ("goliath".to_string(), "page-goliath".to_string()),
        ])
    }

    #[test]
    fn test_properties_title_is_record_name_and_generated_is_set() {
        let npc = normalize(generate());
        let props = page_properties(&npc, &race_table());
        assert_eq!(props.title_text(), npc.description.name);
        assert!(props.is_generated());
    }

    #[test]
    fn test_known_race_links_relation_unknown_race_does_not() {
        let mut npc = normalize(generate());

        npc.description.race = "human".to_string();
        assert!(page_properties(&npc, &race_table()).race_is_linked());

        npc.description.race = "medusa".to_string();
        assert!(!page_properties(&npc, &race_table()).race_is_linked());
    }

    #[test]
    fn test_children_always_carry_six_headings_in_order() {
        for _ in 0..20 {
            let npc = normalize(generate());
            let children = page_children(&npc);
            let headings: Vec<&str> = children
                .iter()
                .filter(|b| b.is_heading())
                .map(|b| b.plain_text())
                .collect();
            assert_eq!(
                headings,
                vec![
                    "Description",
                    "Personality Traits",
                    "Ability Scores",
                    "Relationships",
                    "Alignment Tendencies",
                    "Plot Hook",
                ]
            );
        }
    }

    #[test]
    fn test_paragraph_count_is_section_lines_plus_hook() {
        for _ in 0..20 {
            let npc = normalize(generate());
            let expected = sections::description_lines(&npc).len()
                + sections::personality_lines(&npc).len()
                + sections::ability_lines(&npc).len()
                + sections::relationship_lines(&npc).len()
                + sections::alignment_lines(&npc).len()
                + 1;
            let paragraphs = page_children(&npc)
                .iter()
                .filter(|b| b.is_paragraph())
                .count();
            assert_eq!(paragraphs, expected);
        }
    }

    #[test]
    fn test_hook_paragraph_is_verbatim_and_last() {
        let npc = normalize(generate());
        let children = page_children(&npc);
        let last = children.last().unwrap();
        assert!(last.is_paragraph());
        assert_eq!(last.plain_text(), npc.hook.description);
    }
}
