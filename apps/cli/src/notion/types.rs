#![allow(dead_code)]

//! Typed wire model for the Notion create-page call.
//!
//! Only the shapes this tool actually sends and reads — plain-text rich
//! text, heading_3/paragraph blocks, and the three page properties
//! (title, checkbox, relation). Composition of these types is the `page`
//! module's job; nothing here talks to the network.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Rich text
// ────────────────────────────────────────────────────────────────────────────

/// One rich-text span. Pages built by this tool only ever carry plain text.
#[derive(Debug, Clone, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextContent,
}

#[derive(Debug, Clone, Serialize)]
struct TextContent {
    content: String,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: content.into(),
            },
        }
    }

    pub fn content(&self) -> &str {
        &self.text.content
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

/// One displayable page block — a heading_3 or a paragraph.
///
/// Notion keys the block payload by its type string, so exactly one of the
/// two payload fields is populated and the other is skipped entirely.
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    object: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading_3: Option<RichTextBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paragraph: Option<RichTextBody>,
}

#[derive(Debug, Clone, Serialize)]
struct RichTextBody {
    rich_text: Vec<RichText>,
}

impl Block {
    pub fn heading_3(text: impl Into<String>) -> Self {
        Self {
            object: "block",
            kind: "heading_3",
            heading_3: Some(RichTextBody {
                rich_text: vec![RichText::plain(text)],
            }),
            paragraph: None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            object: "block",
            kind: "paragraph",
            heading_3: None,
            paragraph: Some(RichTextBody {
                rich_text: vec![RichText::plain(text)],
            }),
        }
    }

    pub fn is_heading(&self) -> bool {
        self.kind == "heading_3"
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == "paragraph"
    }

    /// The block's plain-text content.
    pub fn plain_text(&self) -> &str {
        self.heading_3
            .as_ref()
            .or(self.paragraph.as_ref())
            .and_then(|body| body.rich_text.first())
            .map(RichText::content)
            .unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page properties
// ────────────────────────────────────────────────────────────────────────────

/// The property map for one created page. Field names serialize to the
/// database's column names.
#[derive(Debug, Clone, Serialize)]
pub struct PageProperties {
    #[serde(rename = "Name")]
    name: TitleProperty,
    #[serde(rename = "Generated")]
    generated: CheckboxProperty,
    #[serde(rename = "Race")]
    race: RelationProperty,
}

#[derive(Debug, Clone, Serialize)]
struct TitleProperty {
    title: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
struct CheckboxProperty {
    checkbox: bool,
}

#[derive(Debug, Clone, Serialize)]
struct RelationProperty {
    relation: Vec<RelationRef>,
}

#[derive(Debug, Clone, Serialize)]
struct RelationRef {
    id: String,
}

impl PageProperties {
    /// Builds the property map: title = name, Generated = true, and a Race
    /// relation that stays unlinked (empty) when no page id is known for
    /// the record's race.
    pub fn new(name: impl Into<String>, race_page_id: Option<String>) -> Self {
        Self {
            name: TitleProperty {
                title: vec![RichText::plain(name)],
            },
            generated: CheckboxProperty { checkbox: true },
            race: RelationProperty {
                relation: race_page_id.into_iter().map(|id| RelationRef { id }).collect(),
            },
        }
    }

    pub fn title_text(&self) -> &str {
        self.name
            .title
            .first()
            .map(RichText::content)
            .unwrap_or_default()
    }

    pub fn is_generated(&self) -> bool {
        self.generated.checkbox
    }

    pub fn race_is_linked(&self) -> bool {
        !self.race.relation.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / response envelopes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: PageProperties,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// The slice of the create-page response this tool cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Notion's error envelope (flat, unlike most APIs).
#[derive(Debug, Deserialize)]
pub(crate) struct NotionApiError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_block_wire_shape() {
        let value = serde_json::to_value(Block::heading_3("Description")).unwrap();
        assert_eq!(
            value,
            json!({
                "object": "block",
                "type": "heading_3",
                "heading_3": {
                    "rich_text": [
                        { "type": "text", "text": { "content": "Description" } }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_paragraph_block_omits_heading_payload() {
        let value = serde_json::to_value(Block::paragraph("She lies.")).unwrap();
        assert!(value.get("heading_3").is_none());
        assert_eq!(value["type"], "paragraph");
        assert_eq!(
            value["paragraph"]["rich_text"][0]["text"]["content"],
            "She lies."
        );
    }

    #[test]
    fn test_properties_wire_shape_with_linked_race() {
        let props = PageProperties::new("Maeve", Some("abc123".to_string()));
        let value = serde_json::to_value(props).unwrap();
        assert_eq!(value["Name"]["title"][0]["text"]["content"], "Maeve");
        assert_eq!(value["Generated"]["checkbox"], true);
        assert_eq!(value["Race"]["relation"][0]["id"], "abc123");
    }

    #[test]
    fn test_unknown_race_serializes_as_empty_relation() {
        let props = PageProperties::new("Maeve", None);
        let value = serde_json::to_value(props).unwrap();
        assert_eq!(value["Race"]["relation"], json!([]));
    }

    #[test]
    fn test_created_page_tolerates_missing_url() {
        let page: CreatedPage = serde_json::from_str(r#"{ "id": "page-1" }"#).unwrap();
        assert_eq!(page.id, "page-1");
        assert!(page.url.is_none());
    }
}
