//! Submission glue: compose one record into a page and hand it to the
//! document store. Success logs a one-line identity summary; failure is
//! logged and dropped so sibling submissions keep going.

use std::collections::HashMap;

use tracing::{error, info};

use crate::notion::PageStore;
use crate::npc::Npc;
use crate::page::compose;

/// Composes and submits one page for `npc`. Infallible by contract — a
/// store failure is logged and swallowed, never propagated.
pub async fn publish_npc(
    store: &dyn PageStore,
    race_relations: &HashMap<String, String>,
    npc: &Npc,
) {
    let properties = compose::page_properties(npc, race_relations);
    let children = compose::page_children(npc);

    let d = &npc.description;
    match store.create_page(properties, children).await {
        Ok(_) => info!("NPC: {} {} {} {}", d.name, d.gender, d.race, d.occupation),
        Err(e) => error!("Failed to publish {}: {e}", d.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::notion::types::{Block, CreatedPage, PageProperties};
    use crate::notion::NotionError;
    use crate::npc::generate::generate;
    use crate::npc::normalize::normalize;

    /// In-memory store capturing what was submitted.
    #[derive(Default)]
    struct RecordingStore {
        fail: bool,
        pages: Mutex<Vec<(String, usize)>>,
    }

    #[async_trait]
    impl PageStore for RecordingStore {
        async fn create_page(
            &self,
            properties: PageProperties,
            children: Vec<Block>,
        ) -> Result<CreatedPage, NotionError> {
            self.pages
                .lock()
                .unwrap()
                .push((properties.title_text().to_string(), children.len()));
            if self.fail {
                Err(NotionError::Api {
                    status: 500,
                    message: "store unavailable".to_string(),
                })
            } else {
                Ok(CreatedPage {
                    id: "page-1".to_string(),
                    url: None,
                })
            }
        }
    }

    #[tokio::test]
    async fn test_publish_submits_one_page_with_composed_blocks() {
        let store = RecordingStore::default();
        let npc = normalize(generate());

        publish_npc(&store, &HashMap::new(), &npc).await;

        let pages = store.pages.lock().unwrap();
        assert_eq!(pages.len(), 1);
        let (title, block_count) = &pages[0];
        assert_eq!(*title, npc.description.name);
        assert_eq!(*block_count, compose::page_children(&npc).len());
    }

    #[tokio::test]
    async fn test_publish_swallows_store_failure() {
        let store = RecordingStore {
            fail: true,
            ..Default::default()
        };
        let npc = normalize(generate());

        // Must complete without propagating the store error.
        publish_npc(&store, &HashMap::new(), &npc).await;

        assert_eq!(store.pages.lock().unwrap().len(), 1);
    }
}
