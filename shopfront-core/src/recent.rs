//! Recently-viewed product tracking
use serde::{Deserialize, Serialize};

/// Maximum number of ids retained.
pub const MAX_ENTRIES: usize = 8;

/// Bounded, deduplicated, most-recent-first list of product ids shown on
/// the detail page. Session-scoped; the web layer persists it to
/// sessionStorage after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RecentlyViewed {
    ids: Vec<String>,
}

impl RecentlyViewed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view: move the id to the front (or prepend it) and truncate
    /// to [`MAX_ENTRIES`].
    pub fn record(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(MAX_ENTRIES);
    }

    /// The stored sequence with `exclude` filtered out, so a product page
    /// never lists itself.
    #[must_use]
    pub fn list(&self, exclude: &str) -> Vec<String> {
        self.ids
            .iter()
            .filter(|id| id.as_str() != exclude)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Serialize the ordered id array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.ids)
    }

    /// Deserialize a persisted list; corrupt content is treated as empty,
    /// never surfaced as an error.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(json) {
            Ok(mut ids) => {
                ids.truncate(MAX_ENTRIES);
                Self { ids }
            }
            Err(err) => {
                log::warn!("discarding corrupt recently-viewed payload: {err}");
                Self::new()
            }
        }
    }
}
