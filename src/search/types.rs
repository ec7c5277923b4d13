use serde::{Deserialize, Serialize};

/// One news search result as returned by a search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub snippet: String,
}
