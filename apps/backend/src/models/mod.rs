//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flipdeck_core::parser;
use flipdeck_core::types::Group;

/// POST /deck body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeckRequest {
    pub text: Option<String>,
}

/// POST /deck response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeckResponse {
    pub id: String,
}

/// GET /deck/:id response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckResponse {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// One group in a deck preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub tag: String,
    pub item_count: usize,
}

/// GET /deck/:id/preview response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckPreview {
    pub groups: Vec<GroupSummary>,
    pub tags: Vec<String>,
    pub item_count: usize,
}

impl DeckPreview {
    pub fn from_groups(groups: &[Group]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|g| GroupSummary {
                    tag: g.tag.clone(),
                    item_count: g.len(),
                })
                .collect(),
            tags: parser::tags(groups),
            item_count: parser::item_count(groups),
        }
    }
}
