//! Thematic tags attached to catalog entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// id -> name lookup, used to show a selected tag id by its name.
pub fn tag_names(tags: &[Tag]) -> HashMap<String, String> {
    tags.iter().map(|tag| (tag.id.clone(), tag.name.clone())).collect()
}
