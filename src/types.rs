//! Common types used across the setup crate.

use indexmap::IndexMap;
use serde::Serialize;

/// Answers accumulated over the setup conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectState {
    /// File- and identifier-safe slug.
    pub machine_name: String,
    /// Display name.
    pub title: String,
    /// Set only when the user asked to add their own repository and gave a url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_repository_url: Option<String>,
    /// Feature key to the internal name of the chosen structure.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub features: IndexMap<String, String>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }
}
