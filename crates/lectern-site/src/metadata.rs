//! Site-level metadata.

use serde::{Deserialize, Serialize};

/// Title and description shown in the rendered site chrome.
///
/// Both fields must be non-empty; [`SiteConfig::compose`](crate::SiteConfig::compose)
/// rejects a configuration with missing metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}
