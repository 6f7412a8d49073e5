//! Navigation entries and sidebar groups.
//!
//! A [`NavEntry`] is a single clickable link; the same type is used for the
//! primary navigation bar and for sidebar group items. A [`SidebarGroup`]
//! clusters entries in the side panel, with an optional label.

use serde::{Deserialize, Serialize};

/// Single clickable link in the navigation bar or a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Link target: an absolute `http://`/`https://` URL or a site-relative
    /// path beginning with `/`.
    pub link: String,
}

/// Labeled or unlabeled cluster of entries shown in the side panel.
///
/// Groups without a `text` label are rendered as default groups. A group
/// must contain at least one item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Entries in presentation order.
    #[serde(default)]
    pub items: Vec<NavEntry>,
}
