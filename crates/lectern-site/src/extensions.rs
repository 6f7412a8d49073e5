//! Document-processing extensions.
//!
//! Extensions are hooks the renderer applies to every page: extra `<head>`
//! elements and markdown processing switches. They are optional; a
//! configuration without an `[extensions]` section gets the defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Element injected into the `<head>` of every rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name (e.g. `link`, `meta`, `script`).
    pub tag: String,
    /// Element attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Inline element content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Markdown processing switches passed through to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Enable math typesetting for `$...$` / `$$...$$` blocks.
    pub math: bool,
    /// Show line numbers in fenced code blocks.
    pub line_numbers: bool,
}

/// Optional document-processing hooks for a site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extensions {
    /// Head elements injected into every page.
    pub head: Vec<HeadTag>,
    /// Markdown processing switches.
    pub markdown: MarkdownOptions,
}
