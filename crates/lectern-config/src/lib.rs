//! Declarative site configuration loading for Lectern.
//!
//! Parses `lectern.toml` documents with serde, provides auto-discovery of
//! config files in parent directories, expands environment variables, and
//! composes the result into a validated
//! [`SiteConfig`](lectern_site::SiteConfig).
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `social[].link`
//! - every string value inside `plugins[].options`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use lectern_site::{
    ComposeError, Extensions, NavEntry, PluginRegistration, SidebarGroup, SiteConfig,
    SiteMetadata, SocialLinkRaw,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lectern.toml";

/// Raw declarative document as parsed from TOML.
///
/// All sections are optional at the parse level; structural invariants are
/// enforced by [`SiteConfig::compose`] so that the author gets the complete
/// violation list instead of the first parse hiccup.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteDocument {
    site: SiteMetadata,
    nav: Vec<NavEntry>,
    sidebar: Vec<SidebarGroup>,
    social: Vec<SocialLinkRaw>,
    plugins: Vec<PluginRegistration>,
    extensions: Option<Extensions>,
}

impl SiteDocument {
    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (i, social) in self.social.iter_mut().enumerate() {
            social.link = expand::expand_env(&social.link, &format!("social[{i}].link"))?;
        }

        for (i, plugin) in self.plugins.iter_mut().enumerate() {
            expand::expand_json_strings(&mut plugin.options, &format!("plugins[{i}].options"))?;
        }

        Ok(())
    }

    /// Hand the parsed fragments to the composer.
    fn compose(self) -> Result<SiteConfig, ComposeError> {
        SiteConfig::compose(
            self.site,
            self.nav,
            self.sidebar,
            self.social,
            self.plugins,
            self.extensions,
        )
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No config file discovered.
    #[error("No lectern.toml found in current directory or parents")]
    NotDiscovered,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social[0].link`").
        field: String,
        /// Error message (e.g., "${`ORG_URL`} not set").
        message: String,
    },
    /// The document violates structural invariants.
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Load a composed site configuration.
///
/// If `config_path` is provided, loads from that file. Otherwise, searches
/// for `lectern.toml` in the current directory and parents.
///
/// # Errors
///
/// Returns an error if an explicit `config_path` doesn't exist, no file is
/// discovered, parsing fails, environment expansion fails, or the document
/// violates a structural invariant.
pub fn load(config_path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => discover_config().ok_or(ConfigError::NotDiscovered)?,
    };

    tracing::debug!(path = %path.display(), "Loading site configuration");
    let content = std::fs::read_to_string(&path)?;
    load_from_str(&content)
}

/// Load a composed site configuration from TOML content.
///
/// # Errors
///
/// Returns an error if parsing fails, environment expansion fails, or the
/// document violates a structural invariant.
pub fn load_from_str(content: &str) -> Result<SiteConfig, ConfigError> {
    let mut document: SiteDocument = toml::from_str(content)?;
    document.expand_env_vars()?;
    let config = document.compose()?;
    Ok(config)
}

/// Search for the config file in the current directory and parents.
fn discover_config() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Discovered site configuration");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use lectern_site::SocialIcon;

    use super::*;

    #[test]
    fn test_parse_full_document() {
        let toml = r#"
[site]
title = "Computer Graphics"
description = "Course labs and reference"

[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Repo"
link = "https://github.com/org/repo"

[[sidebar]]
text = "Labs"
items = [
    { text = "OpenGL Template", link = "/opengl-template" },
    { text = "Shaders", link = "/shaders" },
]

[[social]]
icon = "github"
link = "https://github.com/org"

[[plugins]]
name = "katex"

[plugins.options]
output = "html"

[[plugins]]
name = "mermaid"

[extensions]
head = [{ tag = "link", attrs = { rel = "icon", href = "/favicon.ico" } }]
markdown = { math = true }
"#;
        let config = load_from_str(toml).unwrap();

        assert_eq!(config.metadata().title, "Computer Graphics");
        assert_eq!(config.nav().len(), 2);
        assert_eq!(config.nav()[1].link, "https://github.com/org/repo");
        assert_eq!(config.sidebar()[0].text, Some("Labs".to_owned()));
        assert_eq!(config.sidebar()[0].items.len(), 2);
        assert_eq!(config.social()[0].icon, SocialIcon::GitHub);
        let names: Vec<_> = config.plugins().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["katex", "mermaid"]);
        assert_eq!(config.plugins()[0].options["output"], "html");
        assert_eq!(config.extensions().head[0].tag, "link");
        assert!(config.extensions().markdown.math);
    }

    #[test]
    fn test_minimal_valid_document() {
        let toml = r#"
[site]
title = "X"
description = "Y"
"#;
        let config = load_from_str(toml).unwrap();

        assert!(config.nav().is_empty());
        assert!(config.sidebar().is_empty());
        assert!(config.social().is_empty());
        assert!(config.plugins().is_empty());
    }

    #[test]
    fn test_empty_document_reports_metadata_violations() {
        let err = load_from_str("").unwrap_err();

        assert!(matches!(err, ConfigError::Compose(_)));
        let msg = err.to_string();
        assert!(msg.contains("site.title"));
        assert!(msg.contains("site.description"));
    }

    #[test]
    fn test_sidebar_group_without_items_rejected() {
        let toml = r#"
[site]
title = "X"
description = "Y"

[[sidebar]]
text = "Labs"
items = []
"#;
        let err = load_from_str(toml).unwrap_err();

        assert!(err.to_string().contains("sidebar[0].items"));
    }

    #[test]
    fn test_duplicate_plugins_rejected() {
        let toml = r#"
[site]
title = "X"
description = "Y"

[[plugins]]
name = "katex"

[[plugins]]
name = "katex"
"#;
        let err = load_from_str(toml).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("katex"));
        assert!(msg.contains("more than once"));
    }

    #[test]
    fn test_unrecognized_icon_rejected() {
        let toml = r#"
[site]
title = "X"
description = "Y"

[[social]]
icon = "unknown-icon"
link = "https://x.com"
"#;
        let err = load_from_str(toml).unwrap_err();

        assert!(err.to_string().contains("unknown-icon"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = load_from_str("[site\ntitle = ").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_nav_ordering_preserved_from_document() {
        let toml = r#"
[site]
title = "X"
description = "Y"

[[nav]]
text = "First"
link = "/first"

[[nav]]
text = "Second"
link = "/second"

[[nav]]
text = "Third"
link = "/third"
"#;
        let config = load_from_str(toml).unwrap();

        let texts: Vec<_> = config.nav().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_social_link_env_expansion() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LECTERN_TEST_ORG_URL", "https://github.com/course-org");
        }

        let toml = r#"
[site]
title = "X"
description = "Y"

[[social]]
icon = "github"
link = "${LECTERN_TEST_ORG_URL}"
"#;
        let config = load_from_str(toml).unwrap();

        assert_eq!(config.social()[0].link, "https://github.com/course-org");

        unsafe {
            std::env::remove_var("LECTERN_TEST_ORG_URL");
        }
    }

    #[test]
    fn test_plugin_options_env_expansion_with_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_TEST_KROKI_URL");
        }

        let toml = r#"
[site]
title = "X"
description = "Y"

[[plugins]]
name = "kroki"

[plugins.options]
server = "${LECTERN_TEST_KROKI_URL:-https://kroki.io}"
"#;
        let config = load_from_str(toml).unwrap();

        assert_eq!(config.plugins()[0].options["server"], "https://kroki.io");
    }

    #[test]
    fn test_missing_env_var_reports_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_TEST_MISSING_VAR");
        }

        let toml = r#"
[site]
title = "X"
description = "Y"

[[social]]
icon = "github"
link = "${LECTERN_TEST_MISSING_VAR}"
"#;
        let err = load_from_str(toml).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("LECTERN_TEST_MISSING_VAR"));
        assert!(msg.contains("social[0].link"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[site]
title = "X"
description = "Y"

[[nav]]
text = "Home"
link = "/"
"#,
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.metadata().title, "X");
        assert_eq!(config.nav()[0].link, "/");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_load_from_str_idempotent() {
        let toml = r#"
[site]
title = "X"
description = "Y"

[[plugins]]
name = "katex"
"#;

        assert_eq!(load_from_str(toml).unwrap(), load_from_str(toml).unwrap());
    }
}
