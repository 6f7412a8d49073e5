//! Composed site configuration.
//!
//! [`SiteConfig`] is built once per build invocation from declarative
//! fragments, handed to the external renderer, and discarded when the build
//! ends. It is never mutated; derived configurations are produced as new
//! values (see [`SiteConfig::with_plugin`]).

use std::collections::HashSet;

use serde::Serialize;

use crate::extensions::Extensions;
use crate::metadata::SiteMetadata;
use crate::nav::{NavEntry, SidebarGroup};
use crate::plugin::{DuplicatePluginError, PluginRegistration};
use crate::social::{SocialIcon, SocialLink, SocialLinkRaw};
use crate::validate::{ComposeError, Validator};

/// Validated, immutable description of a documentation site.
///
/// Construction goes through [`SiteConfig::compose`], which enforces every
/// structural invariant before a value exists. Fields are read-only;
/// orderings of navigation, sidebar, social links, and plugins match the
/// declarative input exactly.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    metadata: SiteMetadata,
    nav: Vec<NavEntry>,
    sidebar: Vec<SidebarGroup>,
    social: Vec<SocialLink>,
    plugins: Vec<PluginRegistration>,
    extensions: Extensions,
}

impl SiteConfig {
    /// Assemble a site configuration from declarative fragments.
    ///
    /// Validation is batched: every violated invariant is collected and the
    /// complete list is returned in one [`ComposeError::Validation`], so the
    /// author sees all problems in a single pass. No partial configuration
    /// is ever produced.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Validation`] when any invariant fails:
    /// - metadata title or description empty
    /// - a navigation or sidebar entry with an empty label or a link that is
    ///   neither an absolute `http(s)` URL nor a path starting with `/`
    /// - a sidebar group without items, or with an explicitly empty label
    /// - a social link with an unrecognized icon or a non-URL link
    /// - a plugin with an empty name, or two plugins sharing a name
    /// - a head extension tag with an empty element name
    pub fn compose(
        metadata: SiteMetadata,
        nav: Vec<NavEntry>,
        sidebar: Vec<SidebarGroup>,
        social: Vec<SocialLinkRaw>,
        plugins: Vec<PluginRegistration>,
        extensions: Option<Extensions>,
    ) -> Result<Self, ComposeError> {
        let extensions = extensions.unwrap_or_default();
        let mut validator = Validator::new();

        validator.require_non_empty(&metadata.title, "site.title");
        validator.require_non_empty(&metadata.description, "site.description");

        for (i, entry) in nav.iter().enumerate() {
            validator.require_non_empty(&entry.text, &format!("nav[{i}].text"));
            validator.require_link(&entry.link, &format!("nav[{i}].link"));
        }

        for (i, group) in sidebar.iter().enumerate() {
            if let Some(text) = &group.text {
                validator.require_non_empty(text, &format!("sidebar[{i}].text"));
            }
            if group.items.is_empty() {
                validator.push(format!("sidebar[{i}].items"), "group has no items");
            }
            for (j, item) in group.items.iter().enumerate() {
                validator.require_non_empty(&item.text, &format!("sidebar[{i}].items[{j}].text"));
                validator.require_link(&item.link, &format!("sidebar[{i}].items[{j}].link"));
            }
        }

        // Social icons are normalized while validating so that a recognized
        // icon string never survives as loose text in the composed value.
        let mut social_out = Vec::with_capacity(social.len());
        for (i, raw) in social.into_iter().enumerate() {
            validator.require_url(&raw.link, &format!("social[{i}].link"));
            match SocialIcon::parse(&raw.icon) {
                Some(icon) => social_out.push(SocialLink {
                    icon,
                    link: raw.link,
                }),
                None => validator.push(
                    format!("social[{i}].icon"),
                    format!("unrecognized icon \"{}\"", raw.icon),
                ),
            }
        }

        let mut seen = HashSet::new();
        for (i, plugin) in plugins.iter().enumerate() {
            validator.require_non_empty(&plugin.name, &format!("plugins[{i}].name"));
            if !plugin.name.is_empty() && !seen.insert(plugin.name.as_str()) {
                validator.push(
                    format!("plugins[{i}].name"),
                    format!("plugin \"{}\" registered more than once", plugin.name),
                );
            }
        }

        for (i, tag) in extensions.head.iter().enumerate() {
            validator.require_non_empty(&tag.tag, &format!("extensions.head[{i}].tag"));
        }

        validator.finish()?;

        Ok(Self {
            metadata,
            nav,
            sidebar,
            social: social_out,
            plugins,
            extensions,
        })
    }

    /// Derive a new configuration with an additional plugin registered.
    ///
    /// The original configuration is left untouched, so multiple derived
    /// configurations can coexist safely.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicatePluginError`] if a plugin of the same name is
    /// already registered.
    pub fn with_plugin(
        &self,
        registration: PluginRegistration,
    ) -> Result<Self, DuplicatePluginError> {
        if self.plugins.iter().any(|p| p.name == registration.name) {
            return Err(DuplicatePluginError {
                name: registration.name,
            });
        }

        let mut config = self.clone();
        config.plugins.push(registration);
        Ok(config)
    }

    /// Site metadata.
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Primary navigation entries in presentation order.
    #[must_use]
    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    /// Sidebar groups in presentation order.
    #[must_use]
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    /// Social links in presentation order.
    #[must_use]
    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    /// Plugin registrations in registration order.
    #[must_use]
    pub fn plugins(&self) -> &[PluginRegistration] {
        &self.plugins
    }

    /// Document-processing extensions.
    #[must_use]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
