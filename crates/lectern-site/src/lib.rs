//! Site configuration model and composer for Lectern.
//!
//! This crate provides:
//! - [`SiteConfig`]: the validated, immutable description of a documentation
//!   site (metadata, navigation, sidebar, social links, plugins, extensions)
//! - [`SiteConfig::compose`]: the batch-validating constructor that turns
//!   declarative fragments into a [`SiteConfig`]
//!
//! Validation collects every violated invariant before failing, so a site
//! author sees all problems in one pass.
//!
//! # Quick Start
//!
//! ```
//! use lectern_site::{NavEntry, SiteConfig, SiteMetadata};
//!
//! let config = SiteConfig::compose(
//!     SiteMetadata {
//!         title: "Computer Graphics".to_owned(),
//!         description: "Course labs and reference".to_owned(),
//!     },
//!     vec![NavEntry {
//!         text: "Home".to_owned(),
//!         link: "/".to_owned(),
//!     }],
//!     Vec::new(),
//!     Vec::new(),
//!     Vec::new(),
//!     None,
//! )?;
//!
//! assert_eq!(config.nav().len(), 1);
//! # Ok::<(), lectern_site::ComposeError>(())
//! ```

pub(crate) mod extensions;
pub(crate) mod metadata;
pub(crate) mod nav;
pub(crate) mod plugin;
pub(crate) mod site;
pub(crate) mod social;
pub(crate) mod validate;

pub use extensions::{Extensions, HeadTag, MarkdownOptions};
pub use metadata::SiteMetadata;
pub use nav::{NavEntry, SidebarGroup};
pub use plugin::{DuplicatePluginError, PluginRegistration};
pub use site::SiteConfig;
pub use social::{SocialIcon, SocialLink, SocialLinkRaw};
pub use validate::{ComposeError, Violation};
