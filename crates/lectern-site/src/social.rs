//! Social links shown in the site header.
//!
//! Icons come from a fixed, recognized set; anything else is rejected during
//! composition so that the renderer never receives an icon it cannot draw.

use serde::{Deserialize, Serialize};

/// Recognized social link icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    GitHub,
    GitLab,
    Bitbucket,
    Twitter,
    X,
    Mastodon,
    Bluesky,
    Discord,
    Slack,
    LinkedIn,
    Facebook,
    Instagram,
    YouTube,
    Npm,
    Rss,
}

impl SocialIcon {
    /// Parse an icon identifier from the declarative input.
    ///
    /// Returns `None` if the identifier is not a recognized icon.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "github" => Some(Self::GitHub),
            "gitlab" => Some(Self::GitLab),
            "bitbucket" => Some(Self::Bitbucket),
            "twitter" => Some(Self::Twitter),
            "x" => Some(Self::X),
            "mastodon" => Some(Self::Mastodon),
            "bluesky" => Some(Self::Bluesky),
            "discord" => Some(Self::Discord),
            "slack" => Some(Self::Slack),
            "linkedin" => Some(Self::LinkedIn),
            "facebook" => Some(Self::Facebook),
            "instagram" => Some(Self::Instagram),
            "youtube" => Some(Self::YouTube),
            "npm" => Some(Self::Npm),
            "rss" => Some(Self::Rss),
            _ => None,
        }
    }

    /// Canonical identifier for this icon.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Bitbucket => "bitbucket",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Mastodon => "mastodon",
            Self::Bluesky => "bluesky",
            Self::Discord => "discord",
            Self::Slack => "slack",
            Self::LinkedIn => "linkedin",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::Npm => "npm",
            Self::Rss => "rss",
        }
    }
}

/// Social link as it appears in the declarative input.
///
/// The icon identifier has not been checked yet; composition validates it
/// against [`SocialIcon`] and produces a [`SocialLink`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLinkRaw {
    /// Icon identifier (e.g. `"github"`).
    pub icon: String,
    /// Absolute URL the icon links to.
    pub link: String,
}

/// Validated social link in a composed configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Recognized icon.
    pub icon: SocialIcon,
    /// Absolute URL the icon links to.
    pub link: String,
}
