//! Rendering plugin registrations.
//!
//! A registration declares that a named extension (math typesetting, diagram
//! rendering, ...) is active during content rendering. The options payload is
//! opaque here; the plugin owns its own schema validation downstream.

use serde::{Deserialize, Serialize};

/// Declaration that a named rendering extension is active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PluginRegistration {
    /// Plugin name; must be unique within a configuration and must
    /// correspond to a plugin known to the renderer.
    pub name: String,
    /// Plugin-specific options, passed through uninterpreted.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub options: serde_json::Value,
}

impl PluginRegistration {
    /// Create a registration with no options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: serde_json::Value::Null,
        }
    }
}

/// A plugin of the same name is already registered.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Plugin \"{name}\" is already registered")]
pub struct DuplicatePluginError {
    /// Name of the plugin that was registered twice.
    pub name: String,
}
