//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (errors when unset) and `${VAR:-default}` (falls back
//! to the default when unset).

use crate::ConfigError;

/// Expand environment variable references in a configuration string.
///
/// `field` names the config field being expanded and is included in the
/// error so the author knows where the bad reference lives.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let context = |var: &str| -> Result<Option<String>, std::env::VarError> {
        if let Some((name, default)) = var.split_once(":-") {
            match std::env::var(name) {
                Ok(v) => Ok(Some(v)),
                Err(std::env::VarError::NotPresent) => Ok(Some(default.to_owned())),
                Err(e) => Err(e),
            }
        } else {
            std::env::var(var).map(Some)
        }
    };

    shellexpand::env_with_context(value, context)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| {
            let message = match &e.cause {
                std::env::VarError::NotPresent => format!("${{{}}} not set", e.var_name),
                other => format!("${{{}}}: {other}", e.var_name),
            };
            ConfigError::EnvVar {
                field: field.to_owned(),
                message,
            }
        })
}

/// Expand environment variable references in every string leaf of an opaque
/// options value.
pub(crate) fn expand_json_strings(
    value: &mut serde_json::Value,
    field: &str,
) -> Result<(), ConfigError> {
    match value {
        serde_json::Value::String(s) => {
            *s = expand_env(s, field)?;
        }
        serde_json::Value::Array(items) => {
            for item in items {
                expand_json_strings(item, field)?;
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values_mut() {
                expand_json_strings(item, field)?;
            }
        }
        _ => {}
    }
    Ok(())
}
