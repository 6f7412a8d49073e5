//! Batch validation for site composition.
//!
//! Violations are collected across the whole composition pass and surfaced
//! together, so an author sees every problem in one build instead of fixing
//! them one at a time.

use std::fmt;

/// A single structural problem found while composing a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Field path in the declarative input (e.g. `nav[2].link`).
    pub field: String,
    /// What is wrong with the value.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Composition error.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// One or more structural invariants are violated. Carries the complete
    /// list of violations; no partial configuration is produced.
    #[error("Invalid site configuration: {}", format_violations(.0))]
    Validation(Vec<Violation>),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects violations across a composition pass.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Require a string field to be non-empty.
    pub(crate) fn require_non_empty(&mut self, value: &str, field: &str) {
        if value.is_empty() {
            self.push(field, "cannot be empty");
        }
    }

    /// Require a link to be an absolute `http(s)` URL or a site-relative
    /// path beginning with `/`.
    pub(crate) fn require_link(&mut self, value: &str, field: &str) {
        if !is_absolute_url(value) && !value.starts_with('/') {
            self.push(
                field,
                "must be an absolute http:// or https:// URL or a path starting with /",
            );
        }
    }

    /// Require an absolute `http(s)` URL.
    pub(crate) fn require_url(&mut self, value: &str, field: &str) {
        if !is_absolute_url(value) {
            self.push(field, "must start with http:// or https://");
        }
    }

    /// Consume the collector, failing if any violation was recorded.
    pub(crate) fn finish(self) -> Result<(), ComposeError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ComposeError::Validation(self.violations))
        }
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
