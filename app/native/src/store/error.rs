//! Persistence failures recorded in the root state.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::Domain;

/// A persistence operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Writing a snapshot.
    Save,
    /// Reading a snapshot.
    Load,
    /// Writing a config script.
    Export,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Load => "load",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A failed save, load or export for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[error("failed to {operation} {domain} settings: {message}")]
pub struct OperationError {
    pub operation: Operation,
    pub domain: Domain,
    /// Description of the underlying cause.
    pub message: String,
}

impl OperationError {
    #[must_use]
    pub fn new(operation: Operation, domain: Domain, message: impl Into<String>) -> Self {
        Self { operation, domain, message: message.into() }
    }

    #[must_use]
    pub fn save(domain: Domain, cause: impl fmt::Display) -> Self {
        Self::new(Operation::Save, domain, cause.to_string())
    }

    #[must_use]
    pub fn load(domain: Domain, cause: impl fmt::Display) -> Self {
        Self::new(Operation::Load, domain, cause.to_string())
    }

    #[must_use]
    pub fn export(domain: Domain, cause: impl fmt::Display) -> Self {
        Self::new(Operation::Export, domain, cause.to_string())
    }
}
