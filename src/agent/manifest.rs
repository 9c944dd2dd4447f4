//! Serializable agent manifest
//!
//! The manifest is the form in which the agent record is handed to a host
//! runtime: identity fields plus one function definition per tool.

use crate::error::{AstroError, Result};
use serde::{Deserialize, Serialize};

/// Agent record rendered for a host runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    /// Agent name identifier
    pub name: String,
    /// Model identifier
    pub model: String,
    /// Free-text description
    pub description: String,
    /// Instruction prompt
    pub instruction: String,
    /// Tool function definitions in order
    pub tools: Vec<serde_json::Value>,
}

impl AgentManifest {
    /// Render as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `AstroError::Serialization` if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(AstroError::Serialization)?)
    }

    /// Render as YAML
    ///
    /// # Errors
    ///
    /// Returns `AstroError::Yaml` if serialization fails
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).map_err(AstroError::Yaml)?)
    }
}
