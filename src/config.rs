//! Configuration management for Astro Tutor
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{AstroError, Result};
use crate::prompts::{unreferenced_tools, TUTOR_DESCRIPTION, TUTOR_INSTRUCTION};
use crate::tools::KNOWN_TOOLS;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Main configuration structure for Astro Tutor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Agent record settings
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Agent record configuration
///
/// Every field has a default, so an empty file yields the stock
/// astronomy tutor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    /// Agent name identifier
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Model identifier handed to the host runtime
    #[serde(default = "default_model")]
    pub model: String,

    /// Free-text description of the agent
    #[serde(default = "default_description")]
    pub description: String,

    /// Instruction prompt for the model
    #[serde(default = "default_instruction")]
    pub instruction: String,

    /// Tool names in the order they are offered to the model
    #[serde(default = "default_tools")]
    pub tools: Vec<String>,
}

fn default_agent_name() -> String {
    "mini_astro_tutor".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_description() -> String {
    TUTOR_DESCRIPTION.to_string()
}

fn default_instruction() -> String {
    TUTOR_INSTRUCTION.to_string()
}

fn default_tools() -> Vec<String> {
    KNOWN_TOOLS.iter().map(|tool| tool.to_string()).collect()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            model: default_model(),
            description: default_description(),
            instruction: default_instruction(),
            tools: default_tools(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AstroError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML document
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AstroError::Config` if the YAML is malformed
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|e| AstroError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(name) = std::env::var("ASTRO_TUTOR_AGENT_NAME") {
            tracing::debug!(name = %name, "Env override: ASTRO_TUTOR_AGENT_NAME");
            self.agent.name = name;
        }

        if let Ok(model) = std::env::var("ASTRO_TUTOR_MODEL") {
            tracing::debug!(model = %model, "Env override: ASTRO_TUTOR_MODEL");
            self.agent.model = model;
        }

        if let Ok(tools) = std::env::var("ASTRO_TUTOR_TOOLS") {
            let tools_vec: Vec<String> = tools
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if tools_vec.is_empty() {
                tracing::warn!("Ignoring empty ASTRO_TUTOR_TOOLS");
            } else {
                tracing::debug!(?tools_vec, "Env override: ASTRO_TUTOR_TOOLS");
                self.agent.tools = tools_vec;
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(model) = &cli.model {
            tracing::debug!(model = %model, "CLI override: --model");
            self.agent.model = model.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `AstroError::Config` if any validation check fails
    pub fn validate(&self) -> Result<()> {
        let agent = &self.agent;

        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .map_err(|e| AstroError::Config(format!("Invalid name pattern: {}", e)))?;
        if !identifier.is_match(&agent.name) {
            return Err(AstroError::Config(format!(
                "agent.name must be a valid identifier (letters, digits, underscores): '{}'",
                agent.name
            ))
            .into());
        }

        if agent.model.trim().is_empty() {
            return Err(AstroError::Config("agent.model cannot be empty".to_string()).into());
        }

        if agent.instruction.trim().is_empty() {
            return Err(
                AstroError::Config("agent.instruction cannot be empty".to_string()).into(),
            );
        }

        if agent.tools.is_empty() {
            return Err(
                AstroError::Config("agent.tools must list at least one tool".to_string()).into(),
            );
        }

        let mut seen = HashSet::new();
        for tool in &agent.tools {
            if !KNOWN_TOOLS.contains(&tool.as_str()) {
                return Err(AstroError::Config(format!(
                    "Invalid tool: {}. Must be one of: {}",
                    tool,
                    KNOWN_TOOLS.join(", ")
                ))
                .into());
            }
            if !seen.insert(tool.as_str()) {
                return Err(AstroError::Config(format!("Duplicate tool: {}", tool)).into());
            }
        }

        let registered: Vec<&str> = agent.tools.iter().map(String::as_str).collect();
        let missing = unreferenced_tools(&agent.instruction, &registered);
        if !missing.is_empty() {
            tracing::warn!(
                ?missing,
                "Instruction refers to tools that are not registered"
            );
        }

        Ok(())
    }
}
