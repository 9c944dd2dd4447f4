//! Agent record
//!
//! The agent record is static data: identity, model, instruction and the
//! ordered tools the host runtime may call. It performs no dispatch policy
//! of its own; `call_tool` simply forwards a host-selected call to the
//! named tool.

use crate::agent::AgentManifest;
use crate::config::{AgentConfig, Config};
use crate::error::Result;
use crate::tools::{LookupResult, ToolRegistry, ToolRegistryBuilder};
use std::sync::Arc;
use tracing::{debug, info};

/// Declarative agent record handed to the host runtime
///
/// Build it once at startup and share it by reference (or wrap it in an
/// [`Arc`] with [`Agent::into_shared`]); it is immutable after construction.
///
/// # Examples
///
/// ```
/// use astro_tutor::agent::root_agent;
///
/// let agent = root_agent().expect("default agent is valid");
/// assert_eq!(agent.name(), "mini_astro_tutor");
/// assert_eq!(agent.tool_names(), vec!["planet_fact", "days_in_year"]);
/// ```
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    model: String,
    description: String,
    instruction: String,
    tools: ToolRegistry,
}

impl Agent {
    /// Creates an agent record from its parts
    ///
    /// # Arguments
    ///
    /// * `config` - Identity, model and instruction settings
    /// * `tools` - Tools in the order they are offered to the model
    pub fn new(config: &AgentConfig, tools: ToolRegistry) -> Self {
        Self {
            name: config.name.clone(),
            model: config.model.clone(),
            description: config.description.clone(),
            instruction: config.instruction.clone(),
            tools,
        }
    }

    /// Validates the configuration and builds the agent with its tools
    ///
    /// # Errors
    ///
    /// Returns `AstroError::Config` if validation fails or a configured tool
    /// is unknown
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let tools = ToolRegistryBuilder::new()
            .with_tools(config.agent.tools.iter().cloned())
            .build()?;
        let agent = Self::new(&config.agent, tools);
        info!(
            agent = %agent.name,
            model = %agent.model,
            tools = ?agent.tool_names(),
            "Agent record ready"
        );
        Ok(agent)
    }

    /// Agent name identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Instruction prompt
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Tool names in order
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.names()
    }

    /// Serializable view of the record for the host runtime
    pub fn manifest(&self) -> AgentManifest {
        AgentManifest {
            name: self.name.clone(),
            model: self.model.clone(),
            description: self.description.clone(),
            instruction: self.instruction.clone(),
            tools: self.tools.all_definitions(),
        }
    }

    /// Forwards a host-selected tool call to the named tool
    ///
    /// # Errors
    ///
    /// Returns `AstroError::UnknownTool` for tools the agent does not carry,
    /// or a tool error for malformed arguments
    pub async fn call_tool(&self, tool: &str, args: serde_json::Value) -> Result<LookupResult> {
        debug!(agent = %self.name, tool, "Tool call");
        self.tools.execute(tool, args).await
    }

    /// Wraps the record for sharing across tasks
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Builds the default astronomy tutor agent
///
/// # Errors
///
/// Returns error if the default configuration fails validation
pub fn root_agent() -> Result<Agent> {
    Agent::from_config(&Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AstroError;
    use crate::prompts::TUTOR_INSTRUCTION;
    use serde_json::json;

    #[test]
    fn test_root_agent_record() {
        let agent = root_agent().unwrap();
        assert_eq!(agent.name(), "mini_astro_tutor");
        assert_eq!(agent.model(), "gemini-2.0-flash");
        assert_eq!(
            agent.description(),
            "An agent that teaches basic Solar‑System facts."
        );
        assert_eq!(agent.instruction(), TUTOR_INSTRUCTION);
        assert_eq!(agent.tool_names(), vec!["planet_fact", "days_in_year"]);
        assert_eq!(agent.manifest().tools.len(), 2);
    }

    #[test]
    fn test_from_config_respects_tool_order() {
        let mut config = Config::default();
        config.agent.tools = vec!["days_in_year".to_string(), "planet_fact".to_string()];
        let agent = Agent::from_config(&config).unwrap();
        assert_eq!(agent.tool_names(), vec!["days_in_year", "planet_fact"]);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let mut config = Config::default();
        config.agent.model = String::new();
        let err = Agent::from_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AstroError>(),
            Some(AstroError::Config(_))
        ));
    }

    #[test]
    fn test_manifest_lists_tool_definitions() {
        let manifest = root_agent().unwrap().manifest();
        assert_eq!(manifest.name, "mini_astro_tutor");
        assert_eq!(manifest.tools.len(), 2);
        assert_eq!(manifest.tools[0]["name"], "planet_fact");
        assert_eq!(manifest.tools[1]["name"], "days_in_year");
    }

    #[tokio::test]
    async fn test_call_tool_dispatches_by_name() {
        let agent = root_agent().unwrap();
        let result = agent
            .call_tool("days_in_year", json!({"planet": "mars"}))
            .await
            .unwrap();
        assert_eq!(result.text(), "One Mars year ≈ 687 Earth days.");
    }

    #[tokio::test]
    async fn test_call_tool_not_carried_by_agent() {
        let mut config = Config::default();
        config.agent.tools = vec!["planet_fact".to_string()];
        let agent = Agent::from_config(&config).unwrap();
        let err = agent
            .call_tool("days_in_year", json!({"planet": "mars"}))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AstroError>(),
            Some(AstroError::UnknownTool(_))
        ));
    }

    #[tokio::test]
    async fn test_shared_agent_serves_concurrent_calls() {
        let agent = root_agent().unwrap().into_shared();
        let mut handles = Vec::new();
        for planet in ["mercury", "venus", "earth", "mars"] {
            let agent = Arc::clone(&agent);
            handles.push(tokio::spawn(async move {
                agent
                    .call_tool("planet_fact", json!({ "planet": planet }))
                    .await
                    .map(|result| result.is_success())
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().unwrap());
        }
    }
}
