//! Config-driven tool registry builder
//!
//! Turns the ordered list of tool names from the agent configuration into a
//! [`ToolRegistry`], keeping the configured order.

use std::sync::Arc;

use crate::error::{AstroError, Result};
use crate::tools::{
    DaysInYearTool, PlanetFactTool, ToolExecutor, ToolRegistry, DAYS_IN_YEAR_TOOL, KNOWN_TOOLS,
    PLANET_FACT_TOOL,
};

/// Builder for agent tool registries
///
/// # Examples
///
/// ```
/// use astro_tutor::tools::ToolRegistryBuilder;
///
/// let registry = ToolRegistryBuilder::new()
///     .with_tools(["days_in_year", "planet_fact"])
///     .build()
///     .expect("known tools");
///
/// assert_eq!(registry.names(), vec!["days_in_year", "planet_fact"]);
/// ```
#[derive(Debug, Clone)]
pub struct ToolRegistryBuilder {
    /// Tool names in the order they should be registered
    tools: Vec<String>,
}

impl ToolRegistryBuilder {
    /// Create a builder that registers every known tool in default order
    pub fn new() -> Self {
        Self {
            tools: KNOWN_TOOLS.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Replace the tool selection
    ///
    /// # Arguments
    ///
    /// * `tools` - Tool names in registration order
    ///
    /// # Returns
    ///
    /// Returns self for method chaining
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Build the registry
    ///
    /// # Errors
    ///
    /// Returns `AstroError::Config` if a tool name is not one of
    /// [`KNOWN_TOOLS`]
    pub fn build(&self) -> Result<ToolRegistry> {
        let mut registry = ToolRegistry::new();
        for name in &self.tools {
            let executor = executor_for(name)?;
            registry.register(name.clone(), executor);
        }
        tracing::debug!(tools = ?registry.names(), "Built tool registry");
        Ok(registry)
    }
}

impl Default for ToolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn executor_for(name: &str) -> Result<Arc<dyn ToolExecutor>> {
    match name {
        PLANET_FACT_TOOL => Ok(Arc::new(PlanetFactTool::new())),
        DAYS_IN_YEAR_TOOL => Ok(Arc::new(DaysInYearTool::new())),
        other => Err(AstroError::Config(format!(
            "Unknown tool: {}. Must be one of: {}",
            other,
            KNOWN_TOOLS.join(", ")
        ))
        .into()),
    }
}
