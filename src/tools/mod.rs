//! Tools module for Astro Tutor
//!
//! This module contains the lookup result type, the tool executor trait,
//! the tool registry, and the two planet lookup tools.

pub mod days_in_year;
pub mod planet_fact;
pub mod planets;
pub mod registry_builder;

pub use days_in_year::{days_in_year, DaysInYearTool, DAYS_IN_YEAR_TOOL};
pub use planet_fact::{planet_fact, PlanetFactTool, PLANET_FACT_TOOL};
pub use planets::{OrbitalPeriod, Planet};
pub use registry_builder::ToolRegistryBuilder;

use crate::error::{AstroError, Result};
use async_trait::async_trait;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Names of every tool this crate can register, in default order
pub const KNOWN_TOOLS: [&str; 2] = [PLANET_FACT_TOOL, DAYS_IN_YEAR_TOOL];

/// Arguments accepted by both planet tools
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlanetArgs {
    /// Planet name as typed by the user
    pub planet: String,
}

impl PlanetArgs {
    /// Parse tool arguments, mapping malformed input to a tool error
    pub(crate) fn parse(tool: &str, args: serde_json::Value) -> Result<Self> {
        serde_json::from_value(args).map_err(|e| {
            AstroError::Tool(format!("invalid arguments for {}: {}", tool, e)).into()
        })
    }
}

/// Success payload of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A fun fact, serialized under the `fact` key
    Fact(String),
    /// A formatted report, serialized under the `report` key
    Report(String),
}

impl Payload {
    /// Key the payload is serialized under
    pub fn key(&self) -> &'static str {
        match self {
            Payload::Fact(_) => "fact",
            Payload::Report(_) => "report",
        }
    }

    /// Payload text
    pub fn text(&self) -> &str {
        match self {
            Payload::Fact(text) | Payload::Report(text) => text,
        }
    }
}

/// Outcome of a planet lookup
///
/// Serializes to the mapping host runtimes expect:
///
/// ```json
/// {"status": "success", "fact": "..."}
/// {"status": "success", "report": "..."}
/// {"status": "error", "error_message": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The planet was found
    Success(Payload),
    /// The planet was not recognized
    Error {
        /// Human-readable message naming the rejected input
        error_message: String,
    },
}

impl LookupResult {
    /// Successful fact lookup
    pub fn fact(fact: impl Into<String>) -> Self {
        LookupResult::Success(Payload::Fact(fact.into()))
    }

    /// Successful report lookup
    pub fn report(report: impl Into<String>) -> Self {
        LookupResult::Success(Payload::Report(report.into()))
    }

    /// Failed lookup
    pub fn error(message: impl Into<String>) -> Self {
        LookupResult::Error {
            error_message: message.into(),
        }
    }

    /// Returns true for the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Success(_))
    }

    /// Wire value of the `status` key
    pub fn status(&self) -> &'static str {
        match self {
            LookupResult::Success(_) => "success",
            LookupResult::Error { .. } => "error",
        }
    }

    /// Payload text on success, error message on failure
    pub fn text(&self) -> &str {
        match self {
            LookupResult::Success(payload) => payload.text(),
            LookupResult::Error { error_message } => error_message,
        }
    }

    /// Render the wire mapping as a JSON value
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self).map_err(AstroError::Serialization)?)
    }
}

impl Serialize for LookupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("status", self.status())?;
        match self {
            LookupResult::Success(payload) => map.serialize_entry(payload.key(), payload.text())?,
            LookupResult::Error { error_message } => {
                map.serialize_entry("error_message", error_message)?
            }
        }
        map.end()
    }
}

/// Tool executor trait for implementing tool execution logic
///
/// Each tool exposes a function-calling definition and an `execute` entry
/// point that host runtimes call with JSON arguments.
///
/// # Examples
///
/// ```no_run
/// use astro_tutor::tools::{LookupResult, ToolExecutor};
/// use astro_tutor::error::Result;
/// use async_trait::async_trait;
/// use serde_json::Value;
///
/// struct MoonTool;
///
/// #[async_trait]
/// impl ToolExecutor for MoonTool {
///     fn tool_definition(&self) -> Value {
///         serde_json::json!({
///             "name": "moon_fact",
///             "description": "Returns a fact about the Moon",
///             "parameters": {"type": "object", "properties": {}}
///         })
///     }
///
///     async fn execute(&self, _args: Value) -> Result<LookupResult> {
///         Ok(LookupResult::fact("The Moon is slowly drifting away from Earth."))
///     }
/// }
/// ```
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Returns the tool definition as a JSON value
    ///
    /// The definition follows the function calling format:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "Tool description",
    ///   "parameters": {
    ///     "type": "object",
    ///     "properties": {
    ///       "planet": {"type": "string", "description": "..."}
    ///     },
    ///     "required": ["planet"]
    ///   }
    /// }
    /// ```
    fn tool_definition(&self) -> serde_json::Value;

    /// Executes the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns error if the arguments are malformed. A well-formed call for
    /// an unknown planet succeeds with [`LookupResult::Error`].
    async fn execute(&self, args: serde_json::Value) -> Result<LookupResult>;
}

/// Ordered registry of tools available to the agent
///
/// Registration order is preserved because the agent record lists its
/// tools in a fixed order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn ToolExecutor>)>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool executor
    ///
    /// Registering an existing name replaces the executor and keeps its
    /// original position.
    pub fn register(&mut self, name: impl Into<String>, executor: Arc<dyn ToolExecutor>) {
        let name = name.into();
        match self.tools.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = executor,
            None => self.tools.push((name, executor)),
        }
    }

    /// Get a tool executor by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.tools
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, executor)| Arc::clone(executor))
    }

    /// Registered tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// All tool definitions in registration order
    pub fn all_definitions(&self) -> Vec<serde_json::Value> {
        self.tools
            .iter()
            .map(|(_, executor)| executor.tool_definition())
            .collect()
    }

    /// Execute a registered tool by name
    ///
    /// # Errors
    ///
    /// Returns `AstroError::UnknownTool` if no tool is registered under
    /// `name`, or the executor's error for malformed arguments.
    pub async fn execute(&self, name: &str, args: serde_json::Value) -> Result<LookupResult> {
        let executor = self
            .get(name)
            .ok_or_else(|| AstroError::UnknownTool(name.to_string()))?;
        tracing::debug!(tool = name, "Dispatching tool call");
        executor.execute(args).await
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
