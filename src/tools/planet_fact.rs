//! planet_fact tool
//!
//! Returns a fun fact about one of the eight Solar-System planets.

use crate::error::Result;
use crate::tools::planets::Planet;
use crate::tools::{LookupResult, PlanetArgs, ToolExecutor};
use serde_json::json;

/// Registered name of the fact tool
pub const PLANET_FACT_TOOL: &str = "planet_fact";

/// Look up a fun fact about a planet
///
/// Matching is case-insensitive through title-casing. An unknown name is
/// reported as [`LookupResult::Error`] quoting the input exactly as given.
///
/// # Examples
///
/// ```
/// use astro_tutor::tools::planet_fact;
///
/// let result = planet_fact("mars");
/// assert_eq!(result.text(), "Mars hosts the tallest known volcano, Olympus Mons.");
///
/// let missing = planet_fact("Pluto");
/// assert!(!missing.is_success());
/// ```
pub fn planet_fact(planet: &str) -> LookupResult {
    match Planet::from_name(planet) {
        Some(found) => LookupResult::fact(found.fact()),
        None => LookupResult::error(format!("Sorry, I don’t have a fact for '{}'.", planet)),
    }
}

/// Tool wrapper around [`planet_fact`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetFactTool;

impl PlanetFactTool {
    /// Creates a new PlanetFactTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ToolExecutor for PlanetFactTool {
    fn tool_definition(&self) -> serde_json::Value {
        json!({
            "name": PLANET_FACT_TOOL,
            "description": "Return a fun fact about a Solar-System planet.",
            "parameters": {
                "type": "object",
                "properties": {
                    "planet": {
                        "type": "string",
                        "description": "Name of the planet, e.g. \"Mars\" (case-insensitive)"
                    }
                },
                "required": ["planet"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<LookupResult> {
        let params = PlanetArgs::parse(PLANET_FACT_TOOL, args)?;
        let result = planet_fact(&params.planet);
        tracing::debug!(
            planet = %params.planet,
            status = result.status(),
            "planet_fact lookup"
        );
        Ok(result)
    }
}
