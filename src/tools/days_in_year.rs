//! days_in_year tool
//!
//! Reports the orbital period of a planet in Earth days.

use crate::error::Result;
use crate::tools::planets::{title_case, Planet};
use crate::tools::{LookupResult, PlanetArgs, ToolExecutor};
use serde_json::json;

/// Registered name of the orbital period tool
pub const DAYS_IN_YEAR_TOOL: &str = "days_in_year";

/// Look up the length of a planet's year in Earth days
///
/// On success the report names the planet in canonical capitalization and
/// renders the period with thousands separators. A zero period counts as
/// not found.
///
/// # Examples
///
/// ```
/// use astro_tutor::tools::days_in_year;
///
/// let result = days_in_year("Neptune");
/// assert_eq!(result.text(), "One Neptune year ≈ 60,190 Earth days.");
/// ```
pub fn days_in_year(planet: &str) -> LookupResult {
    let period = Planet::from_name(planet)
        .map(Planet::orbital_period)
        .filter(|period| !period.is_zero());

    match period {
        Some(days) => LookupResult::report(format!(
            "One {} year ≈ {} Earth days.",
            title_case(planet),
            days
        )),
        None => LookupResult::error(format!("Unknown planet '{}'.", planet)),
    }
}

/// Tool wrapper around [`days_in_year`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DaysInYearTool;

impl DaysInYearTool {
    /// Creates a new DaysInYearTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ToolExecutor for DaysInYearTool {
    fn tool_definition(&self) -> serde_json::Value {
        json!({
            "name": DAYS_IN_YEAR_TOOL,
            "description": "Return the orbital period (planetary year) in Earth days.",
            "parameters": {
                "type": "object",
                "properties": {
                    "planet": {
                        "type": "string",
                        "description": "Name of the planet, e.g. \"Saturn\" (case-insensitive)"
                    }
                },
                "required": ["planet"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<LookupResult> {
        let params = PlanetArgs::parse(DAYS_IN_YEAR_TOOL, args)?;
        let result = days_in_year(&params.planet);
        tracing::debug!(
            planet = %params.planet,
            status = result.status(),
            "days_in_year lookup"
        );
        Ok(result)
    }
}
