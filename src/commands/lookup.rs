//! Lookup and tool-call commands
//!
//! `fact` and `year` run a single planet lookup through the agent's tools.
//! `call` dispatches an arbitrary tool call with raw JSON arguments, the
//! way a host runtime would after choosing a tool.

use crate::agent::Agent;
use crate::error::{AstroError, Result};
use crate::tools::{LookupResult, Planet};
use colored::Colorize;
use serde_json::json;

/// Maximum edit distance for a "did you mean" suggestion
const SUGGESTION_DISTANCE: usize = 2;

/// Run a planet lookup and print the outcome
///
/// # Arguments
///
/// * `agent` - Agent whose tools serve the lookup
/// * `tool` - Tool name (`planet_fact` or `days_in_year`)
/// * `planet` - Planet name as typed by the user
/// * `json` - Print the wire mapping instead of plain text
///
/// # Returns
///
/// Returns Ok(true) if the lookup succeeded, Ok(false) if the planet was
/// not recognized
///
/// # Errors
///
/// Returns error if the agent does not carry `tool`
pub async fn run_lookup(agent: &Agent, tool: &str, planet: &str, json: bool) -> Result<bool> {
    let result = agent.call_tool(tool, json!({ "planet": planet })).await?;
    let rendered = render_lookup(&result, json)?;

    if result.is_success() || json {
        println!("{}", rendered);
    } else {
        eprintln!("{}", rendered.red());
    }

    if !result.is_success() {
        if let Some(suggestion) = suggest_planet(planet) {
            eprintln!("Did you mean {}?", suggestion.name().cyan());
        }
    }

    Ok(result.is_success())
}

/// Dispatch a tool call with raw JSON arguments and print the wire mapping
///
/// # Errors
///
/// Returns `AstroError::Tool` if `args` is not valid JSON, and any error
/// from the dispatch itself
pub async fn run_call(agent: &Agent, tool: &str, args: &str) -> Result<bool> {
    let args: serde_json::Value = serde_json::from_str(args)
        .map_err(|e| AstroError::Tool(format!("arguments are not valid JSON: {}", e)))?;
    tracing::info!(tool, "Calling tool");

    let result = agent.call_tool(tool, args).await?;
    println!("{}", render_lookup(&result, true)?);
    Ok(result.is_success())
}

/// Render a lookup result as plain text or pretty JSON
///
/// # Errors
///
/// Returns `AstroError::Serialization` if JSON rendering fails
pub fn render_lookup(result: &LookupResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result).map_err(AstroError::Serialization)?)
    } else {
        Ok(result.text().to_string())
    }
}

/// Suggest the closest planet name for a misspelled input
///
/// Returns None if the input already names a planet or nothing is close.
pub fn suggest_planet(input: &str) -> Option<Planet> {
    if Planet::from_name(input).is_some() {
        return None;
    }
    let needle = input.trim().to_lowercase();
    Planet::ALL
        .iter()
        .copied()
        .map(|planet| {
            let distance = strsim::levenshtein(&needle, &planet.name().to_lowercase());
            (planet, distance)
        })
        .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(planet, _)| planet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lookup_plain_text() {
        let result = LookupResult::fact("Mars hosts the tallest known volcano, Olympus Mons.");
        assert_eq!(
            render_lookup(&result, false).unwrap(),
            "Mars hosts the tallest known volcano, Olympus Mons."
        );
    }

    #[test]
    fn test_render_lookup_json() {
        let result = LookupResult::error("Unknown planet 'Pluto'.");
        let rendered = render_lookup(&result, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error_message"], "Unknown planet 'Pluto'.");
    }

    #[test]
    fn test_suggest_planet_for_typo() {
        assert_eq!(suggest_planet("Jupter"), Some(Planet::Jupiter));
        assert_eq!(suggest_planet("nepture"), Some(Planet::Neptune));
        assert_eq!(suggest_planet(" mars "), Some(Planet::Mars));
    }

    #[test]
    fn test_suggest_planet_none_when_far() {
        assert_eq!(suggest_planet("Andromeda"), None);
    }

    #[test]
    fn test_suggest_planet_none_for_exact_match() {
        assert_eq!(suggest_planet("saturn"), None);
    }

    #[tokio::test]
    async fn test_run_lookup_reports_status() {
        let agent = crate::agent::root_agent().unwrap();
        assert!(run_lookup(&agent, "planet_fact", "earth", false)
            .await
            .unwrap());
        assert!(!run_lookup(&agent, "days_in_year", "Pluto", false)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_run_call_rejects_invalid_json() {
        let agent = crate::agent::root_agent().unwrap();
        let err = run_call(&agent, "planet_fact", "{not json").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AstroError>(),
            Some(AstroError::Tool(_))
        ));
    }
}
