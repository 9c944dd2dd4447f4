//! Manifest command
//!
//! Prints the agent record in the form a host runtime loads it.

use crate::agent::Agent;
use crate::cli::ManifestFormat;
use crate::error::Result;

/// Print the agent manifest
///
/// # Errors
///
/// Returns error if serialization fails
pub fn show_manifest(agent: &Agent, format: ManifestFormat) -> Result<()> {
    println!("{}", render_manifest(agent, format)?);
    Ok(())
}

/// Render the agent manifest in the requested format
///
/// # Errors
///
/// Returns error if serialization fails
pub fn render_manifest(agent: &Agent, format: ManifestFormat) -> Result<String> {
    let manifest = agent.manifest();
    tracing::debug!(?format, tools = manifest.tools.len(), "Rendering manifest");
    match format {
        ManifestFormat::Json => manifest.to_json_pretty(),
        ManifestFormat::Yaml => manifest.to_yaml(),
    }
}
