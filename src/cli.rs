//! Command-line interface definition for Astro Tutor
//!
//! This module defines the CLI structure using clap's derive API. The CLI
//! is a local harness around the lookup tools and the agent record; it does
//! not talk to a model.

use clap::{Parser, Subcommand, ValueEnum};

/// Astro Tutor - Solar-System lookup tools for a beginner astronomy agent
#[derive(Parser, Debug, Clone)]
#[command(name = "astro-tutor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Override the model identifier from config
    #[arg(short, long)]
    pub model: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Astro Tutor
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up a fun fact about a planet
    Fact {
        /// Planet name (case-insensitive)
        planet: String,

        /// Print the tool result mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the length of a planet's year in Earth days
    Year {
        /// Planet name (case-insensitive)
        planet: String,

        /// Print the tool result mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Invoke a registered tool by name, the way a host runtime would
    Call {
        /// Tool name (planet_fact, days_in_year)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Print the agent manifest handed to the host runtime
    Manifest {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ManifestFormat::Json)]
        format: ManifestFormat,
    },

    /// List the planet tables
    Planets,
}

/// Output format for the agent manifest
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: "config/config.yaml".to_string(),
            verbose: false,
            json_logs: false,
            model: None,
            command: Commands::Planets,
        }
    }
}
