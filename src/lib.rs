//! Astro Tutor - lookup tools and agent record for a beginner astronomy tutor
//!
//! This library provides two planet lookup tools (fun facts and orbital
//! periods) and the declarative agent record a host agent runtime loads to
//! offer them to a language model. The host runtime owns language
//! understanding, tool selection and response rendering.
//!
//! # Architecture
//!
//! - `tools`: planet tables, lookup functions, tool executors and registry
//! - `agent`: the agent record and its serializable manifest
//! - `prompts`: the tutor instruction text
//! - `config`: configuration loading and validation
//! - `error`: error types and result aliases
//! - `cli` / `commands`: the local command-line harness
//!
//! # Example
//!
//! ```
//! use astro_tutor::tools::{days_in_year, planet_fact};
//!
//! assert_eq!(
//!     planet_fact("mars").text(),
//!     "Mars hosts the tallest known volcano, Olympus Mons."
//! );
//! assert_eq!(
//!     days_in_year("Earth").text(),
//!     "One Earth year ≈ 365.25 Earth days."
//! );
//! ```

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompts;
pub mod tools;

// Re-export commonly used types
pub use agent::{root_agent, Agent, AgentManifest};
pub use config::Config;
pub use error::{AstroError, Result};
pub use tools::{days_in_year, planet_fact, LookupResult, Planet};
