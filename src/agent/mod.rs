//! Agent module for Astro Tutor
//!
//! This module contains the declarative agent record and its serializable
//! manifest.

pub mod core;
pub mod manifest;

pub use core::{root_agent, Agent};
pub use manifest::AgentManifest;
