//! Instruction prompt for the astronomy tutor
//!
//! The instruction is handed to the host runtime as part of the agent
//! record. It tells the model when to call each lookup tool.

/// Default instruction for the tutor agent
pub const TUTOR_INSTRUCTION: &str = "You are a friendly astronomy tutor. \
When the user asks about a planet, decide whether to call:\n  \
• planet_fact for a general fun fact\n  \
• days_in_year if they ask about orbital period or length of the year\n\
If no tool is appropriate, answer directly.";

/// Default description of the tutor agent
pub const TUTOR_DESCRIPTION: &str = "An agent that teaches basic Solar‑System facts.";

/// Returns the tool names the instruction refers to that are missing from
/// `registered`
///
/// Used during config validation so that a custom tool list does not leave
/// the default instruction pointing at tools the agent cannot call.
///
/// # Examples
///
/// ```
/// use astro_tutor::prompts::{unreferenced_tools, TUTOR_INSTRUCTION};
///
/// let missing = unreferenced_tools(TUTOR_INSTRUCTION, &["planet_fact"]);
/// assert_eq!(missing, vec!["days_in_year"]);
/// ```
pub fn unreferenced_tools(instruction: &str, registered: &[&str]) -> Vec<&'static str> {
    crate::tools::KNOWN_TOOLS
        .iter()
        .copied()
        .filter(|tool| instruction.contains(tool) && !registered.contains(tool))
        .collect()
}
