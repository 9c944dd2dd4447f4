/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint:

- `lookup`   — `fact`, `year` and `call`
- `manifest` — Print the agent record for a host runtime
- `planets`  — Print the planet tables

Handlers stay small and use the library components: the agent record and
its tools.
*/

pub mod lookup;
pub mod manifest;
pub mod planets;
