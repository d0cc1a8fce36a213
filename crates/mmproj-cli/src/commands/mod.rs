//! CLI command handlers
//!
//! Each subcommand has its own module. Handlers return `Ok(true)` on success
//! and `Ok(false)` when the action was cancelled and already reported.

pub mod plan;
pub mod save;
