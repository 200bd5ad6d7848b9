//! CLI command handlers
//!
//! Bridges clap argument parsing with the flow and storage layers.

pub mod plan;

pub use plan::{handle_plan_command, PlanCommands};
