//! First-run budget setup
//!
//! The concrete wizard flow: income, spending, and review steps driven by
//! the wizard engine, committing a budget plan on finalize.

pub mod flow;
pub mod steps;

pub use flow::{SetupFlow, SetupOutcome};
