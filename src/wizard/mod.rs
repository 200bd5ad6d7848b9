//! Multi-step wizard engine
//!
//! A reusable engine for linear, validated, multi-step input flows. An
//! ordered registry of steps accumulates an uncommitted draft; the
//! controller validates on advance, supports history-based back-navigation,
//! and finalizes by committing the whole draft atomically through a
//! persistence gateway.

pub mod controller;
pub mod draft;
pub mod registry;
pub mod retry;
pub mod step;

pub use controller::{Advance, WizardController, WizardState};
pub use draft::{Draft, DraftStore};
pub use registry::StepRegistry;
pub use retry::RetryPolicy;
pub use step::{ValidationOutcome, WizardStep};
