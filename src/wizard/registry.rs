//! Ordered step registry
//!
//! Holds the step definitions for a wizard in registration order. Step
//! identifiers must be unique; indices are dense and ordering-significant.

use crate::error::{OutsetError, OutsetResult};

use super::step::WizardStep;

/// Ordered collection of registered wizard steps
#[derive(Debug, Default)]
pub struct StepRegistry {
    steps: Vec<WizardStep>,
}

impl StepRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a step at the end of the order
    ///
    /// Fails with `DuplicateStep` if a step with the same identifier is
    /// already present.
    pub fn register(&mut self, step: WizardStep) -> OutsetResult<()> {
        if self.steps.iter().any(|s| s.id() == step.id()) {
            return Err(OutsetError::DuplicateStep {
                id: step.id().to_string(),
            });
        }
        self.steps.push(step);
        Ok(())
    }

    /// Look up a step by index
    pub fn step_at(&self, index: usize) -> OutsetResult<&WizardStep> {
        self.steps.get(index).ok_or(OutsetError::StepOutOfRange {
            index,
            count: self.steps.len(),
        })
    }

    /// Find the index of a step by identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id() == id)
    }

    /// Number of registered steps
    pub fn count(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps are registered
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate steps in registration order
    pub fn iter(&self) -> impl Iterator<Item = &WizardStep> {
        self.steps.iter()
    }
}
