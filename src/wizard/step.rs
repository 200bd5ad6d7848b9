//! Wizard step definitions
//!
//! A step pairs a unique identifier and label with validation predicates
//! run against the draft when the wizard advances. Validation failures are
//! data, not errors: they come back as a field-to-message map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::draft::Draft;

/// Outcome of validating a draft against a step
///
/// Valid when the error map is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    errors: BTreeMap<String, String>,
}

impl ValidationOutcome {
    /// A passing outcome
    pub fn ok() -> Self {
        Self::default()
    }

    /// A failing outcome with a single field error
    pub fn reject(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut outcome = Self::default();
        outcome.add_error(field, message);
        outcome
    }

    /// Record an error for a field; the first message for a field wins
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Whether the draft passed validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field-to-message failure reasons
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Absorb another outcome's errors
    pub fn merge(&mut self, other: ValidationOutcome) {
        for (field, message) in other.errors {
            self.add_error(field, message);
        }
    }
}

type Validator = Box<dyn Fn(&Draft) -> ValidationOutcome + Send + Sync>;

/// One logical page of a multi-page input flow
///
/// Immutable once registered: the identifier, label, and validators are
/// fixed at construction.
pub struct WizardStep {
    id: String,
    label: String,
    validators: Vec<Validator>,
}

impl WizardStep {
    /// Create a step that accepts any draft
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            validators: Vec::new(),
        }
    }

    /// Unique, ordering-significant identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add a custom validation predicate
    pub fn validate_with(
        mut self,
        f: impl Fn(&Draft) -> ValidationOutcome + Send + Sync + 'static,
    ) -> Self {
        self.validators.push(Box::new(f));
        self
    }

    /// Require a field to be populated
    pub fn require(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();
        self.validate_with(move |draft| {
            if draft.contains(&field) {
                ValidationOutcome::ok()
            } else {
                ValidationOutcome::reject(field.clone(), message.clone())
            }
        })
    }

    /// Run every validator against the draft, collecting all failures
    pub fn validate(&self, draft: &Draft) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::ok();
        for validator in &self.validators {
            outcome.merge(validator(draft));
        }
        outcome
    }
}

impl fmt::Debug for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardStep")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("validators", &self.validators.len())
            .finish()
    }
}
