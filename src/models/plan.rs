//! Budget plan produced by a completed setup
//!
//! A typed view over the draft the wizard commits: the plan file on disk is
//! the raw draft, and `BudgetPlan::from_draft` interprets it.

use serde::{Deserialize, Serialize};

use crate::error::{OutsetError, OutsetResult};
use crate::wizard::draft::Draft;

use super::money::Money;

/// Draft/plan field: monthly income in cents
pub const FIELD_MONTHLY_INCOME: &str = "monthly_income";
/// Draft/plan field: monthly spending cap in cents
pub const FIELD_SPENDING_CAP: &str = "spending_cap";
/// Draft/plan field: optional monthly savings goal in cents
pub const FIELD_SAVINGS_GOAL: &str = "savings_goal";

/// A committed budget plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPlan {
    /// Expected monthly income
    pub monthly_income: Money,
    /// Ceiling for monthly spending
    pub spending_cap: Money,
    /// Amount set aside each month, if the user chose one
    pub savings_goal: Option<Money>,
}

impl BudgetPlan {
    /// Interpret a draft as a budget plan
    ///
    /// Amounts are stored in the draft as integer cents. Fails with a
    /// `Validation` error when a required field is missing or an amount is
    /// out of range.
    pub fn from_draft(draft: &Draft) -> OutsetResult<Self> {
        let monthly_income = require_amount(draft, FIELD_MONTHLY_INCOME)?;
        if !monthly_income.is_positive() {
            return Err(OutsetError::Validation(
                "monthly income must be positive".into(),
            ));
        }

        let spending_cap = require_amount(draft, FIELD_SPENDING_CAP)?;
        if spending_cap.is_negative() {
            return Err(OutsetError::Validation(
                "spending cap must not be negative".into(),
            ));
        }

        let savings_goal = match draft.get_i64(FIELD_SAVINGS_GOAL) {
            Some(cents) if cents < 0 => {
                return Err(OutsetError::Validation(
                    "savings goal must not be negative".into(),
                ));
            }
            Some(cents) => Some(Money::from_cents(cents)),
            None => None,
        };

        Ok(Self {
            monthly_income,
            spending_cap,
            savings_goal,
        })
    }

    /// Income left after the spending cap and savings goal
    pub fn unallocated(&self) -> Money {
        self.monthly_income - self.spending_cap - self.savings_goal.unwrap_or_default()
    }
}

fn require_amount(draft: &Draft, field: &str) -> OutsetResult<Money> {
    draft
        .get_i64(field)
        .map(Money::from_cents)
        .ok_or_else(|| OutsetError::Validation(format!("missing amount field: {}", field)))
}
