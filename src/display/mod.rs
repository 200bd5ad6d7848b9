//! Terminal output formatting
//!
//! Renders the committed plan summary and small progress indicators.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::BudgetPlan;

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Monthly amount")]
    amount: String,
}

/// Render a budget plan as a table
pub fn plan_summary_table(plan: &BudgetPlan) -> String {
    let mut rows = vec![
        PlanRow {
            item: "Income",
            amount: plan.monthly_income.to_string(),
        },
        PlanRow {
            item: "Spending cap",
            amount: plan.spending_cap.to_string(),
        },
    ];
    if let Some(goal) = plan.savings_goal {
        rows.push(PlanRow {
            item: "Savings goal",
            amount: goal.to_string(),
        });
    }
    rows.push(PlanRow {
        item: "Unallocated",
        amount: plan.unallocated().to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a wizard progress fraction as "Step X of Y (NN%)"
pub fn format_progress(step_number: usize, step_count: usize, progress: f64) -> String {
    format!(
        "Step {} of {} ({:.0}%)",
        step_number,
        step_count,
        progress * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn sample_plan() -> BudgetPlan {
        BudgetPlan {
            monthly_income: Money::from_cents(500000),
            spending_cap: Money::from_cents(300000),
            savings_goal: Some(Money::from_cents(100000)),
        }
    }

    #[test]
    fn test_plan_summary_contains_amounts() {
        let table = plan_summary_table(&sample_plan());

        assert!(table.contains("Income"));
        assert!(table.contains("$5000.00"));
        assert!(table.contains("Spending cap"));
        assert!(table.contains("$3000.00"));
        assert!(table.contains("Savings goal"));
        assert!(table.contains("Unallocated"));
        assert!(table.contains("$1000.00"));
    }

    #[test]
    fn test_plan_summary_omits_absent_goal() {
        let mut plan = sample_plan();
        plan.savings_goal = None;
        let table = plan_summary_table(&plan);
        assert!(!table.contains("Savings goal"));
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(2, 3, 2.0 / 3.0), "Step 2 of 3 (67%)");
        assert_eq!(format_progress(3, 3, 1.0), "Step 3 of 3 (100%)");
    }
}
