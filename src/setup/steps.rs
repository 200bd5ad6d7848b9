//! Budget setup steps
//!
//! Step definitions with their validators, and the interactive prompts that
//! collect each step's draft fields. Validation runs on advance; prompts
//! only parse eagerly so obvious typos are re-asked on the spot.

use std::io::{self, Write};

use crate::error::{OutsetError, OutsetResult};
use crate::models::plan::{FIELD_MONTHLY_INCOME, FIELD_SAVINGS_GOAL, FIELD_SPENDING_CAP};
use crate::models::{BudgetPlan, Money};
use crate::wizard::draft::Draft;
use crate::wizard::registry::StepRegistry;
use crate::wizard::step::{ValidationOutcome, WizardStep};

/// What the user asked for at a step prompt
#[derive(Debug)]
pub enum StepInput {
    /// Merge these fields into the draft and advance
    Values(Draft),
    /// Return to the previous step
    Back,
    /// Abort the wizard
    Cancel,
}

/// The income step: `monthly_income` must be present and positive
pub fn income_step() -> WizardStep {
    WizardStep::new("income", "Monthly income").validate_with(|draft| {
        match draft.get_i64(FIELD_MONTHLY_INCOME) {
            Some(cents) if cents > 0 => ValidationOutcome::ok(),
            Some(_) => {
                ValidationOutcome::reject(FIELD_MONTHLY_INCOME, "Monthly income must be positive")
            }
            None => ValidationOutcome::reject(FIELD_MONTHLY_INCOME, "Monthly income is required"),
        }
    })
}

/// The spending step: a required non-negative cap within income, plus an
/// optional non-negative savings goal
pub fn spending_step() -> WizardStep {
    WizardStep::new("spending", "Spending cap").validate_with(|draft| {
        let mut outcome = ValidationOutcome::ok();

        match draft.get_i64(FIELD_SPENDING_CAP) {
            Some(cents) if cents < 0 => {
                outcome.add_error(FIELD_SPENDING_CAP, "Spending cap must not be negative");
            }
            Some(cents) => {
                if let Some(income) = draft.get_i64(FIELD_MONTHLY_INCOME) {
                    if cents > income {
                        outcome.add_error(
                            FIELD_SPENDING_CAP,
                            "Spending cap cannot exceed monthly income",
                        );
                    }
                }
            }
            None => outcome.add_error(FIELD_SPENDING_CAP, "Spending cap is required"),
        }

        if let Some(goal) = draft.get_i64(FIELD_SAVINGS_GOAL) {
            if goal < 0 {
                outcome.add_error(FIELD_SAVINGS_GOAL, "Savings goal must not be negative");
            }
        }

        outcome
    })
}

/// The review step: re-checks that every required field is present
pub fn review_step() -> WizardStep {
    WizardStep::new("review", "Review and confirm")
        .require(FIELD_MONTHLY_INCOME, "Monthly income is required")
        .require(FIELD_SPENDING_CAP, "Spending cap is required")
}

/// The budget setup step order: income, spending, review
pub fn budget_registry() -> OutsetResult<StepRegistry> {
    let mut registry = StepRegistry::new();
    registry.register(income_step())?;
    registry.register(spending_step())?;
    registry.register(review_step())?;
    Ok(registry)
}

/// Run the income step prompt
pub fn prompt_income() -> OutsetResult<StepInput> {
    println!();
    println!("What do you expect to earn per month, after tax?");

    loop {
        match read_reply("Monthly income (e.g., 5000.00): ")? {
            Reply::Back => return Ok(StepInput::Back),
            Reply::Cancel => return Ok(StepInput::Cancel),
            Reply::Text(text) => match Money::parse(&text) {
                Ok(amount) => {
                    return Ok(StepInput::Values(
                        Draft::new().with(FIELD_MONTHLY_INCOME, amount.cents()),
                    ))
                }
                Err(e) => println!("  {}", e),
            },
        }
    }
}

/// Run the spending step prompt (cap plus optional savings goal)
pub fn prompt_spending() -> OutsetResult<StepInput> {
    println!();
    println!("How much of that do you want to allow yourself to spend?");

    let cap = loop {
        match read_reply("Spending cap (e.g., 3000.00): ")? {
            Reply::Back => return Ok(StepInput::Back),
            Reply::Cancel => return Ok(StepInput::Cancel),
            Reply::Text(text) => match Money::parse(&text) {
                Ok(amount) => break amount,
                Err(e) => println!("  {}", e),
            },
        }
    };

    println!();
    println!("Optionally, set aside a fixed amount for savings each month.");

    let goal = loop {
        match read_reply("Savings goal (press Enter to skip): ")? {
            Reply::Back => return Ok(StepInput::Back),
            Reply::Cancel => return Ok(StepInput::Cancel),
            Reply::Text(text) if text.is_empty() => break None,
            Reply::Text(text) => match Money::parse(&text) {
                Ok(amount) => break Some(amount),
                Err(e) => println!("  {}", e),
            },
        }
    };

    let mut partial = Draft::new().with(FIELD_SPENDING_CAP, cap.cents());
    if let Some(goal) = goal {
        partial.set(FIELD_SAVINGS_GOAL, goal.cents());
    }
    Ok(StepInput::Values(partial))
}

/// Run the review step prompt: show the summary and ask for confirmation
pub fn prompt_review(draft: &Draft) -> OutsetResult<StepInput> {
    println!();
    match BudgetPlan::from_draft(draft) {
        Ok(plan) => println!("{}", crate::display::plan_summary_table(&plan)),
        Err(e) => println!("The plan is incomplete: {}", e),
    }
    println!();

    loop {
        match read_reply("Commit this plan? (yes/no) [yes]: ")? {
            Reply::Back => return Ok(StepInput::Back),
            Reply::Cancel => return Ok(StepInput::Cancel),
            Reply::Text(text) => match text.to_lowercase().as_str() {
                "" | "yes" | "y" => return Ok(StepInput::Values(Draft::new())),
                "no" | "n" => return Ok(StepInput::Cancel),
                _ => println!("  Please answer yes or no."),
            },
        }
    }
}

enum Reply {
    Text(String),
    Back,
    Cancel,
}

fn read_reply(prompt: &str) -> OutsetResult<Reply> {
    let input = prompt_string(prompt)?;
    match input.to_lowercase().as_str() {
        "back" => Ok(Reply::Back),
        "cancel" => Ok(Reply::Cancel),
        _ => Ok(Reply::Text(input)),
    }
}

/// Prompt for a string input
pub(crate) fn prompt_string(prompt: &str) -> OutsetResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| OutsetError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| OutsetError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}
