//! Setup flow orchestration
//!
//! Wires the step registry, the JSON-file gateway, and the wizard
//! controller into the interactive first-run experience.

use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::config::paths::OutsetPaths;
use crate::config::settings::Settings;
use crate::display::format_progress;
use crate::error::{OutsetError, OutsetResult};
use crate::models::BudgetPlan;
use crate::storage::gateway::JsonFileGateway;
use crate::wizard::controller::{Advance, WizardController, WizardState};
use crate::wizard::retry::RetryPolicy;

use super::steps::{self, StepInput};

/// Result of running the setup flow
pub struct SetupOutcome {
    /// Whether setup was completed successfully
    pub completed: bool,
    /// The committed plan (if any)
    pub plan: Option<BudgetPlan>,
}

impl SetupOutcome {
    fn aborted() -> Self {
        Self {
            completed: false,
            plan: None,
        }
    }
}

/// The first-run setup flow
pub struct SetupFlow {
    paths: OutsetPaths,
}

impl SetupFlow {
    /// Create a new setup flow
    pub fn new(paths: OutsetPaths) -> Self {
        Self { paths }
    }

    /// Check if setup is needed (first run)
    pub fn needs_setup(&self, settings: &Settings) -> bool {
        !settings.setup_completed && !self.paths.settings_file().exists()
    }

    /// Run the interactive setup wizard
    pub async fn run(&self, settings: &mut Settings) -> OutsetResult<SetupOutcome> {
        println!();
        println!("===========================================");
        println!("  Welcome to Outset!");
        println!("===========================================");
        println!();
        println!("This wizard sets up your monthly budget plan.");
        println!("Type 'back' at any prompt to revisit a step, or 'cancel' to abort.");
        println!();

        let confirm = steps::prompt_string("Ready to begin? (yes/no) [yes]: ")?;
        if !confirm.is_empty() && confirm.to_lowercase() != "yes" && confirm.to_lowercase() != "y" {
            println!("Setup cancelled.");
            return Ok(SetupOutcome::aborted());
        }

        self.paths.ensure_directories()?;
        let gateway = JsonFileGateway::new(self.paths.plan_file());
        let mut controller =
            WizardController::new(steps::budget_registry()?, Box::new(gateway))?;
        let logger = AuditLogger::new(self.paths.audit_log());

        let step_count = controller.registry().count();
        let mut reviewed_plan = None;

        loop {
            let (step_number, step_id, label) = match controller.state() {
                WizardState::AtStep(index) => {
                    let step = controller.current_step()?;
                    (index + 1, step.id().to_string(), step.label().to_string())
                }
                _ => break,
            };

            println!();
            println!(
                "{} — {}",
                format_progress(step_number, step_count, controller.progress()),
                label
            );

            let input = match step_id.as_str() {
                "income" => steps::prompt_income()?,
                "spending" => steps::prompt_spending()?,
                "review" => steps::prompt_review(controller.draft())?,
                other => {
                    return Err(OutsetError::Config(format!("Unknown setup step: {}", other)))
                }
            };

            match input {
                StepInput::Back => match controller.retreat() {
                    Ok(_) => {}
                    Err(OutsetError::NoPriorStep) => println!("Already at the first step."),
                    Err(e) => return Err(e),
                },
                StepInput::Cancel => {
                    controller.cancel()?;
                    logger.log(&AuditEntry::new(AuditAction::SetupCancelled, None))?;
                    println!();
                    println!("Setup cancelled. Nothing was saved.");
                    return Ok(SetupOutcome::aborted());
                }
                StepInput::Values(partial) => {
                    controller.update_draft(partial)?;

                    let finalizing = step_id == "review";
                    if finalizing {
                        // The session draft is discarded once the commit
                        // lands, so interpret it before advancing
                        reviewed_plan = Some(BudgetPlan::from_draft(controller.draft())?);
                    }

                    let advance = if finalizing {
                        RetryPolicy::default()
                            .finalize(&mut controller, |err| {
                                println!("Could not save the plan: {}", err);
                            })
                            .await
                    } else {
                        controller.advance().await
                    };

                    match advance {
                        Ok(Advance::Moved { .. }) => {}
                        Ok(Advance::Rejected(outcome)) => {
                            println!();
                            println!("Please fix the following:");
                            for (field, message) in outcome.errors() {
                                println!("  - {}: {}", field, message);
                            }
                        }
                        Ok(Advance::Finalized) => break,
                        Err(e) if e.is_retryable() => {
                            println!("Your answers are kept; confirm again to retry.");
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        logger.log(&AuditEntry::new(
            AuditAction::PlanCommitted,
            Some(self.paths.plan_file().display().to_string()),
        ))?;
        logger.log(&AuditEntry::new(AuditAction::SetupCompleted, None))?;

        settings.setup_completed = true;
        settings.save(&self.paths)?;

        println!();
        println!("Setup complete!");
        println!();
        println!("Your budget plan is saved. Some next steps:");
        println!("  - Run 'outset plan show' to review your plan");
        println!("  - Run 'outset config' to see where your data lives");
        println!();

        Ok(SetupOutcome {
            completed: true,
            plan: reviewed_plan,
        })
    }

    /// Run a minimal non-interactive initialization
    pub fn run_minimal(&self, settings: &mut Settings) -> OutsetResult<SetupOutcome> {
        println!("Initializing Outset...");

        self.paths.ensure_directories()?;
        settings.setup_completed = true;
        settings.save(&self.paths)?;

        println!("Initialization complete!");

        Ok(SetupOutcome {
            completed: true,
            plan: None,
        })
    }
}
