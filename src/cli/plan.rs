//! Plan CLI commands

use clap::Subcommand;

use crate::config::paths::OutsetPaths;
use crate::display::plan_summary_table;
use crate::error::OutsetResult;
use crate::models::BudgetPlan;
use crate::storage::file_io::read_json;
use crate::wizard::draft::Draft;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the committed budget plan
    Show,
}

/// Handle a plan command
pub fn handle_plan_command(paths: &OutsetPaths, cmd: PlanCommands) -> OutsetResult<()> {
    match cmd {
        PlanCommands::Show => {
            let plan_file = paths.plan_file();
            if !plan_file.exists() {
                println!("No budget plan found. Run 'outset setup' to create one.");
                return Ok(());
            }

            let draft: Draft = read_json(&plan_file)?;
            let plan = BudgetPlan::from_draft(&draft)?;

            println!("Budget Plan");
            println!("{}", plan_summary_table(&plan));
            Ok(())
        }
    }
}
