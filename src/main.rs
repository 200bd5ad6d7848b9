use anyhow::Result;
use clap::{Parser, Subcommand};

use outset::cli::{handle_plan_command, PlanCommands};
use outset::config::{paths::OutsetPaths, settings::Settings};
use outset::setup::SetupFlow;

#[derive(Parser)]
#[command(
    name = "outset",
    version,
    about = "Terminal budget setup wizard",
    long_about = "Outset walks you through setting up a monthly budget plan \
                  in a few validated steps and keeps your answers safe until \
                  you commit them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive setup wizard
    Setup,

    /// Initialize without the interactive wizard
    Init,

    /// Budget plan commands
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutsetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Setup) => {
            let flow = SetupFlow::new(paths);
            flow.run(&mut settings).await?;
        }
        Some(Commands::Init) => {
            let flow = SetupFlow::new(paths);
            flow.run_minimal(&mut settings)?;
        }
        Some(Commands::Plan(cmd)) => {
            handle_plan_command(&paths, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Outset configuration");
            println!("  Base directory:  {}", paths.base_dir().display());
            println!("  Settings file:   {}", paths.settings_file().display());
            println!("  Plan file:       {}", paths.plan_file().display());
            println!("  Audit log:       {}", paths.audit_log().display());
            println!("  Setup completed: {}", settings.setup_completed);
        }
        None => {
            let flow = SetupFlow::new(paths);
            if flow.needs_setup(&settings) {
                flow.run(&mut settings).await?;
            } else {
                println!("Outset is already set up.");
                println!("Run 'outset plan show' to see your plan, or 'outset --help'.");
            }
        }
    }

    Ok(())
}
