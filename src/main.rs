use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pest_population_projector::{
    io,
    models::{Intervention, Scenario},
    projection::Projection,
    visualization::{print_summary, print_trajectory_chart, print_trajectory_table},
};

#[derive(Parser)]
#[command(
    name = "pest-projector",
    about = "Pest Population Projector - compound growth with control interventions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ReportArgs {
    /// Reject out-of-range inputs instead of warning
    #[arg(long)]
    strict: bool,

    /// Show the per-period trajectory table
    #[arg(long)]
    trajectory: bool,

    /// Show a bar chart of the trajectory
    #[arg(long)]
    chart: bool,

    /// Export the trajectory (.csv or .json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a population from command-line parameters
    Project {
        /// Initial population
        #[arg(short, long, allow_negative_numbers = true)]
        initial: f64,

        /// Growth rate per period as a decimal (0.03 = 3%)
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,

        /// Number of periods to project
        #[arg(short, long)]
        periods: u32,

        /// Intervention as PERIOD:FRACTION, e.g. 20:0.6 (repeatable)
        #[arg(long = "intervention", value_name = "PERIOD:FRACTION")]
        interventions: Vec<Intervention>,

        /// CSV file of interventions with period,survival_fraction columns
        #[arg(long)]
        schedule: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Run a scenario file (TOML or JSON)
    Run {
        /// Path to the scenario file
        #[arg(short, long)]
        scenario: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Run the sample weekly simulation with and without interventions
    Demo {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Write the sample scenario to a file for editing
    Init {
        /// Output path (.toml or .json)
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn check_inputs(scenario: &Scenario, strict: bool) -> Result<()> {
    if strict {
        scenario.validate()?;
        return Ok(());
    }
    for issue in scenario.validate_all() {
        eprintln!("{}: {issue}", "Warning".yellow());
    }
    Ok(())
}

fn export(projection: &Projection, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => io::write_trajectory_csv(projection, path)?,
        "json" => io::write_trajectory_json(projection, path)?,
        _ => anyhow::bail!("Unsupported output format: .{ext}. Use .csv or .json"),
    }

    println!(
        "{} Trajectory written to {}",
        "Success:".green().bold(),
        path.display()
    );
    Ok(())
}

fn run_scenario(scenario: &Scenario, report: &ReportArgs) -> Result<()> {
    check_inputs(scenario, report.strict)?;

    let projection = if report.trajectory || report.chart || report.output.is_some() {
        scenario.projection_with_trajectory()?
    } else {
        scenario.projection()
    };
    print_summary(&format!("Projection: {}", scenario.name), &projection);

    if report.trajectory {
        print_trajectory_table(&projection);
    }
    if report.chart {
        print_trajectory_chart(&projection);
    }
    if let Some(path) = &report.output {
        export(&projection, path)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            initial,
            rate,
            periods,
            mut interventions,
            schedule,
            report,
        } => {
            if let Some(path) = schedule {
                interventions.extend(io::read_interventions_csv(&path)?);
            }
            let scenario = Scenario::new("Command line", initial, rate, periods)
                .with_interventions(interventions);
            run_scenario(&scenario, &report)?;
        }

        Commands::Run { scenario, report } => {
            let scenario = io::read_scenario(&scenario)?;
            run_scenario(&scenario, &report)?;
        }

        Commands::Demo { report } => {
            run_scenario(&Scenario::demo(), &report)?;
        }

        Commands::Init { output } => {
            io::write_scenario(&Scenario::demo(), &output)?;
            println!(
                "{} Sample scenario written to {}",
                "Success:".green().bold(),
                output.display()
            );
        }
    }

    Ok(())
}
