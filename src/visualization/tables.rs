use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::models::Intervention;
use crate::projection::{PopulationSnapshot, Projection};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render an intervention list as `[(20, 0.6), (40, 0.8)]`.
pub fn format_interventions(interventions: &[Intervention]) -> String {
    let items: Vec<String> = interventions.iter().map(|iv| iv.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Format the inputs and outcome of a projection as a string.
pub fn format_summary(title: &str, projection: &Projection) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Initial population"),
        Cell::new(format!("{}", projection.initial_population)),
    ]);
    table.add_row(vec![
        Cell::new("Growth rate per period"),
        Cell::new(format!("{:.1}%", projection.growth_rate * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Number of periods"),
        Cell::new(format!("{}", projection.periods)),
    ]);
    table.add_row(vec![
        Cell::new("Final population (no interventions)"),
        Cell::new(format!("{:.2}", projection.baseline_final())),
    ]);

    if projection.has_interventions() {
        table.add_row(vec![
            Cell::new("Interventions"),
            Cell::new(format_interventions(&projection.applied)),
        ]);
        table.add_row(vec![
            Cell::new("Final population (with interventions)"),
            Cell::new(format!("{:.2}", projection.final_population())),
        ]);
        table.add_row(vec![
            Cell::new("Reduction"),
            Cell::new(format!("{:.1}%", projection.reduction_percent())),
        ]);
    }

    output.push_str(&format!("{table}\n"));

    if projection.has_interventions() {
        output.push_str(&format!(
            "  {} {:.2} vs {:.2} without interventions\n",
            "Effect:".bold(),
            projection.final_population(),
            projection.baseline_final()
        ));
    }

    output
}

/// Print a projection summary.
pub fn print_summary(title: &str, projection: &Projection) {
    print!("{}", format_summary(title, projection));
}

/// Format the per-period trajectory next to its baseline as a string.
pub fn format_trajectory_table(projection: &Projection) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population Trajectory".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = new_table();
    table.set_header(vec!["Period", "Population", "Baseline", "Intervention"]);

    for (snap, base) in projection.trajectory.iter().zip(&projection.baseline) {
        table.add_row(trajectory_row(snap, base.population));
    }

    output.push_str(&format!("{table}\n"));
    output
}

fn trajectory_row(snap: &PopulationSnapshot, baseline: f64) -> Vec<Cell> {
    let intervention = match snap.applied_survival {
        Some(fraction) => format!("x{fraction} ({:.0}% removed)", (1.0 - fraction) * 100.0),
        None => String::new(),
    };
    vec![
        Cell::new(format!("{}", snap.period)),
        Cell::new(format!("{:.2}", snap.population)),
        Cell::new(format!("{:.2}", baseline)),
        Cell::new(intervention),
    ]
}

/// Print the per-period trajectory table.
pub fn print_trajectory_table(projection: &Projection) {
    print!("{}", format_trajectory_table(projection));
}
