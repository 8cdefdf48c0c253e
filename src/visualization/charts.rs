use colored::Colorize;

use crate::projection::Projection;

/// Format a text bar chart of the trajectory as a string.
///
/// Bars are scaled against the largest value in either the trajectory or the
/// baseline; periods where an intervention fired are marked with `*`.
pub fn format_trajectory_chart(projection: &Projection) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Population Over Time".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if projection.periods == 0 || !projection.has_trajectory() {
        output.push_str("  No periods to chart.\n");
        return output;
    }

    let max_pop = projection
        .trajectory
        .iter()
        .chain(&projection.baseline)
        .map(|s| s.population)
        .fold(0.0f64, f64::max);

    let bar_width = 40;

    output.push_str(&format!("  {:>6}  {:>12}  Population\n", "Period", "Value"));
    output.push_str(&format!("  {}\n", "-".repeat(70)));

    for snap in &projection.trajectory {
        let bar_len = if max_pop > 0.0 && snap.population > 0.0 {
            ((snap.population / max_pop) * bar_width as f64).round() as usize
        } else {
            0
        };

        let bar = "\u{2588}".repeat(bar_len);
        let marker = if snap.applied_survival.is_some() { "*" } else { " " };

        output.push_str(&format!(
            "  {:>6}{} {:>12.2}  {}\n",
            snap.period,
            marker,
            snap.population,
            bar.green()
        ));
    }

    if projection.has_interventions() {
        output.push_str("  * intervention applied\n");
    }

    output.push('\n');
    output
}

/// Print a text bar chart of the trajectory.
pub fn print_trajectory_chart(projection: &Projection) {
    print!("{}", format_trajectory_chart(projection));
}
