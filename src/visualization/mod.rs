mod charts;
mod tables;

pub use charts::{format_trajectory_chart, print_trajectory_chart};
pub use tables::{
    format_interventions, format_summary, format_trajectory_table, print_summary,
    print_trajectory_table,
};
