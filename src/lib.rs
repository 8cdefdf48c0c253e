pub mod error;
pub mod io;
pub mod models;
pub mod projection;
pub mod visualization;

pub use error::ProjectionError;
pub use io::{ScenarioReader, ScenarioWriter};
pub use models::{Intervention, Scenario};
pub use projection::{
    project, project_closed_form, project_trajectory, InterventionSchedule, PopulationSnapshot,
    Projection,
};
