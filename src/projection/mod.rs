mod comparison;
mod projector;
mod schedule;

pub use comparison::{Projection, MAX_TRAJECTORY_PERIODS};
pub use projector::{project, project_closed_form, project_trajectory, PopulationSnapshot};
pub use schedule::InterventionSchedule;
