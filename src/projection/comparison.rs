use serde::Serialize;

use super::projector::{project, project_trajectory, PopulationSnapshot};
use super::schedule::InterventionSchedule;
use crate::error::ProjectionError;
use crate::models::Intervention;

/// Largest horizon for which per-period trajectories are kept in memory.
pub const MAX_TRAJECTORY_PERIODS: u32 = 1_000_000;

/// A projection run alongside its no-intervention baseline.
///
/// Final values are always available. Per-period trajectories are only filled
/// by [`Projection::compute_with_trajectory`]; otherwise they are empty.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub initial_population: f64,
    pub growth_rate: f64,
    pub periods: u32,
    /// Interventions that actually fire, ascending by period
    pub applied: Vec<Intervention>,
    final_population: f64,
    baseline_final: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub baseline: Vec<PopulationSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trajectory: Vec<PopulationSnapshot>,
}

impl Projection {
    /// Final values only; runs in constant memory for any `periods`.
    pub fn compute(
        initial_population: f64,
        growth_rate: f64,
        periods: u32,
        interventions: &[Intervention],
    ) -> Self {
        let schedule = InterventionSchedule::new(interventions);

        for iv in schedule.duplicates() {
            tracing::warn!(
                period = iv.period,
                fraction = iv.survival_fraction,
                "duplicate intervention period; only the first entry applies"
            );
        }
        for iv in schedule.unreached(periods) {
            tracing::warn!(
                period = iv.period,
                periods,
                "intervention falls outside the projection and will not apply"
            );
        }

        let applied = schedule
            .entries()
            .iter()
            .filter(|iv| (1..=periods).contains(&iv.period))
            .copied()
            .collect();

        Self {
            initial_population,
            growth_rate,
            periods,
            applied,
            final_population: project(initial_population, growth_rate, periods, interventions),
            baseline_final: project(initial_population, growth_rate, periods, &[]),
            baseline: Vec::new(),
            trajectory: Vec::new(),
        }
    }

    /// Final values plus both per-period trajectories.
    ///
    /// Fails with `ProjectionError::ValidationError` when `periods` exceeds
    /// [`MAX_TRAJECTORY_PERIODS`].
    pub fn compute_with_trajectory(
        initial_population: f64,
        growth_rate: f64,
        periods: u32,
        interventions: &[Intervention],
    ) -> Result<Self, ProjectionError> {
        if periods > MAX_TRAJECTORY_PERIODS {
            return Err(ProjectionError::ValidationError(format!(
                "Trajectories are limited to {MAX_TRAJECTORY_PERIODS} periods, got {periods}"
            )));
        }

        let mut projection = Self::compute(initial_population, growth_rate, periods, interventions);
        projection.baseline = project_trajectory(initial_population, growth_rate, periods, &[]);
        projection.trajectory =
            project_trajectory(initial_population, growth_rate, periods, interventions);
        Ok(projection)
    }

    /// Population after the last period with interventions applied.
    pub fn final_population(&self) -> f64 {
        self.final_population
    }

    /// Population after the last period with no interventions.
    pub fn baseline_final(&self) -> f64 {
        self.baseline_final
    }

    /// Relative reduction of the final population against the baseline, in percent.
    /// Zero when the baseline is zero.
    pub fn reduction_percent(&self) -> f64 {
        if self.baseline_final == 0.0 {
            return 0.0;
        }
        (1.0 - self.final_population / self.baseline_final) * 100.0
    }

    pub fn has_interventions(&self) -> bool {
        !self.applied.is_empty()
    }

    pub fn has_trajectory(&self) -> bool {
        !self.trajectory.is_empty()
    }
}
