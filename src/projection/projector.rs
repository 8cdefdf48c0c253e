use serde::{Deserialize, Serialize};

use super::schedule::InterventionSchedule;
use crate::models::Intervention;

/// Population at the end of one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub period: u32,
    pub population: f64,
    /// Survival fraction applied at the end of this period, if an intervention fired
    pub applied_survival: Option<f64>,
}

/// One period of compound growth followed by the scheduled intervention, if any.
#[inline]
fn step(population: f64, growth_rate: f64, survival: Option<f64>) -> f64 {
    let grown = population * (1.0 + growth_rate);
    match survival {
        Some(fraction) => grown * fraction,
        None => grown,
    }
}

/// Project the population after `periods` periods of compound growth.
///
/// Growth is applied period by period; an intervention scheduled for period
/// `t` multiplies the population right after that period's growth, so later
/// growth compounds on the reduced base. At most one intervention fires per
/// period (the first given, for duplicated periods). Interventions at period 0
/// or beyond `periods` never fire.
///
/// Inputs are not validated: a growth rate of -1 or below, a negative initial
/// population, or a survival fraction outside 0..=1 give defined but not
/// meaningful results. See [`crate::models::Scenario::validate`] for strict checks.
pub fn project(
    initial_population: f64,
    growth_rate: f64,
    periods: u32,
    interventions: &[Intervention],
) -> f64 {
    let schedule = InterventionSchedule::new(interventions);
    (1..=periods).fold(initial_population, |population, t| {
        step(population, growth_rate, schedule.survival_at(t))
    })
}

/// Closed-form projection without interventions: `P0 * (1 + r)^n`.
///
/// Agrees with [`project`] on an empty intervention list up to floating-point
/// rounding; it is not bit-identical for large `periods`.
pub fn project_closed_form(initial_population: f64, growth_rate: f64, periods: u32) -> f64 {
    match i32::try_from(periods) {
        Ok(n) => initial_population * (1.0 + growth_rate).powi(n),
        Err(_) => initial_population * (1.0 + growth_rate).powf(periods as f64),
    }
}

/// Project the population and keep every intermediate value.
///
/// Returns `periods + 1` snapshots; index 0 is the initial population and the
/// last entry equals [`project`] for the same inputs exactly.
pub fn project_trajectory(
    initial_population: f64,
    growth_rate: f64,
    periods: u32,
    interventions: &[Intervention],
) -> Vec<PopulationSnapshot> {
    let schedule = InterventionSchedule::new(interventions);
    let mut snapshots = Vec::with_capacity(periods as usize + 1);

    // Period 0 = initial conditions
    snapshots.push(PopulationSnapshot {
        period: 0,
        population: initial_population,
        applied_survival: None,
    });

    let mut population = initial_population;
    for t in 1..=periods {
        let survival = schedule.survival_at(t);
        population = step(population, growth_rate, survival);
        if let Some(fraction) = survival {
            tracing::debug!(period = t, fraction, population, "intervention applied");
        }
        snapshots.push(PopulationSnapshot {
            period: t,
            population,
            applied_survival: survival,
        });
    }

    snapshots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(period: u32, fraction: f64) -> Intervention {
        Intervention::new(period, fraction)
    }

    #[test]
    fn test_zero_periods_returns_initial() {
        assert_eq!(project(10.0, 0.03, 0, &[]), 10.0);
        assert_eq!(project(10.0, 0.03, 0, &[iv(1, 0.1), iv(0, 0.2)]), 10.0);
    }

    #[test]
    fn test_single_period() {
        let p = project(100.0, 0.1, 1, &[]);
        assert!((p - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_sample_without_interventions() {
        let p = project(10.0, 0.03, 52, &[]);
        assert_eq!(format!("{p:.2}"), "46.51");
    }

    #[test]
    fn test_matches_closed_form() {
        let iterative = project(10.0, 0.03, 52, &[]);
        let closed = project_closed_form(10.0, 0.03, 52);
        assert!((iterative - closed).abs() < 1e-9);
    }

    #[test]
    fn test_intervention_applied_after_growth() {
        // 100 -> 110 -> * 0.5 = 55 -> 60.5
        let p = project(100.0, 0.1, 2, &[iv(1, 0.5)]);
        assert!((p - 60.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_growth_with_intervention() {
        assert_eq!(project(10.0, 0.0, 52, &[iv(20, 0.5)]), 5.0);
    }

    #[test]
    fn test_duplicate_period_applies_once() {
        let p = project(10.0, 0.0, 52, &[iv(20, 0.5), iv(20, 0.9)]);
        assert_eq!(p, 5.0);
    }

    #[test]
    fn test_intervention_beyond_horizon_is_noop() {
        let with = project(10.0, 0.03, 10, &[iv(11, 0.1)]);
        let without = project(10.0, 0.03, 10, &[]);
        assert_eq!(with, without);
    }

    #[test]
    fn test_intervention_at_period_zero_is_noop() {
        assert_eq!(project(10.0, 0.0, 5, &[iv(0, 0.1)]), 10.0);
    }

    #[test]
    fn test_total_decline_rate() {
        assert_eq!(project(10.0, -1.0, 3, &[]), 0.0);
    }

    #[test]
    fn test_negative_growth_declines() {
        let p = project(100.0, -0.1, 10, &[]);
        assert!(p < 100.0);
        assert!(p > 0.0);
    }

    #[test]
    fn test_closed_form_zero_periods() {
        assert_eq!(project_closed_form(42.0, 0.5, 0), 42.0);
    }

    #[test]
    fn test_closed_form_huge_periods_uses_powf() {
        let p = project_closed_form(1.0, 0.0, u32::MAX);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_trajectory_length_and_endpoints() {
        let traj = project_trajectory(10.0, 0.03, 52, &[iv(20, 0.6), iv(40, 0.8)]);
        assert_eq!(traj.len(), 53);
        assert_eq!(traj[0].period, 0);
        assert_eq!(traj[0].population, 10.0);
        assert_eq!(traj.last().unwrap().period, 52);
        assert_eq!(
            traj.last().unwrap().population,
            project(10.0, 0.03, 52, &[iv(20, 0.6), iv(40, 0.8)])
        );
    }

    #[test]
    fn test_trajectory_marks_applied_interventions() {
        let traj = project_trajectory(10.0, 0.03, 52, &[iv(40, 0.8), iv(20, 0.6)]);
        let applied: Vec<(u32, f64)> = traj
            .iter()
            .filter_map(|s| s.applied_survival.map(|f| (s.period, f)))
            .collect();
        assert_eq!(applied, vec![(20, 0.6), (40, 0.8)]);
    }

    #[test]
    fn test_trajectory_drop_at_intervention() {
        let traj = project_trajectory(10.0, 0.03, 30, &[iv(20, 0.6)]);
        assert!(traj[20].population < traj[19].population);
        assert!(traj[21].population > traj[20].population);
    }

    #[test]
    fn test_trajectory_zero_periods() {
        let traj = project_trajectory(7.0, 0.2, 0, &[iv(1, 0.5)]);
        assert_eq!(traj.len(), 1);
        assert_eq!(traj[0].population, 7.0);
        assert_eq!(traj[0].applied_survival, None);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snap = PopulationSnapshot {
            period: 20,
            population: 12.5,
            applied_survival: Some(0.6),
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: PopulationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
