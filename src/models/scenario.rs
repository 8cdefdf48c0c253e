use serde::{Deserialize, Serialize};

use super::intervention::Intervention;
use crate::error::ProjectionError;
use crate::projection::{project, Projection};

fn default_name() -> String {
    "Scenario".to_string()
}

/// A complete projection setup, as read from a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    /// Population at period 0
    pub initial_population: f64,
    /// Growth per period as a decimal fraction (0.03 = 3%)
    pub growth_rate: f64,
    /// Number of periods to project
    pub periods: u32,
    #[serde(default)]
    pub interventions: Vec<Intervention>,
}

impl Scenario {
    pub fn new(name: &str, initial_population: f64, growth_rate: f64, periods: u32) -> Self {
        Self {
            name: name.to_string(),
            initial_population,
            growth_rate,
            periods,
            interventions: Vec::new(),
        }
    }

    pub fn with_interventions(mut self, interventions: Vec<Intervention>) -> Self {
        self.interventions = interventions;
        self
    }

    /// The sample cockroach run: 10 insects, 3% weekly growth over 52 weeks,
    /// with control treatments in weeks 20 and 40.
    pub fn demo() -> Self {
        Self::new("Weekly cockroach growth", 10.0, 0.03, 52).with_interventions(vec![
            Intervention::new(20, 0.6),
            Intervention::new(40, 0.8),
        ])
    }

    /// Final population for this scenario.
    pub fn project(&self) -> f64 {
        project(
            self.initial_population,
            self.growth_rate,
            self.periods,
            &self.interventions,
        )
    }

    /// Final values with and without interventions.
    pub fn projection(&self) -> Projection {
        Projection::compute(
            self.initial_population,
            self.growth_rate,
            self.periods,
            &self.interventions,
        )
    }

    /// Projection including both per-period trajectories.
    pub fn projection_with_trajectory(&self) -> Result<Projection, ProjectionError> {
        Projection::compute_with_trajectory(
            self.initial_population,
            self.growth_rate,
            self.periods,
            &self.interventions,
        )
    }

    /// Strict input checks. The projection itself accepts anything; this
    /// rejects inputs whose results would not be meaningful. Reports the first
    /// problem found by [`Scenario::validate_all`].
    pub fn validate(&self) -> Result<(), ProjectionError> {
        match self.validate_all().into_iter().next() {
            Some(issue) => Err(ProjectionError::ValidationError(issue)),
            None => Ok(()),
        }
    }

    /// Validate every field and collect all problems instead of stopping at the first.
    pub fn validate_all(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.initial_population.is_finite() || self.initial_population < 0.0 {
            issues.push(format!(
                "Initial population must be a non-negative number, got {}",
                self.initial_population
            ));
        }
        if !self.growth_rate.is_finite() || self.growth_rate <= -1.0 {
            issues.push(format!(
                "Growth rate must be greater than -1, got {}",
                self.growth_rate
            ));
        }
        for iv in &self.interventions {
            match iv.validate(self.periods) {
                Ok(()) => {}
                Err(ProjectionError::ValidationError(msg)) => issues.push(msg),
                Err(other) => issues.push(other.to_string()),
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_values() {
        let s = Scenario::demo();
        assert_eq!(s.initial_population, 10.0);
        assert_eq!(s.growth_rate, 0.03);
        assert_eq!(s.periods, 52);
        assert_eq!(s.interventions.len(), 2);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_project_matches_free_function() {
        let s = Scenario::demo();
        assert_eq!(s.project(), project(10.0, 0.03, 52, &s.interventions));
        assert_eq!(s.project(), s.projection().final_population());
    }

    #[test]
    fn test_validate_negative_population() {
        let s = Scenario::new("bad", -1.0, 0.03, 10);
        let err = s.validate().unwrap_err();
        assert!(matches!(err, ProjectionError::ValidationError(_)));
    }

    #[test]
    fn test_validate_growth_rate_floor() {
        assert!(Scenario::new("x", 10.0, -1.0, 10).validate().is_err());
        assert!(Scenario::new("x", 10.0, -1.5, 10).validate().is_err());
        assert!(Scenario::new("x", 10.0, -0.99, 10).validate().is_ok());
        assert!(Scenario::new("x", 10.0, f64::INFINITY, 10).validate().is_err());
    }

    #[test]
    fn test_validate_intervention_period() {
        let s = Scenario::new("x", 10.0, 0.03, 10)
            .with_interventions(vec![Intervention::new(11, 0.5)]);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_all_collects_everything() {
        let s = Scenario::new("x", -5.0, -2.0, 10).with_interventions(vec![
            Intervention::new(0, 0.5),
            Intervention::new(5, 1.5),
            Intervention::new(6, 0.5),
        ]);
        assert_eq!(s.validate_all().len(), 4);
    }

    #[test]
    fn test_validate_reports_first_collected_issue() {
        let s = Scenario::new("x", 10.0, -2.0, 10)
            .with_interventions(vec![Intervention::new(0, 0.5)]);
        let issues = s.validate_all();
        assert_eq!(issues.len(), 2);
        match s.validate() {
            Err(ProjectionError::ValidationError(msg)) => assert_eq!(msg, issues[0]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_all_clean() {
        assert!(Scenario::demo().validate_all().is_empty());
    }

    #[test]
    fn test_json_defaults() {
        let s: Scenario = serde_json::from_str(
            r#"{"initial_population": 5.0, "growth_rate": 0.1, "periods": 3}"#,
        )
        .unwrap();
        assert_eq!(s.name, "Scenario");
        assert!(s.interventions.is_empty());
    }

    #[test]
    fn test_toml_parse() {
        let s: Scenario = toml::from_str(
            r#"
name = "Kitchen"
initial_population = 10.0
growth_rate = 0.03
periods = 52

[[interventions]]
period = 20
survival_fraction = 0.6
"#,
        )
        .unwrap();
        assert_eq!(s.name, "Kitchen");
        assert_eq!(s.interventions, vec![Intervention::new(20, 0.6)]);
    }
}
