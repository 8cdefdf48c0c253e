use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// A scheduled one-time population change.
///
/// At the end of `period` the population is multiplied by `survival_fraction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    /// Period (1-based) at whose end the intervention applies
    pub period: u32,
    /// Fraction of the population remaining afterwards (0.0 - 1.0)
    pub survival_fraction: f64,
}

impl Intervention {
    pub fn new(period: u32, survival_fraction: f64) -> Self {
        Self {
            period,
            survival_fraction,
        }
    }

    /// Fraction of the population removed, as a percentage.
    pub fn reduction_percent(&self) -> f64 {
        (1.0 - self.survival_fraction) * 100.0
    }

    /// Validate against a projection horizon. Returns `ProjectionError::ValidationError` on failure.
    pub fn validate(&self, periods: u32) -> Result<(), ProjectionError> {
        if self.period == 0 || self.period > periods {
            return Err(ProjectionError::ValidationError(format!(
                "Intervention period must be in 1..={periods}, got {}",
                self.period
            )));
        }
        if !self.survival_fraction.is_finite() || !(0.0..=1.0).contains(&self.survival_fraction) {
            return Err(ProjectionError::ValidationError(format!(
                "Period {}: survival fraction must be in 0.0..=1.0, got {}",
                self.period, self.survival_fraction
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Intervention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.period, self.survival_fraction)
    }
}

impl From<(u32, f64)> for Intervention {
    fn from((period, survival_fraction): (u32, f64)) -> Self {
        Self::new(period, survival_fraction)
    }
}

/// Parses `PERIOD:FRACTION` (or `PERIOD,FRACTION`), e.g. `20:0.6`.
impl std::str::FromStr for Intervention {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (period, fraction) = s
            .trim()
            .split_once([':', ','])
            .ok_or_else(|| {
                ProjectionError::ParseError(format!(
                    "Invalid intervention '{s}': expected PERIOD:FRACTION"
                ))
            })?;

        let period = period.trim().parse::<u32>().map_err(|e| {
            ProjectionError::ParseError(format!("Invalid intervention period '{period}': {e}"))
        })?;
        let survival_fraction = fraction.trim().parse::<f64>().map_err(|e| {
            ProjectionError::ParseError(format!(
                "Invalid survival fraction '{fraction}': {e}"
            ))
        })?;

        Ok(Self {
            period,
            survival_fraction,
        })
    }
}
