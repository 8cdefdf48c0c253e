use std::path::Path;

use crate::error::ProjectionError;
use crate::models::Scenario;

/// Read a scenario from a TOML file.
pub fn read_toml(path: impl AsRef<Path>) -> Result<Scenario, ProjectionError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

/// Read a scenario from TOML bytes.
pub fn read_toml_from_bytes(data: &[u8]) -> Result<Scenario, ProjectionError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| ProjectionError::ParseError(format!("Invalid UTF-8: {e}")))?;
    Ok(toml::from_str(content)?)
}

/// Write a scenario to a TOML file.
pub fn write_toml(scenario: &Scenario, path: impl AsRef<Path>) -> Result<(), ProjectionError> {
    let content = toml::to_string_pretty(scenario)?;
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intervention;

    #[test]
    fn test_toml_roundtrip() {
        let scenario = Scenario::demo();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        write_toml(&scenario, &path).unwrap();
        let loaded = read_toml(&path).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_toml_without_interventions() {
        let s = read_toml_from_bytes(b"initial_population = 3.0\ngrowth_rate = -0.1\nperiods = 4\n")
            .unwrap();
        assert_eq!(s.periods, 4);
        assert!(s.interventions.is_empty());
    }

    #[test]
    fn test_toml_inline_interventions() {
        let s = read_toml_from_bytes(
            br#"
initial_population = 10.0
growth_rate = 0.03
periods = 52
interventions = [
  { period = 40, survival_fraction = 0.8 },
  { period = 20, survival_fraction = 0.6 },
]
"#,
        )
        .unwrap();
        assert_eq!(
            s.interventions,
            vec![Intervention::new(40, 0.8), Intervention::new(20, 0.6)]
        );
    }

    #[test]
    fn test_toml_negative_periods_rejected() {
        let err = read_toml_from_bytes(b"initial_population = 1.0\ngrowth_rate = 0.1\nperiods = -3\n")
            .unwrap_err();
        assert!(matches!(err, ProjectionError::Toml(_)));
    }
}
