mod csv_io;
mod json_io;
mod toml_io;

use std::path::Path;

use crate::error::ProjectionError;
use crate::models::Scenario;

pub use csv_io::{read_interventions_csv, read_interventions_csv_from_bytes, write_trajectory_csv};
pub use json_io::{read_json, read_json_from_bytes, write_json, write_trajectory_json};
pub use toml_io::{read_toml, read_toml_from_bytes, write_toml};

/// Trait for reading a scenario from a file.
pub trait ScenarioReader {
    fn read(&self, path: &Path) -> Result<Scenario, ProjectionError>;
}

/// Trait for writing a scenario to a file.
pub trait ScenarioWriter {
    fn write(&self, scenario: &Scenario, path: &Path) -> Result<(), ProjectionError>;
}

/// TOML format reader/writer.
pub struct TomlFormat;

impl ScenarioReader for TomlFormat {
    fn read(&self, path: &Path) -> Result<Scenario, ProjectionError> {
        read_toml(path)
    }
}

impl ScenarioWriter for TomlFormat {
    fn write(&self, scenario: &Scenario, path: &Path) -> Result<(), ProjectionError> {
        write_toml(scenario, path)
    }
}

/// JSON format reader/writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ScenarioReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<Scenario, ProjectionError> {
        read_json(path)
    }
}

impl ScenarioWriter for JsonFormat {
    fn write(&self, scenario: &Scenario, path: &Path) -> Result<(), ProjectionError> {
        write_json(scenario, path, self.pretty)
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Read a scenario, choosing the format from the file extension.
pub fn read_scenario(path: impl AsRef<Path>) -> Result<Scenario, ProjectionError> {
    let path = path.as_ref();
    let reader: Box<dyn ScenarioReader> = match extension(path).as_str() {
        "toml" => Box::new(TomlFormat),
        "json" => Box::new(JsonFormat::default()),
        ext => {
            return Err(ProjectionError::UnsupportedFormat(format!(
                ".{ext}. Use .toml or .json"
            )))
        }
    };
    let scenario = reader.read(path)?;
    tracing::debug!(
        path = %path.display(),
        name = %scenario.name,
        interventions = scenario.interventions.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Write a scenario, choosing the format from the file extension.
pub fn write_scenario(scenario: &Scenario, path: impl AsRef<Path>) -> Result<(), ProjectionError> {
    let path = path.as_ref();
    let writer: Box<dyn ScenarioWriter> = match extension(path).as_str() {
        "toml" => Box::new(TomlFormat),
        "json" => Box::new(JsonFormat { pretty: true }),
        ext => {
            return Err(ProjectionError::UnsupportedFormat(format!(
                ".{ext}. Use .toml or .json"
            )))
        }
    };
    writer.write(scenario, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_trait_roundtrip() {
        let scenario = Scenario::demo();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");

        let writer: &dyn ScenarioWriter = &TomlFormat;
        writer.write(&scenario, &path).unwrap();

        let reader: &dyn ScenarioReader = &TomlFormat;
        let loaded = reader.read(&path).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_json_trait_roundtrip() {
        let scenario = Scenario::demo();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");

        let writer: &dyn ScenarioWriter = &JsonFormat { pretty: true };
        writer.write(&scenario, &path).unwrap();

        let reader: &dyn ScenarioReader = &JsonFormat::default();
        let loaded = reader.read(&path).unwrap();
        assert_eq!(loaded.interventions, scenario.interventions);
    }

    #[test]
    fn test_json_format_default() {
        let fmt = JsonFormat::default();
        assert!(!fmt.pretty);
    }

    #[test]
    fn test_dispatch_by_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.TOML");
        write_scenario(&Scenario::demo(), &path).unwrap();
        assert_eq!(read_scenario(&path).unwrap(), Scenario::demo());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        let err = write_scenario(&Scenario::demo(), &path).unwrap_err();
        assert!(matches!(err, ProjectionError::UnsupportedFormat(_)));
        let err = read_scenario(&path).unwrap_err();
        assert!(matches!(err, ProjectionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_scenario("/nonexistent/scenario.toml").unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }
}
