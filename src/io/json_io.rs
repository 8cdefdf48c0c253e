use std::path::Path;

use crate::error::ProjectionError;
use crate::models::Scenario;
use crate::projection::Projection;

/// Read a scenario from a JSON file.
pub fn read_json(path: impl AsRef<Path>) -> Result<Scenario, ProjectionError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    Ok(scenario)
}

/// Read a scenario from JSON bytes.
pub fn read_json_from_bytes(data: &[u8]) -> Result<Scenario, ProjectionError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| ProjectionError::ParseError(format!("Invalid UTF-8: {e}")))?;
    Ok(serde_json::from_str(content)?)
}

/// Write a scenario to a JSON file.
pub fn write_json(
    scenario: &Scenario,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ProjectionError> {
    let content = if pretty {
        serde_json::to_string_pretty(scenario)?
    } else {
        serde_json::to_string(scenario)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

/// Write a full projection (inputs, applied interventions, both trajectories) as JSON.
pub fn write_trajectory_json(
    projection: &Projection,
    path: impl AsRef<Path>,
) -> Result<(), ProjectionError> {
    if !projection.has_trajectory() {
        return Err(ProjectionError::ValidationError(
            "Projection has no trajectory to export".to_string(),
        ));
    }
    let content = serde_json::to_string_pretty(projection)?;
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}
