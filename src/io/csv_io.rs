use std::io::Read;
use std::path::Path;

use crate::error::ProjectionError;
use crate::models::Intervention;
use crate::projection::Projection;

/// CSV row structure for an exported trajectory.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct TrajectoryRow {
    period: u32,
    population: f64,
    baseline: f64,
    survival_fraction: Option<f64>,
}

fn parse_intervention_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<Vec<Intervention>, ProjectionError> {
    let mut interventions = Vec::new();
    for result in rdr.deserialize() {
        let iv: Intervention = result?;
        interventions.push(iv);
    }
    Ok(interventions)
}

fn intervention_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

/// Read an intervention schedule from a CSV file with
/// `period,survival_fraction` columns. Row order is preserved.
pub fn read_interventions_csv(path: impl AsRef<Path>) -> Result<Vec<Intervention>, ProjectionError> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_intervention_records(&mut intervention_reader(file))
}

/// Read an intervention schedule from CSV bytes.
pub fn read_interventions_csv_from_bytes(data: &[u8]) -> Result<Vec<Intervention>, ProjectionError> {
    parse_intervention_records(&mut intervention_reader(data))
}

/// Write the per-period trajectory, with its baseline, to a CSV file.
pub fn write_trajectory_csv(
    projection: &Projection,
    path: impl AsRef<Path>,
) -> Result<(), ProjectionError> {
    if !projection.has_trajectory() {
        return Err(ProjectionError::ValidationError(
            "Projection has no trajectory to export".to_string(),
        ));
    }
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    for (snap, base) in projection.trajectory.iter().zip(&projection.baseline) {
        wtr.serialize(TrajectoryRow {
            period: snap.period,
            population: snap.population,
            baseline: base.population,
            survival_fraction: snap.applied_survival,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
