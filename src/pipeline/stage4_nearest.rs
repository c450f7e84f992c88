use serde::Serialize;
use thiserror::Error;

use crate::input::ReferenceTable;
use crate::model::profile::{ApplicantProfile, ReferenceRecord};
use crate::report::round2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NearestMatchError {
    #[error("reference table is empty; cannot compute nearest match")]
    EmptyTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestMatch {
    pub index: usize,
    pub distance: f64,
    pub record: ReferenceRecord,
    pub outcome_percentage: f64,
}

pub fn run_stage4(
    profile: &ApplicantProfile,
    table: &ReferenceTable,
) -> Result<NearestMatch, NearestMatchError> {
    find_nearest(profile, &table.records)
}

/// Linear scan; a later record replaces the best only when strictly closer,
/// so ties resolve to the earliest record.
pub fn find_nearest(
    profile: &ApplicantProfile,
    records: &[ReferenceRecord],
) -> Result<NearestMatch, NearestMatchError> {
    let query = profile.features();
    let mut best: Option<(usize, f64)> = None;

    for (idx, record) in records.iter().enumerate() {
        let d = squared_distance(&query, &record.profile.features());
        match best {
            Some((_, best_d)) if d >= best_d || d.is_nan() => {}
            _ => best = Some((idx, d)),
        }
    }

    let (index, distance) = best.ok_or(NearestMatchError::EmptyTable)?;
    let record = records[index];
    Ok(NearestMatch {
        index,
        distance,
        record,
        outcome_percentage: round2(record.outcome * 100.0),
    })
}

pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_nearest.rs"]
mod tests;
