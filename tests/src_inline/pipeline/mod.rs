use std::cell::Cell;
use std::path::PathBuf;

use super::*;
use crate::model::profile::{FeatureVector, ProfileField, ReferenceRecord};
use crate::model::thresholds::Bucket;

fn raw() -> RawProfile {
    RawProfile {
        gre: 320,
        toefl: 110,
        university_rating: 4,
        sop: 4.0,
        lor: 4.0,
        cgpa: 9.0,
        research: Some(true),
    }
}

#[test]
fn test_score_without_reference() {
    let model = |_: &FeatureVector| 0.845;
    let pipeline = ScoringPipeline::new(&model, BucketThresholds::default_v1());
    let out = pipeline.score(&raw()).unwrap();
    assert_eq!(out.raw_prediction, 0.845);
    assert!((out.result.percentage - 84.5).abs() < 1e-9);
    assert_eq!(out.result.bucket, Bucket::High);
    assert!(out.nearest.is_none());
}

#[test]
fn test_validation_failure_skips_predictor() {
    let calls = Cell::new(0usize);
    let model = |_: &FeatureVector| {
        calls.set(calls.get() + 1);
        0.9
    };
    let pipeline = ScoringPipeline::new(&model, BucketThresholds::default_v1());
    let mut input = raw();
    input.cgpa = 0.0;

    match pipeline.score(&input) {
        Err(ScoringError::Validation(err)) => {
            assert_eq!(err.missing, vec![ProfileField::Cgpa]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_score_with_reference_table() {
    let model = |_: &FeatureVector| 0.55;
    let mut close = validate(&raw()).unwrap();
    close.cgpa = 8.9;
    let mut far = close;
    far.gre = 300;
    let table = ReferenceTable {
        source: PathBuf::from("ref.csv"),
        records: vec![
            ReferenceRecord {
                profile: far,
                outcome: 0.4,
            },
            ReferenceRecord {
                profile: close,
                outcome: 0.72,
            },
        ],
    };
    let pipeline =
        ScoringPipeline::new(&model, BucketThresholds::default_v1()).with_reference(&table);

    let out = pipeline.score(&raw()).unwrap();
    assert_eq!(out.result.bucket, Bucket::Moderate);
    let nearest = out.nearest.unwrap();
    assert_eq!(nearest.index, 1);
    assert!((nearest.outcome_percentage - 72.0).abs() < 1e-9);
}

#[test]
fn test_empty_reference_table_fails() {
    let model = |_: &FeatureVector| 0.55;
    let table = ReferenceTable {
        source: PathBuf::from("ref.csv"),
        records: Vec::new(),
    };
    let pipeline =
        ScoringPipeline::new(&model, BucketThresholds::default_v1()).with_reference(&table);
    assert!(matches!(
        pipeline.score(&raw()),
        Err(ScoringError::NearestMatch(NearestMatchError::EmptyTable))
    ));
}

#[test]
fn test_predictor_name_defaults_for_closures() {
    let model = |_: &FeatureVector| 0.1;
    let pipeline = ScoringPipeline::new(&model, BucketThresholds::default_v1());
    assert_eq!(pipeline.predictor_name(), "anonymous");
}
