use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::profile::{ApplicantProfile, ReferenceRecord};
use crate::model::thresholds::{Bucket, BucketThresholds};
use crate::pipeline::stage3_classify::run_stage3;
use crate::pipeline::stage4_nearest::NearestMatch;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("admitpredict_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn profile() -> ApplicantProfile {
    ApplicantProfile {
        gre: 320,
        toefl: 110,
        university_rating: 4,
        sop: 4.0,
        lor: 4.0,
        cgpa: 9.0,
        research: true,
    }
}

fn outcome(with_nearest: bool) -> ScoringOutcome {
    let nearest = with_nearest.then(|| {
        let mut p = profile();
        p.cgpa = 8.8;
        NearestMatch {
            index: 6,
            distance: 0.04,
            record: ReferenceRecord {
                profile: p,
                outcome: 0.8,
            },
            outcome_percentage: 80.0,
        }
    });
    ScoringOutcome {
        profile: profile(),
        raw_prediction: 0.845,
        result: run_stage3(0.845, &BucketThresholds::default_v1()),
        nearest,
    }
}

fn context(outcome: &ScoringOutcome) -> ReportContext {
    build_report_context(&Stage5Input {
        outcome,
        model_name: "ols-v1".to_string(),
        dataset: outcome.nearest.map(|_| "admissions.csv".to_string()),
        tool_name: "admitpredict".to_string(),
        tool_version: "0.1.0".to_string(),
    })
}

#[test]
fn test_context_carries_bucket_tokens() {
    let out = outcome(false);
    let ctx = context(&out);
    assert_eq!(ctx.bucket, Bucket::High);
    assert_eq!(ctx.color, "green");
    assert_eq!(ctx.percent_label, "84.5");
    assert_eq!(ctx.message, "Possible! You have a strong chance with 84.5%.");
    assert!(ctx.comparison.is_none());
    assert_eq!(headline(&ctx), "84.5% (High, green)");
}

#[test]
fn test_text_report_without_dataset() {
    let out = outcome(false);
    let text = render(&context(&out), OutputFormat::Text).unwrap();
    assert!(text.contains("Predicted Chance of Admission: 84.5%"));
    assert!(text.contains("SUCCESS: Possible! You have a strong chance with 84.5%."));
    assert!(text.contains("] green"));
    assert!(!text.contains("Nearest Match"));
}

#[test]
fn test_text_report_with_comparison() {
    let out = outcome(true);
    let text = render(&context(&out), OutputFormat::Text).unwrap();
    assert!(text.contains("Dataset: admissions.csv"));
    assert!(text.contains("Row: 7 (squared distance 0.04)"));
    assert!(text.contains("Observed Chance of Admission: 80.0%"));
    assert!(text.contains("Model Prediction"));
    assert!(text.contains("Nearest Match"));
}

#[test]
fn test_json_summary_fields() {
    let out = outcome(true);
    let json = render(&context(&out), OutputFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["tool"]["name"], "admitpredict");
    assert_eq!(v["prediction"]["bucket"], "High");
    assert_eq!(v["prediction"]["color"], "green");
    assert_eq!(v["prediction"]["severity"], "success");
    assert_eq!(v["prediction"]["percentage"], 84.5);
    assert_eq!(v["input"]["research"], true);
    assert_eq!(v["nearest_match"]["row"], 7);
    assert_eq!(v["nearest_match"]["outcome_percentage"], 80.0);
    assert_eq!(v["comparison"]["bars"][1]["label"], "Nearest Match");
}

#[test]
fn test_json_summary_omits_nearest_without_dataset() {
    let out = outcome(false);
    let json = render(&context(&out), OutputFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(v.get("nearest_match").is_none());
    assert!(v.get("comparison").is_none());
}

#[test]
fn test_write_reports_files() {
    let dir = make_temp_dir().join("out");
    let out = outcome(true);
    write_reports(&context(&out), &dir).unwrap();

    assert!(dir.join("report.txt").exists());
    assert!(dir.join("prediction.json").exists());
    let tsv = std::fs::read_to_string(dir.join("comparison.tsv")).unwrap();
    assert_eq!(
        tsv,
        "series\tpercentage\nModel Prediction\t84.50\nNearest Match\t80.00\n"
    );
}

#[test]
fn test_write_reports_skips_comparison_without_dataset() {
    let dir = make_temp_dir();
    let out = outcome(false);
    write_reports(&context(&out), &dir).unwrap();
    assert!(dir.join("report.txt").exists());
    assert!(!dir.join("comparison.tsv").exists());
}
