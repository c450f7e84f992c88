use std::path::PathBuf;

use super::*;

fn parse(args: &[&str]) -> Result<RunConfig, clap::Error> {
    let argv = std::iter::once("admitpredict").chain(args.iter().copied());
    Cli::try_parse_from(argv).map(config_from_cli)
}

#[test]
fn test_parse_full_profile() {
    let config = parse(&[
        "predict",
        "--gre",
        "320",
        "--toefl",
        "110",
        "--university-rating",
        "4",
        "--sop",
        "4.0",
        "--lor",
        "4.5",
        "--cgpa",
        "9.0",
        "--research",
        "yes",
        "--model",
        "model.json",
    ])
    .unwrap();
    assert_eq!(
        config.profile,
        RawProfile {
            gre: 320,
            toefl: 110,
            university_rating: 4,
            sop: 4.0,
            lor: 4.5,
            cgpa: 9.0,
            research: Some(true),
        }
    );
    assert_eq!(config.model_path, PathBuf::from("model.json"));
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.dataset_path.is_none());
    assert!(config.out_dir.is_none());
}

#[test]
fn test_omitted_fields_use_sentinels() {
    let config = parse(&["predict", "--model", "m.json", "--format", "json"]).unwrap();
    assert_eq!(config.profile, RawProfile::default());
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_research_no() {
    let config = parse(&["predict", "--model", "m.json", "--research", "no"]).unwrap();
    assert_eq!(config.profile.research, Some(false));
}

#[test]
fn test_dataset_and_out() {
    let config = parse(&[
        "predict",
        "--model",
        "m.json",
        "--dataset",
        "data.csv",
        "--out",
        "out",
    ])
    .unwrap();
    assert_eq!(config.dataset_path, Some(PathBuf::from("data.csv")));
    assert_eq!(config.out_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_widget_ranges_enforced() {
    assert!(parse(&["predict", "--model", "m.json", "--gre", "250"]).is_err());
    assert!(parse(&["predict", "--model", "m.json", "--toefl", "121"]).is_err());
    assert!(parse(&["predict", "--model", "m.json", "--university-rating", "6"]).is_err());
    assert!(parse(&["predict", "--model", "m.json", "--sop", "4.2"]).is_err());
    assert!(parse(&["predict", "--model", "m.json", "--lor", "0.5"]).is_err());
    assert!(parse(&["predict", "--model", "m.json", "--cgpa", "10.5"]).is_err());
    assert!(parse(&["predict", "--model", "m.json", "--research", "maybe"]).is_err());
}

#[test]
fn test_model_is_required() {
    assert!(parse(&["predict", "--gre", "320"]).is_err());
}

#[test]
fn test_rating_parser() {
    assert_eq!(parse_half_step_rating("3.5").unwrap(), 3.5);
    assert_eq!(parse_half_step_rating("5").unwrap(), 5.0);
    assert!(parse_half_step_rating("x").is_err());
    assert_eq!(parse_cgpa("0").unwrap(), 0.0);
}

#[test]
fn test_logging_init_is_repeatable() {
    logging::init();
    logging::init();
}
