mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::{load_linear_model, load_reference_table};
use crate::model::profile::RawProfile;
use crate::model::thresholds::BucketThresholds;
use crate::pipeline::ScoringPipeline;
use crate::pipeline::stage5_report::{
    OutputFormat, Stage5Input, build_report_context, headline, render, write_reports,
};

#[derive(Parser, Debug)]
#[command(name = "admitpredict", version)]
#[command(about = "Predict graduate admission chance from an applicant profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one applicant profile
    Predict(PredictArgs),
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// GRE score (260-340)
    #[arg(long, value_parser = clap::value_parser!(u32).range(260..=340))]
    gre: Option<u32>,

    /// TOEFL score (0-120)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=120))]
    toefl: Option<u32>,

    /// University rating (1-5)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5))]
    university_rating: Option<u32>,

    /// Statement of purpose strength (1-5, half steps)
    #[arg(long, value_parser = parse_half_step_rating)]
    sop: Option<f64>,

    /// Letter of recommendation strength (1-5, half steps)
    #[arg(long, value_parser = parse_half_step_rating)]
    lor: Option<f64>,

    /// CGPA out of 10
    #[arg(long, value_parser = parse_cgpa)]
    cgpa: Option<f64>,

    /// Research experience
    #[arg(long, value_enum)]
    research: Option<ResearchArg>,

    /// Linear model weights (JSON)
    #[arg(long)]
    model: PathBuf,

    /// Reference dataset for nearest-record comparison (CSV/TSV, optionally .gz)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Write report.txt, prediction.json and comparison.tsv into this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Stdout format when --out is not given
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResearchArg {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone)]
struct RunConfig {
    profile: RawProfile,
    model_path: PathBuf,
    dataset_path: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    format: OutputFormat,
}

fn main() {
    logging::init();
    let config = config_from_cli(Cli::parse());
    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), String> {
    let model = load_linear_model(&config.model_path).map_err(|e| e.to_string())?;
    let reference = match &config.dataset_path {
        Some(path) => Some(load_reference_table(path).map_err(|e| e.to_string())?),
        None => None,
    };

    let mut pipeline = ScoringPipeline::new(&model, BucketThresholds::default_v1());
    if let Some(table) = &reference {
        if table.is_empty() {
            crate::warn!("reference dataset {} has no rows", table.source.display());
        } else {
            crate::info!("nearest match enabled over {} records", table.len());
        }
        pipeline = pipeline.with_reference(table);
    }

    let outcome = pipeline.score(&config.profile).map_err(|e| e.to_string())?;

    let ctx = build_report_context(&Stage5Input {
        outcome: &outcome,
        model_name: pipeline.predictor_name().to_string(),
        dataset: config
            .dataset_path
            .as_ref()
            .map(|p| p.display().to_string()),
        tool_name: "admitpredict".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    });
    crate::info!("prediction: {}", headline(&ctx));

    match &config.out_dir {
        Some(dir) => write_reports(&ctx, dir).map_err(|e| e.to_string())?,
        None => {
            let rendered = render(&ctx, config.format).map_err(|e| e.to_string())?;
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

impl From<PredictArgs> for RunConfig {
    fn from(args: PredictArgs) -> Self {
        Self {
            profile: RawProfile {
                gre: args.gre.unwrap_or(0),
                toefl: args.toefl.unwrap_or(0),
                university_rating: args.university_rating.unwrap_or(0),
                sop: args.sop.unwrap_or(0.0),
                lor: args.lor.unwrap_or(0.0),
                cgpa: args.cgpa.unwrap_or(0.0),
                research: args.research.map(|r| r == ResearchArg::Yes),
            },
            model_path: args.model,
            dataset_path: args.dataset,
            out_dir: args.out,
            format: match args.format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            },
        }
    }
}

fn config_from_cli(cli: Cli) -> RunConfig {
    match cli.command {
        Command::Predict(args) => RunConfig::from(args),
    }
}

fn parse_half_step_rating(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !(1.0..=5.0).contains(&v) {
        return Err(format!("{v} is not in 1.0..=5.0"));
    }
    if (v * 2.0).fract() != 0.0 {
        return Err(format!("{v} is not a multiple of 0.5"));
    }
    Ok(v)
}

fn parse_cgpa(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !(0.0..=10.0).contains(&v) {
        return Err(format!("{v} is not in 0.0..=10.0"));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
