use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::input::InputError;
use crate::input::reader::{next_line, open_maybe_gz};
use crate::model::profile::{ApplicantProfile, ReferenceRecord};

#[derive(Debug, Clone)]
pub struct ReferenceTable {
    pub source: PathBuf,
    pub records: Vec<ReferenceRecord>,
}

impl ReferenceTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    gre: usize,
    toefl: usize,
    university_rating: usize,
    sop: usize,
    lor: usize,
    cgpa: usize,
    research: usize,
    outcome: usize,
}

const GRE: &[&str] = &["gre score", "gre"];
const TOEFL: &[&str] = &["toefl score", "toefl"];
const UNIVERSITY_RATING: &[&str] = &["university rating"];
const SOP: &[&str] = &["sop"];
const LOR: &[&str] = &["lor"];
const CGPA: &[&str] = &["cgpa"];
const RESEARCH: &[&str] = &["research"];
const OUTCOME: &[&str] = &["chance of admit", "admit"];

pub fn load_reference_table(path: &Path) -> Result<ReferenceTable, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    if !next_line(reader.as_mut(), &mut buf, path)? {
        return Err(InputError::Parse(format!(
            "dataset {} is empty",
            path.display()
        )));
    }
    let delimiter = detect_delimiter(&buf);
    let header_line = Cursor::new(std::mem::take(&mut buf).into_bytes());

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(header_line.chain(reader));

    let header: Vec<String> = rdr
        .headers()
        .map_err(|e| csv_error(&e, path))?
        .iter()
        .map(normalize_header)
        .collect();
    let columns = resolve_columns(&header, path)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| csv_error(&e, path))?;
        let line_no = row.position().map(|p| p.line() as usize).unwrap_or(0);
        let fields: Vec<&str> = row.iter().collect();
        records.push(parse_record(&fields, &columns, line_no)?);
    }

    crate::info!(
        "loaded {} reference records from {}",
        records.len(),
        path.display()
    );

    Ok(ReferenceTable {
        source: path.to_path_buf(),
        records,
    })
}

fn detect_delimiter(header: &str) -> u8 {
    if header.contains('\t') { b'\t' } else { b',' }
}

fn csv_error(err: &csv::Error, path: &Path) -> InputError {
    match err.position() {
        Some(pos) => InputError::Parse(format!(
            "dataset {} line {}: {}",
            path.display(),
            pos.line(),
            err
        )),
        None => InputError::Parse(format!("dataset {}: {}", path.display(), err)),
    }
}

pub fn normalize_header(raw: &str) -> String {
    let lowered = raw
        .trim_start_matches('\u{feff}')
        .trim()
        .to_ascii_lowercase()
        .replace('_', " ");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn resolve_columns(header: &[String], path: &Path) -> Result<ColumnIndex, InputError> {
    let find = |aliases: &[&str], column: &'static str| {
        header
            .iter()
            .position(|name| aliases.contains(&name.as_str()))
            .ok_or_else(|| InputError::MissingColumn {
                path: path.display().to_string(),
                column,
            })
    };
    Ok(ColumnIndex {
        gre: find(GRE, "GRE Score")?,
        toefl: find(TOEFL, "TOEFL Score")?,
        university_rating: find(UNIVERSITY_RATING, "University Rating")?,
        sop: find(SOP, "SOP")?,
        lor: find(LOR, "LOR")?,
        cgpa: find(CGPA, "CGPA")?,
        research: find(RESEARCH, "Research")?,
        outcome: find(OUTCOME, "Chance of Admit")?,
    })
}

fn parse_record(
    fields: &[&str],
    columns: &ColumnIndex,
    line_no: usize,
) -> Result<ReferenceRecord, InputError> {
    let profile = ApplicantProfile {
        gre: parse_int(fields, columns.gre, "GRE Score", line_no)?,
        toefl: parse_int(fields, columns.toefl, "TOEFL Score", line_no)?,
        university_rating: parse_int(
            fields,
            columns.university_rating,
            "University Rating",
            line_no,
        )?,
        sop: parse_float(fields, columns.sop, "SOP", line_no)?,
        lor: parse_float(fields, columns.lor, "LOR", line_no)?,
        cgpa: parse_float(fields, columns.cgpa, "CGPA", line_no)?,
        research: parse_flag(fields, columns.research, line_no)?,
    };
    let outcome = parse_float(fields, columns.outcome, "Chance of Admit", line_no)?;
    Ok(ReferenceRecord { profile, outcome })
}

fn cell<'a>(
    fields: &[&'a str],
    idx: usize,
    column: &str,
    line_no: usize,
) -> Result<&'a str, InputError> {
    fields.get(idx).copied().ok_or_else(|| {
        InputError::Parse(format!(
            "dataset line {} has no value for {}",
            line_no, column
        ))
    })
}

fn parse_int(
    fields: &[&str],
    idx: usize,
    column: &str,
    line_no: usize,
) -> Result<u32, InputError> {
    let raw = cell(fields, idx, column, line_no)?;
    if let Ok(v) = raw.parse::<u32>() {
        return Ok(v);
    }
    // Exported tables sometimes carry integer columns as "320.0".
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(v as u32),
        _ => Err(InputError::Parse(format!(
            "dataset line {}: invalid {} value '{}'",
            line_no, column, raw
        ))),
    }
}

fn parse_float(
    fields: &[&str],
    idx: usize,
    column: &str,
    line_no: usize,
) -> Result<f64, InputError> {
    let raw = cell(fields, idx, column, line_no)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::Parse(format!(
            "dataset line {}: invalid {} value '{}'",
            line_no, column, raw
        ))),
    }
}

fn parse_flag(fields: &[&str], idx: usize, line_no: usize) -> Result<bool, InputError> {
    let raw = cell(fields, idx, "Research", line_no)?;
    match raw.to_ascii_lowercase().as_str() {
        "1" | "1.0" | "yes" | "true" => Ok(true),
        "0" | "0.0" | "no" | "false" => Ok(false),
        _ => Err(InputError::Parse(format!(
            "dataset line {}: invalid Research value '{}'",
            line_no, raw
        ))),
    }
}
