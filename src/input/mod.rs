use thiserror::Error;

pub mod dataset;
pub mod model_file;
pub mod reader;

pub use dataset::{ReferenceTable, load_reference_table};
pub use model_file::load_linear_model;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing column '{column}' in {path}")]
    MissingColumn { path: String, column: &'static str },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
