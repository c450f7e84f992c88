use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads one line into `buf`, returning `false` at end of input.
pub fn next_line(
    reader: &mut dyn BufRead,
    buf: &mut String,
    path: &Path,
) -> Result<bool, InputError> {
    buf.clear();
    let read = reader.read_line(buf).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(read > 0)
}
