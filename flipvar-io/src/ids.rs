use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{FlipIoError, Result};

///
/// Read the list of sequence IDs to process, one per line.
///
/// Surrounding whitespace is stripped and blank lines are ignored; the order
/// of the file is kept.
///
/// # Arguments
/// - path: path to the ID list
///
pub fn read_sequence_ids<T: AsRef<Path>>(path: T) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FlipIoError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| FlipIoError::from_io(path, e))?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }

    Ok(ids)
}
