use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use flipvar_core::SequenceRecord;

use crate::error::{FlipIoError, Result};

///
/// Read every record of a FASTA file.
///
/// # Arguments
/// - path: path to the FASTA file
///
/// # Errors
/// Fails when the file is missing or unreadable, when a record is malformed,
/// and when the file holds no record at all.
///
pub fn read_fasta<T: AsRef<Path>>(path: T) -> Result<Vec<SequenceRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FlipIoError::from_io(path, e))?;
    let reader = fasta::Reader::new(file);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FlipIoError::from_io(path, e))?;
        let sequence = String::from_utf8_lossy(record.seq());
        records.push(SequenceRecord::new(record.id(), record.desc(), &sequence));
    }

    if records.is_empty() {
        return Err(FlipIoError::NoRecords(path.to_path_buf()));
    }

    Ok(records)
}

pub trait FastaWrite {
    ///
    /// Write records to disk as a FASTA file, one sequence line per record.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_fasta<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl FastaWrite for [SequenceRecord] {
    fn write_fasta<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FlipIoError::from_io(path, e))?;
        let mut writer = fasta::Writer::new(file);

        for record in self {
            let sequence = record.sequence();
            writer
                .write(&record.id, record.description.as_deref(), sequence.as_bytes())
                .map_err(|e| FlipIoError::from_io(path, e))?;
        }

        writer.flush().map_err(|e| FlipIoError::from_io(path, e))
    }
}
