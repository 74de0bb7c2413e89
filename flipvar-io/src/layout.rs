use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{FASTA_FILE_EXTENSION, VARIANT_FILE_EXTENSION};
use crate::error::{FlipIoError, Result};

///
/// The four directories of a batch run. Files inside them are named
/// `<id>.var` and `<id>.fasta`.
///
#[derive(Debug, Clone)]
pub struct BatchLayout {
    pub variant_dir: PathBuf,
    pub fasta_dir: PathBuf,
    pub out_variant_dir: PathBuf,
    pub out_fasta_dir: PathBuf,
}

///
/// Input and output paths for a single sequence ID.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub id: String,
    pub in_variants: PathBuf,
    pub in_fasta: PathBuf,
    pub out_variants: PathBuf,
    pub out_fasta: PathBuf,
}

impl BatchLayout {
    pub fn new<T: AsRef<Path>>(
        variant_dir: T,
        fasta_dir: T,
        out_variant_dir: T,
        out_fasta_dir: T,
    ) -> Self {
        BatchLayout {
            variant_dir: variant_dir.as_ref().to_path_buf(),
            fasta_dir: fasta_dir.as_ref().to_path_buf(),
            out_variant_dir: out_variant_dir.as_ref().to_path_buf(),
            out_fasta_dir: out_fasta_dir.as_ref().to_path_buf(),
        }
    }

    pub fn item(&self, id: &str) -> BatchItem {
        BatchItem {
            id: id.to_string(),
            in_variants: file_path(&self.variant_dir, id, VARIANT_FILE_EXTENSION),
            in_fasta: file_path(&self.fasta_dir, id, FASTA_FILE_EXTENSION),
            out_variants: file_path(&self.out_variant_dir, id, VARIANT_FILE_EXTENSION),
            out_fasta: file_path(&self.out_fasta_dir, id, FASTA_FILE_EXTENSION),
        }
    }

    ///
    /// Create both output directories if they are missing.
    ///
    pub fn ensure_output_dirs(&self) -> Result<()> {
        ensure_dir(&self.out_variant_dir)?;
        ensure_dir(&self.out_fasta_dir)?;
        Ok(())
    }
}

// ids can contain dots (`P69905.2`), so the extension is appended rather than set
fn file_path(dir: &Path, id: &str, extension: &str) -> PathBuf {
    dir.join(format!("{id}.{extension}"))
}

///
/// Create a directory and its parents. An existing directory is left as is.
///
pub fn ensure_dir<T: AsRef<Path>>(path: T) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| FlipIoError::from_io(path, e))
}
