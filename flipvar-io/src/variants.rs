use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flipvar_core::{Variant, VariantSet};

use crate::error::{FlipIoError, Result};

///
/// Read a variant file: one `<from><position><to>` line per variant.
///
/// Whitespace around each line is stripped and blank lines are skipped. The
/// first malformed line fails the whole file.
///
/// # Arguments
/// - path: path to the `.var` file
///
pub fn read_variants<T: AsRef<Path>>(path: T) -> Result<VariantSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FlipIoError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let mut variants = VariantSet::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FlipIoError::from_io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let variant = line
            .parse::<Variant>()
            .map_err(|source| FlipIoError::Variant {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })?;
        variants.push(variant);
    }

    if variants.is_empty() {
        return Err(FlipIoError::NoVariants(path.to_path_buf()));
    }

    Ok(variants)
}

pub trait VariantWrite {
    ///
    /// Write variants to disk, one notation line each, in order.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_variants<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl VariantWrite for VariantSet {
    fn write_variants<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FlipIoError::from_io(path, e))?;
        let mut writer = BufWriter::new(file);

        for variant in self {
            writeln!(writer, "{}", variant).map_err(|e| FlipIoError::from_io(path, e))?;
        }

        writer.flush().map_err(|e| FlipIoError::from_io(path, e))
    }
}
