//! Two-column CSV export and import of sequences.
//!
//! Format: header `index,value`, then one row per element with a zero-based
//! index. Values are written in shortest round-trip form, so reading a file
//! back reproduces every `f64` bit for bit.
//!
//! ```text
//! index,value
//! 0,0.5227
//! 1,0.3215
//! ```

use prng_core::types::Sequence;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while exporting or importing a sequence.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unwritable CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row's index does not match its position.
    #[error("Row {position} has index {found}; indices must run 0, 1, 2, ...")]
    UnexpectedIndex {
        /// Zero-based row position
        position: usize,
        /// Index read from the row
        found: usize,
    },
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// One CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceRow {
    /// Zero-based position.
    pub index: usize,
    /// Generated value.
    pub value: f64,
}

/// Write `values` as CSV to any writer.
///
/// # Examples
/// ```
/// use prng_models::export::write_sequence;
///
/// let mut buffer = Vec::new();
/// write_sequence(&mut buffer, &[0.5227, 0.3215]).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "index,value\n0,0.5227\n1,0.3215\n");
/// ```
pub fn write_sequence<W: Write>(writer: W, values: &[f64]) -> ExportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if values.is_empty() {
        // serialize() only emits the header alongside the first row.
        csv_writer.write_record(["index", "value"])?;
    }
    for (index, &value) in values.iter().enumerate() {
        csv_writer.serialize(SequenceRow { index, value })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read a sequence written by [`write_sequence`].
///
/// # Errors
///
/// * `ExportError::Csv` - missing columns or unparsable values
/// * `ExportError::UnexpectedIndex` - rows out of order or with gaps
pub fn read_sequence<R: Read>(reader: R) -> ExportResult<Sequence> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut values = Vec::new();
    for (position, row) in csv_reader.deserialize::<SequenceRow>().enumerate() {
        let row = row?;
        if row.index != position {
            return Err(ExportError::UnexpectedIndex {
                position,
                found: row.index,
            });
        }
        values.push(row.value);
    }
    Ok(Sequence::new(values))
}

/// Export to a file, creating parent directories as needed.
pub fn export_sequence_csv(path: impl AsRef<Path>, values: &[f64]) -> ExportResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_sequence(File::create(path)?, values)?;
    info!(path = %path.display(), rows = values.len(), "exported sequence");
    Ok(())
}

/// Import from a file.
pub fn import_sequence_csv(path: impl AsRef<Path>) -> ExportResult<Sequence> {
    let path = path.as_ref();
    let sequence = read_sequence(File::open(path)?)?;
    info!(path = %path.display(), rows = sequence.len(), "imported sequence");
    Ok(sequence)
}
