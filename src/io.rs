use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::SearchError;
use crate::scanner::Record;

const SEPARATOR_WIDTH: usize = 50;

/// How matching records are written out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputStyle {
    /// Human-readable blocks, one per record
    Text,
    /// One JSON object per line
    Json,
}

/// A read-only memory map of an input file.
///
/// Empty files are not mapped at all and behave as an empty buffer.
pub struct MappedFile {
    path: PathBuf,
    mmap: Option<Mmap>,
}

impl MappedFile {
    /// Opens and maps the file at `path`.
    ///
    /// # Errors
    ///
    /// * [`SearchError::NotFound`] if the file does not exist.
    /// * [`SearchError::Io`] if it cannot be opened, inspected or mapped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| SearchError::from_io(path, e))?
            .len();

        // SAFETY: the map is read-only and the file is not expected to be
        // modified while a search is running
        let mmap = match len {
            0 => None,
            _ => Some(unsafe { Mmap::map(&file) }.map_err(|e| SearchError::from_io(path, e))?),
        };

        debug!("Mapped {} ({len} bytes)", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// The whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Decode`] if any part of the file is not valid UTF-8.
    pub fn text(&self) -> Result<&str, SearchError> {
        std::str::from_utf8(self.bytes()).map_err(|source| SearchError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes a single record as a human-readable block, followed by a separator line.
///
/// # Arguments
///
/// * `writer` - Any `std::io::Write`. A `std::io::Cursor` or `Vec<u8>` works for testing.
/// * `record` - The record to describe. The quality line is only written when
///   the record has a non-empty quality string.
pub fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(writer, "Line number: {}", record.line_number)?;
    writeln!(writer, "Sequence name: {}", record.header)?;
    writeln!(writer, "Sequence data: {}", record.sequence)?;
    if let Some(quality) = record.quality.filter(|q| !q.is_empty()) {
        writeln!(writer, "Quality scores: {quality}")?;
    }
    writeln!(writer, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// Writes every match for `needle` in the requested style.
///
/// In text mode this includes the summary heading, or the "No sequences found"
/// message when `records` is empty. JSON mode writes only the records.
pub fn write_results(
    writer: &mut impl Write,
    records: &[Record],
    needle: &str,
    style: OutputStyle,
) -> anyhow::Result<()> {
    match style {
        OutputStyle::Text => {
            if records.is_empty() {
                writeln!(writer, "No sequences found containing '{needle}'")?;
                return Ok(());
            }

            writeln!(
                writer,
                "Found {} sequence(s) containing '{needle}':\n",
                records.len()
            )?;
            for record in records {
                write_record(writer, record)?;
            }
        }
        OutputStyle::Json => {
            for record in records {
                serde_json::to_writer(&mut *writer, record)?;
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}
