use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::SearchError;

/// Enum representing the supported record layouts.
#[derive(clap::ValueEnum, Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// `>header` followed by a single sequence line
    Fasta,

    /// `@header`, sequence, `+` separator and quality line
    Fastq,
}

impl FileFormat {
    /// The character every header line of this format starts with.
    pub fn marker(&self) -> char {
        match self {
            FileFormat::Fasta => '>',
            FileFormat::Fastq => '@',
        }
    }

    /// Number of physical lines a single record occupies.
    pub fn stride(&self) -> usize {
        match self {
            FileFormat::Fasta => 2,
            FileFormat::Fastq => 4,
        }
    }

    /// Offset of the quality line relative to the header, if the format has one.
    pub fn quality_offset(&self) -> Option<usize> {
        match self {
            FileFormat::Fasta => None,
            FileFormat::Fastq => Some(3),
        }
    }

    /// Classifies a path by its extension, ignoring case.
    pub fn from_extension(path: &Path) -> Option<FileFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "fa" | "fasta" => Some(FileFormat::Fasta),
            "fq" | "fastq" => Some(FileFormat::Fastq),
            _ => None,
        }
    }

    /// Classifies the first line of a file by its leading marker. Leading
    /// whitespace is ignored.
    pub fn sniff(first_line: &[u8]) -> Option<FileFormat> {
        match first_line.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'>') => Some(FileFormat::Fasta),
            Some(b'@') => Some(FileFormat::Fastq),
            _ => None,
        }
    }

    /// Determines the format of the file at `path`.
    ///
    /// The extension is tried first. Only when it is not recognised is the
    /// first line of the file read and sniffed.
    ///
    /// # Errors
    ///
    /// * [`SearchError::NotFound`] if the file does not exist and has to be opened.
    /// * [`SearchError::UnknownFormat`] if neither rule identifies the file.
    pub fn detect(path: &Path) -> Result<FileFormat, SearchError> {
        if let Some(format) = FileFormat::from_extension(path) {
            debug!("Detected {format} from the extension of {}", path.display());
            return Ok(format);
        }

        let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
        let mut reader = BufReader::new(file);

        let mut first_line = Vec::new();
        reader
            .read_until(b'\n', &mut first_line)
            .map_err(|e| SearchError::from_io(path, e))?;

        let format = FileFormat::sniff(&first_line)
            .ok_or_else(|| SearchError::UnknownFormat(path.to_path_buf()))?;
        debug!("Detected {format} from the first line of {}", path.display());
        Ok(format)
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Fasta => write!(f, "FASTA"),
            FileFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}
