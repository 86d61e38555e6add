use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Fatal errors raised while locating, detecting or decoding an input file.
///
/// Malformed records are never reported here: the scanner drops or truncates
/// them instead.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(
        "Cannot determine file type for {}: expected a .fa/.fasta/.fq/.fastq extension, \
        or a first line starting with '>' or '@'",
        .0.display()
    )]
    UnknownFormat(PathBuf),

    #[error("{} is not valid UTF-8 text", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("Unable to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SearchError {
    /// Wraps an I/O error for `path`, folding `ErrorKind::NotFound` into
    /// [`SearchError::NotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => SearchError::NotFound(path),
            _ => SearchError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn missing_file_is_not_found() {
        let err = SearchError::from_io("a.fa", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, SearchError::NotFound(_)));
        assert_eq!(err.to_string(), "File not found: a.fa");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = SearchError::from_io("a.fa", Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, SearchError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
