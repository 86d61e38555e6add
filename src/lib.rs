//! Find FASTA and FASTQ records whose header contains a given substring.
//!
//! The pipeline is `format::FileFormat::detect` → `io::MappedFile` →
//! `scanner::scan` → `matcher::filter`, driven end to end by `search::search`.

#[macro_use]
extern crate log;

pub mod cli;
pub mod error;
pub mod format;
pub mod io;
pub mod matcher;
pub mod scanner;
pub mod search;
