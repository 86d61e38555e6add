use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::error::SearchError;
use crate::format::FileFormat;
use crate::io::{write_results, MappedFile, OutputStyle};
use crate::matcher;

/// Statistics describing a single search, logged once it completes.
#[derive(Serialize, Debug, Default)]
pub struct SearchSummary {
    pub file_path: String,
    pub format: Option<FileFormat>,
    pub needle: String,
    pub records_scanned: usize,
    pub matches: usize,
    pub bytes: usize,
    pub elapsed: f64,
}

/// Searches `input` for records whose header contains `needle`, and writes the
/// matches to `writer`.
///
/// # Arguments
///
/// * `input` - Path to a FASTA or FASTQ file.
/// * `needle` - Substring to look for in each header. An empty needle matches all records.
/// * `format` - Overrides format detection when `Some`.
/// * `writer` - Destination for the results.
/// * `style` - Whether to write text blocks or JSON lines.
///
/// # Errors
///
/// Fails without writing anything if the file does not exist, its format
/// cannot be determined, or it is not valid UTF-8.
pub fn search(
    input: &str,
    needle: &str,
    format: Option<FileFormat>,
    writer: &mut impl Write,
    style: OutputStyle,
) -> Result<SearchSummary> {
    // time everything!
    let now = std::time::Instant::now();
    let path = Path::new(input);

    // existence is checked before detection, which may never touch the file
    if !path.exists() {
        return Err(SearchError::NotFound(path.to_path_buf()).into());
    }

    let format = match format {
        Some(f) => {
            info!("Using specified format: {f}");
            f
        }
        None => {
            let f = FileFormat::detect(path)?;
            info!("Detected format {f}");
            f
        }
    };

    let mapped = MappedFile::open(path)?;
    let text = mapped.text()?;

    let mut summary = SearchSummary {
        file_path: input.to_string(),
        format: Some(format),
        needle: needle.to_string(),
        bytes: mapped.bytes().len(),
        ..SearchSummary::default()
    };

    // collect everything before writing, so a failure never leaves partial output
    let mut records = Vec::new();
    for rec in crate::scanner::scan(text, format) {
        summary.records_scanned += 1;
        if matcher::matches(&rec, needle) {
            records.push(rec);
        }
    }
    summary.matches = records.len();

    write_results(writer, &records, needle, style)
        .with_context(|| format!("Unable to write results for {input}"))?;
    writer.flush()?;

    summary.elapsed = now.elapsed().as_secs_f64();
    info!(
        "Stats: {} records scanned, {} matches, {:.3}s runtime",
        summary.records_scanned, summary.matches, summary.elapsed
    );
    debug!("{}", serde_json::to_string(&summary)?);

    Ok(summary)
}
