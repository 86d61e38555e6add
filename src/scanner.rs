//! Line-oriented record scanner for FASTA and FASTQ text.
//!
//! Records are produced lazily from a single pass over the buffer. Each
//! [`Record`] borrows its text from the buffer, so nothing is copied until the
//! caller decides to.

use memchr::memchr;
use serde::Serialize;

use crate::format::FileFormat;

/// A single record as found in the input.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// 1-based line number of the header line
    pub line_number: usize,
    /// The header line, without its leading `>` or `@`
    pub header: &'a str,
    pub sequence: &'a str,
    /// Only present for FASTQ records which have a quality line
    pub quality: Option<&'a str>,
}

/// Walks a buffer one `\n`-terminated line at a time, counting lines as it goes.
///
/// A final line without a trailing newline is still returned. A trailing
/// newline does not produce an extra empty line.
struct LineCursor<'a> {
    text: &'a str,
    pos: usize,
    lines: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            lines: 0,
        }
    }

    /// Number of lines consumed so far.
    fn lines(&self) -> usize {
        self.lines
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];
        // '\n' is ASCII, so slicing at its position stays on a char boundary
        let line = match memchr(b'\n', rest.as_bytes()) {
            Some(i) => {
                self.pos += i + 1;
                &rest[..i]
            }
            None => {
                self.pos = self.text.len();
                rest
            }
        };

        self.lines += 1;
        Some(line)
    }
}

/// Iterator over every record in a buffer. Created by [`scan`].
pub struct Records<'a> {
    cursor: LineCursor<'a>,
    format: FileFormat,
}

impl<'a> Records<'a> {
    /// Consumes the lines following a header and builds the record from them.
    ///
    /// Exactly `stride - 1` lines are consumed when available, so the cursor
    /// always lands on the line after the record regardless of what is emitted.
    fn read_body(&mut self, line_number: usize, header: &'a str) -> Option<Record<'a>> {
        // body[k] holds line (header + 1 + k)
        let mut body: [Option<&'a str>; 3] = [None; 3];
        for slot in body.iter_mut().take(self.format.stride() - 1) {
            *slot = self.cursor.next_line();
        }

        // a header with nothing after it is dropped
        let sequence = body[0]?.trim();
        let quality = self
            .format
            .quality_offset()
            .and_then(|offset| body[offset - 1])
            .map(str::trim);

        Some(Record {
            line_number,
            header,
            sequence,
            quality,
        })
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let marker = self.format.marker();

        while let Some(line) = self.cursor.next_line() {
            let line = line.trim();

            // blank lines and stray non-header lines are skipped one at a time
            let Some(header) = line.strip_prefix(marker) else {
                continue;
            };

            let line_number = self.cursor.lines();
            if let Some(record) = self.read_body(line_number, header) {
                return Some(record);
            }
        }

        None
    }
}

impl std::iter::FusedIterator for Records<'_> {}

/// Returns every record in `text`, in file order, without any filtering.
///
/// # Example
///
/// ```
/// use seqsearch::{format::FileFormat, scanner::scan};
///
/// let records: Vec<_> = scan(">seq1\nACGT\n", FileFormat::Fasta).collect();
/// assert_eq!(records[0].header, "seq1");
/// assert_eq!(records[0].line_number, 1);
/// ```
pub fn scan(text: &str, format: FileFormat) -> Records<'_> {
    Records {
        cursor: LineCursor::new(text),
        format,
    }
}
