use crate::format::FileFormat;
use crate::scanner::{scan, Record};

/// Whether the header of `record` contains `needle`, literally and case-sensitively.
pub fn matches(record: &Record, needle: &str) -> bool {
    record.header.contains(needle)
}

/// Keeps only the records whose header contains `needle`, preserving order.
///
/// An empty needle keeps every record.
pub fn filter<'t, 'n>(
    records: impl Iterator<Item = Record<'t>> + 'n,
    needle: &'n str,
) -> impl Iterator<Item = Record<'t>> + 'n {
    records.filter(move |rec| matches(rec, needle))
}

/// Scans `text` and returns the records whose header contains `needle`.
///
/// Equivalent to `filter(scan(text, format), needle)`.
pub fn search<'t: 'n, 'n>(
    text: &'t str,
    format: FileFormat,
    needle: &'n str,
) -> impl Iterator<Item = Record<'t>> + 'n {
    filter(scan(text, format), needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FASTA: &str = ">seq1\nACGT\n>seq2\nTTTT\n>other seq12\nGGGG\n";
    const FASTQ: &str = "@r1\nACGT\n+\nFFFF\n@r2\nGGGG\n+\nEEEE\n";

    #[test]
    fn single_fasta_match() {
        let hits: Vec<_> = search(">seq1\nACGT\n>seq2\nTTTT\n", FileFormat::Fasta, "seq1").collect();
        assert_eq!(
            hits,
            vec![Record {
                line_number: 1,
                header: "seq1",
                sequence: "ACGT",
                quality: None,
            }]
        );
    }

    #[test]
    fn single_fastq_match() {
        let hits: Vec<_> = search(FASTQ, FileFormat::Fastq, "r2").collect();
        assert_eq!(
            hits,
            vec![Record {
                line_number: 5,
                header: "r2",
                sequence: "GGGG",
                quality: Some("EEEE"),
            }]
        );
    }

    #[test]
    fn substring_anywhere_in_header() {
        let hits: Vec<_> = search(FASTA, FileFormat::Fasta, "seq1")
            .map(|r| r.line_number)
            .collect();
        assert_eq!(hits, vec![1, 5]);
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert_eq!(search(FASTA, FileFormat::Fasta, "").count(), 3);
        assert_eq!(search(FASTQ, FileFormat::Fastq, "").count(), 2);
    }

    #[test]
    fn case_sensitive_and_literal() {
        assert_eq!(search(FASTA, FileFormat::Fasta, "SEQ1").count(), 0);
        assert_eq!(search(FASTA, FileFormat::Fasta, "seq.").count(), 0);
        assert_eq!(search(">a.b*\nAC\n", FileFormat::Fasta, ".b*").count(), 1);
    }

    #[test]
    fn marker_is_not_part_of_the_header() {
        assert_eq!(search(FASTA, FileFormat::Fasta, ">").count(), 0);
        assert_eq!(search(FASTQ, FileFormat::Fastq, "@").count(), 0);
    }

    #[test]
    fn same_as_manual_enumeration() {
        let text = "junk\n>alpha_1\nAC\n\n>beta_2\nGT\n>alpha_3\nTT\n>gamma";
        let manual: Vec<_> = scan(text, FileFormat::Fasta)
            .filter(|r| r.header.contains("alpha"))
            .collect();
        let fused: Vec<_> = search(text, FileFormat::Fasta, "alpha").collect();
        assert_eq!(manual, fused);
        assert_eq!(fused.len(), 2);
    }

    #[test]
    fn repeated_searches_agree() {
        let first: Vec<_> = search(FASTQ, FileFormat::Fastq, "r").collect();
        let second: Vec<_> = search(FASTQ, FileFormat::Fastq, "r").collect();
        assert_eq!(first, second);
    }
}
