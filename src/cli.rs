use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

use crate::format::FileFormat;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🔎 seqsearch version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   find FASTA/FASTQ records by partial header name";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    after_help = indoc::indoc! {"
        Example:
          seqsearch data.fasta seq123
    "},
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// the input .fasta/.fa or .fastq/.fq file
    pub filename: String,

    /// the text to look for in each record header (case-sensitive)
    pub partial_sequence_name: String,

    /// the input format. if omitted, this is detected from the file extension,
    /// or otherwise from the first character of the file
    #[arg(short, long, value_enum, verbatim_doc_comment)]
    pub format: Option<FileFormat>,

    /// the output file, defaults to standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// write one JSON object per matching record instead of text blocks
    #[arg(long, action)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn two_positionals() {
        let cli = Cli::try_parse_from(["seqsearch", "data.fasta", "seq123"]).unwrap();
        assert_eq!(cli.filename, "data.fasta");
        assert_eq!(cli.partial_sequence_name, "seq123");
        assert_eq!(cli.format, None);
        assert!(!cli.json);
    }

    #[test]
    fn options() {
        let cli = Cli::try_parse_from([
            "seqsearch", "reads.txt", "r1", "--format", "fastq", "-o", "out.txt", "--json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(FileFormat::Fastq));
        assert_eq!(cli.output.as_deref(), Some("out.txt"));
        assert!(cli.json);
    }

    #[test]
    fn wrong_argument_count() {
        assert!(Cli::try_parse_from(["seqsearch", "data.fasta"]).is_err());
        assert!(Cli::try_parse_from(["seqsearch", "a.fa", "b", "c"]).is_err());
    }

    #[test]
    fn empty_needle_is_allowed() {
        let cli = Cli::try_parse_from(["seqsearch", "data.fasta", ""]).unwrap();
        assert_eq!(cli.partial_sequence_name, "");
    }
}
