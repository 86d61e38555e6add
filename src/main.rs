#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;

use seqsearch::cli::{self, Cli};
use seqsearch::io::OutputStyle;
use seqsearch::search;

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// If `output` is `Some`, it creates a file at the specified path and returns a `BufWriter` for it.
/// If `output` is `None`, it returns a `BufWriter` for the standard output.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Unable to create output file {x}"))?;
            Box::new(file) as Box<dyn Write + Send>
        }
        None => Box::new(stdout()) as Box<dyn Write + Send>,
    });
    Ok(writer)
}

fn try_main(cli: Cli) -> Result<()> {
    debug!("seqsearch v{}", cli::VERSION);

    let style = match cli.json {
        true => OutputStyle::Json,
        false => OutputStyle::Text,
    };

    let mut writer = get_writer(&cli.output)?;

    search::search(
        &cli.filename,
        &cli.partial_sequence_name,
        cli.format,
        &mut writer,
        style,
    )?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    // usage errors exit with 1; --help and --version still exit successfully
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    if let Err(err) = try_main(cli) {
        eprintln!("Error: {err}");

        // report any underlying causes
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
