//! ACVP JSON to KAT text converter and KAT file checker.

use ascon_kat::{check_records, convert, parse, read_vector_set, render, Algorithm, KatError};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "acvp2kat")]
#[command(about = "Convert ACVP vector sets to Ascon KAT files and check them", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an ACVP internalProjection.json into KAT text
    Convert {
        /// Algorithm name, e.g. Ascon-AEAD128, Ascon-Hash256, Ascon-CXOF128
        #[arg(short, long)]
        algorithm: Algorithm,
        /// JSON input; standard input when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// KAT output; standard output when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Recompute every converted record before writing
        #[arg(long)]
        check: bool,
    },

    /// Recompute every record of a KAT file
    Check {
        #[arg(short, long)]
        algorithm: Algorithm,
        path: PathBuf,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Returns whether every checked record agreed.
fn check(algorithm: Algorithm, records: &[ascon_kat::KatRecord]) -> Result<bool, KatError> {
    let report = check_records(algorithm, records)?;
    if report.all_passed() {
        info!(total = report.total, %algorithm, "all vectors agree");
    } else {
        error!(
            failed = report.failed.len(),
            total = report.total,
            counts = ?report.failed,
            "vectors disagree"
        );
    }
    Ok(report.all_passed())
}

fn run(command: Commands) -> Result<bool, KatError> {
    match command {
        Commands::Convert {
            algorithm,
            input,
            output,
            check: verify,
        } => {
            let set = match input {
                Some(path) => read_vector_set(BufReader::new(File::open(path)?))?,
                None => read_vector_set(io::stdin().lock())?,
            };
            let records = convert(&set, algorithm)?;
            let agreed = !verify || check(algorithm, &records)?;
            let text = render(&records);
            match output {
                Some(path) => fs::write(path, text)?,
                None => io::stdout().lock().write_all(text.as_bytes())?,
            }
            Ok(agreed)
        }
        Commands::Check { algorithm, path } => {
            let mut text = String::new();
            File::open(&path)?.read_to_string(&mut text)?;
            let records = parse(algorithm.kind(), &text)?;
            info!(path = %path.display(), records = records.len(), "read KAT file");
            check(algorithm, &records)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::from(2)
        }
    }
}
