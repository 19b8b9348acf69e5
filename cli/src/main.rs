use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cdb_reader::{
    read_archive, CdbError, DataIntegrityWarning, JsonRecordWriter, Record, RecordSink, Schema,
};

#[derive(Parser)]
#[command(name = "cdbr")]
#[command(about = "Decode cdb archives into readable JSON", long_about = None)]
struct Cli {
    /// Let per-file decode failures fail the whole run
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every `.cdb` file in a directory (the default mode)
    Dir {
        /// Directory to scan (defaults to the current one)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Decode a single cdb archive
    File {
        /// Input `.cdb` file
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Console sink: records go to stdout as JSON blocks, the schema
/// announcement and warnings go to stderr.
struct ConsoleSink {
    records: JsonRecordWriter<io::Stdout>,
}

impl ConsoleSink {
    fn new() -> ConsoleSink {
        ConsoleSink {
            records: JsonRecordWriter::new(io::stdout()),
        }
    }
}

impl RecordSink for ConsoleSink {
    fn schema(&mut self, schema: &Schema) -> Result<(), CdbError> {
        eprintln!("Read {} fields", schema.len());
        Ok(())
    }

    fn record(&mut self, record: &Record) -> Result<(), CdbError> {
        self.records.record(record)
    }

    fn warning(&mut self, warning: &DataIntegrityWarning) {
        eprintln!("Warning: {}", warning);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Some(Commands::File { input }) => run_file(input),
        Some(Commands::Dir { path }) => run_dir(path.as_deref().unwrap_or(Path::new("."))),
        None => run_dir(Path::new(".")),
    };

    match outcome {
        Ok(failures) => {
            if failures > 0 && cli.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Decode one archive, reporting a failure without propagating it: decode
/// errors are local to the file and, without `--strict`, do not affect the
/// exit code.
fn run_file(input: &Path) -> Result<usize, CdbError> {
    eprintln!("Trying to read {} as a cdb archive", input.display());
    let mut sink = ConsoleSink::new();
    match read_archive(input, &mut sink) {
        Ok(()) => Ok(0),
        Err(err) => {
            eprintln!("Failed to read {}: {}", input.display(), err);
            Ok(1)
        }
    }
}

/// Decode every `.cdb` file in `dir`, each independently; returns how many
/// of them failed. Only a failure to scan the directory itself is an error.
fn run_dir(dir: &Path) -> Result<usize, CdbError> {
    eprintln!("Loading all of the .cdb files from {}", dir.display());
    let mut failures = 0;
    for path in cdb_files_in(dir)? {
        failures += run_file(&path)?;
    }
    Ok(failures)
}

/// The `.cdb` files directly inside `dir`, sorted by path.
fn cdb_files_in(dir: &Path) -> Result<Vec<PathBuf>, CdbError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_cdb_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_cdb_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("cdb"))
        .unwrap_or(false)
}
