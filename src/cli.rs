//! Minimal CLI: sales JSON → SQL `insert` statements
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::emit::{self, DEFAULT_TABLE};
use crate::error::Error;
use crate::loader;
use crate::record::RecordCollection;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert a JSON list of sales records into SQL insert statements
#[derive(Parser, Debug)]
#[command(name = "dbload")]
pub struct CommandLineInterface {
    /// JSON file shaped like {"objects": [...]}
    input: PathBuf,

    /// max number of rows to output (zero or negative means all)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    maxrows: i64,

    /// output .sql file ('-' for stdout)
    #[arg(long, default_value = STDOUT_SENTINEL)]
    output: String,
}

const STDOUT_SENTINEL: &str = "-";

/// Where the SQL goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Long flags the tool historically accepted with a single dash.
const LEGACY_FLAGS: &[&str] = &["maxrows", "output"];

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Destination {
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDOUT_SENTINEL {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }

    /// Open for writing. A file destination replaces whatever was there.
    pub fn open(&self) -> crate::Result<Box<dyn Write>> {
        match self {
            Destination::Stdout => Ok(Box::new(io::stdout().lock())),
            Destination::File(path) => {
                // a failed remove (usually "not found") surfaces on create if it matters
                let _ = std::fs::remove_file(path);
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|source| Error::Create { path: path.clone(), source })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
    pub fn destination(&self) -> Destination {
        Destination::from_arg(&self.output)
    }
    pub fn run(&self) -> anyhow::Result<()> {
        // 1) whole document, fail before any output
        let records = loader::load(&self.input)?;
        log::debug!(
            "row cap {} of {} records",
            emit::row_cap(records.len(), self.maxrows),
            records.len()
        );

        // 2) human-readable listing
        self.write_listing(&records, io::stdout().lock())?;

        // 3) SQL
        let destination = self.destination();
        log::debug!("writing SQL to {destination}");
        let out = destination.open()?;
        self.write_sql(&records, &destination, out)
    }
    fn write_listing<W: Write>(&self, records: &RecordCollection, mut out: W) -> anyhow::Result<()> {
        emit::show(records, self.maxrows, &mut out)
            .and_then(|()| out.flush().map_err(Error::Write))
            .context("failed to print record listing")
    }
    fn write_sql<W: Write>(
        &self,
        records: &RecordCollection,
        destination: &Destination,
        out: W,
    ) -> anyhow::Result<()> {
        let mut out = BufWriter::new(out);
        emit::emit(records, self.maxrows, DEFAULT_TABLE, &mut out)
            .and_then(|_| out.flush().map_err(Error::Write))
            .with_context(|| format!("failed to write SQL to {destination}"))
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Rewrite `-maxrows` / `-output` (and their `=value` forms) to `--…`.
/// Nothing after a `--` terminator is touched.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg.as_os_str() == "--" {
                after_terminator = true;
                return arg;
            }
            let Some(text) = arg.to_str() else { return arg };
            let Some(rest) = text.strip_prefix('-') else { return arg };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
