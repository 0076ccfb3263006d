//! These structs provide the CLI interface for the finance CLI.

use crate::config::DEFAULT_DATA_FILE;
use crate::model::{Column, SearchMode, SortDirection};
use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// finance: A command-line tool for viewing categorized financial transactions.
///
/// Transactions are read from a JSON file that maps category names to lists of records, each
/// with a `date` and an `amount`, for example:
///
///   {"Food": [{"date": "2024-01-01", "amount": 12.5}]}
///
/// If the file does not exist, there are simply no transactions to show.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Display all transactions, optionally sorted by a column.
    Show(ShowArgs),
    /// Display the transactions whose date, amount or category match a search term.
    ///
    /// Matching ignores case. In `contains` mode (the default) the term may appear anywhere in a
    /// field; in `exact` mode it must be the whole field.
    Search(SearchArgs),
    /// Start an interactive session that reads commands from stdin.
    ///
    /// Type `help` in the session for the list of commands. Sorting the same column twice
    /// reverses the order.
    Browse,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The JSON file holding the transactions.
    #[arg(long, env = "FINANCE_TRACKER_FILE", default_value = DEFAULT_DATA_FILE)]
    file: DisplayPath,

    /// How to print the transactions.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Common {
    pub fn new(log_level: LevelFilter, file: PathBuf, format: OutputFormat) -> Self {
        Self {
            log_level,
            file: file.into(),
            format,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn file(&self) -> &DisplayPath {
        &self.file
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Sorting options shared by `show` and `search`.
#[derive(Debug, Parser, Clone, Default)]
pub struct SortArgs {
    /// The column to sort by.
    #[arg(long, value_enum)]
    sort: Option<Column>,

    /// Sort in descending order instead of ascending.
    #[arg(long, requires = "sort")]
    descending: bool,
}

impl SortArgs {
    pub fn new(sort: Option<Column>, descending: bool) -> Self {
        Self { sort, descending }
    }

    /// The requested column and direction, if sorting was requested.
    pub fn sort(&self) -> Option<(Column, SortDirection)> {
        self.sort
            .map(|column| (column, SortDirection::from_descending(self.descending)))
    }
}

/// Args for the `finance show` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ShowArgs {
    #[clap(flatten)]
    sort: SortArgs,
}

impl ShowArgs {
    pub fn new(sort: SortArgs) -> Self {
        Self { sort }
    }

    pub fn sort(&self) -> &SortArgs {
        &self.sort
    }
}

/// Args for the `finance search` command.
#[derive(Debug, Parser, Clone)]
pub struct SearchArgs {
    /// The text to search for. Use "" to match everything in contains mode.
    term: String,

    /// How the term is compared with each field.
    #[arg(long, value_enum, default_value_t = SearchMode::Contains)]
    mode: SearchMode,

    #[clap(flatten)]
    sort: SortArgs,
}

impl SearchArgs {
    pub fn new(term: impl Into<String>, mode: SearchMode, sort: SortArgs) -> Self {
        Self {
            term: term.into(),
            mode,
            sort,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn sort(&self) -> &SortArgs {
        &self.sort
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
