//! Runtime configuration, resolved from the command line and environment.

use crate::args::Common;
use crate::render::OutputFormat;
use std::path::{Path, PathBuf};

/// The file name used when neither `--file` nor `FINANCE_TRACKER_FILE` is given. It is resolved
/// relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "transactions.json";

/// The `Config` object holds the settings that the commands need: where the transactions file is
/// and how to render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_file: PathBuf,
    format: OutputFormat,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_file: data_file.into(),
            format,
        }
    }

    pub fn from_common(common: &Common) -> Self {
        Self::new(common.file().path(), common.format())
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE, OutputFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.data_file(), Path::new("transactions.json"));
        assert_eq!(config.format(), OutputFormat::Table);
    }

    #[test]
    fn test_from_common() {
        let common = Common::new(
            LevelFilter::WARN,
            PathBuf::from("/tmp/money.json"),
            OutputFormat::Csv,
        );
        let config = Config::from_common(&common);
        assert_eq!(config.data_file(), Path::new("/tmp/money.json"));
        assert_eq!(config.format(), OutputFormat::Csv);
    }
}
