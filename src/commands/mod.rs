//! Command handlers for the finance CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod browse;
mod search;
mod show;

use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use browse::{browse, run_session};
pub use search::search;
pub use show::show;

/// The output type for a command. This allows the command to return the text that should be shown
/// to the user along with, optionally, the structured data that the text was rendered from.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// The rendered output that is printed to the user.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to stdout and the structured data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        if !self.message.is_empty() {
            print!("{}", self.message);
        }
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}
