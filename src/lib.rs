//! Load, search and sort categorized financial transactions.
//!
//! Transactions come from a JSON file that maps category names to lists of `{date, amount}`
//! records. `store` holds the pure load/filter/sort operations, `view` holds the state of what is
//! being displayed, and `commands` drives both from the CLI.

pub mod args;
pub mod commands;
mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod store;
mod utils;
pub mod view;


pub use config::Config;
pub use error::Error;
pub use error::Result;
