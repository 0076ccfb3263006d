//! Loading, filtering and sorting of transactions.
//!
//! Apart from the single file read in `load`, these are pure functions of their inputs. Any state
//! about what is on screen lives in `crate::view`.

use crate::error::{ErrorType, IntoResult};
use crate::model::{Column, SearchMode, Transaction, TransactionSet};
use crate::{utils, Result};
use std::path::Path;
use tracing::{debug, info};

/// Loads the transactions file at `path`.
///
/// A missing file is not an error: it yields an empty `TransactionSet`.
///
/// # Errors
/// - `ErrorType::Data` if the file is not a JSON object of category arrays, a record is missing
///   its `date` or `amount`, an amount is not a number, or a category name is empty.
/// - `ErrorType::Io` if the file exists but cannot be read.
pub async fn load(path: &Path) -> Result<TransactionSet> {
    let content = match utils::read_if_exists(path)
        .await
        .pub_result(ErrorType::Io)?
    {
        Some(content) => content,
        None => {
            info!("File not found: {}", path.display());
            return Ok(TransactionSet::default());
        }
    };

    let set: TransactionSet = utils::deserialize(path, &content).pub_result(ErrorType::Data)?;
    info!("{}", loaded_message(&set, path));
    Ok(set)
}

fn loaded_message(set: &TransactionSet, path: &Path) -> String {
    format!(
        "Loaded successfully: {} transactions in {} categories from {}",
        set.len(),
        set.groups().len(),
        path.display()
    )
}

/// Returns the transactions of `set` that match `term`, category by category in file order.
///
/// The comparison is case-insensitive and looks at the date, the amount as written in the file,
/// and the category. An empty `term` matches everything in `Contains` mode and only empty fields
/// in `Exact` mode.
pub fn filter(set: &TransactionSet, term: &str, mode: SearchMode) -> Vec<Transaction> {
    let term = term.to_lowercase();
    let rows: Vec<Transaction> = set
        .iter()
        .filter(|t| matches(t, &term, mode))
        .cloned()
        .collect();
    debug!(
        "Search '{term}' ({mode}) matched {} of {} transactions",
        rows.len(),
        set.len()
    );
    rows
}

/// `term` must already be lowercase.
fn matches(t: &Transaction, term: &str, mode: SearchMode) -> bool {
    Column::ALL.iter().any(|&column| {
        let field = t.get(column).to_lowercase();
        match mode {
            SearchMode::Contains => field.contains(term),
            SearchMode::Exact => field == term,
        }
    })
}

/// Sorts `rows` in place by `column`. Amounts are ordered by value, dates and categories as text.
///
/// The sort is stable in both directions: rows with equal keys keep their relative order.
pub fn sort_rows(rows: &mut [Transaction], column: Column, descending: bool) {
    if descending {
        rows.sort_by(|a, b| b.cmp_by(a, column));
    } else {
        rows.sort_by(|a, b| a.cmp_by(b, column));
    }
}
