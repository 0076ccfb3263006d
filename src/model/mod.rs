//! Types that represent the core data model, such as `Transaction` and `TransactionSet`.
mod amount;
mod column;
mod transaction;

pub use amount::{Amount, AmountError};
pub use column::{Column, SearchMode, SortDirection};
pub use transaction::{CategoryGroup, Transaction, TransactionSet};
