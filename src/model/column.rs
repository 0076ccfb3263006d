use serde::{Deserialize, Serialize};

/// The columns of the transactions table, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Date,
    Amount,
    Category,
}

serde_plain::derive_display_from_serialize!(Column);
serde_plain::derive_fromstr_from_deserialize!(Column);

impl Column {
    pub const ALL: [Column; 3] = [Column::Date, Column::Amount, Column::Category];

    /// The heading shown above the column.
    pub fn heading(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Amount => "Amount",
            Column::Category => "Category",
        }
    }
}

/// How a search term is compared against the fields of a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// The term appears somewhere in a field.
    #[default]
    Contains,
    /// The term is the whole field.
    Exact,
}

serde_plain::derive_display_from_serialize!(SearchMode);
serde_plain::derive_fromstr_from_deserialize!(SearchMode);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

serde_plain::derive_display_from_serialize!(SortDirection);
serde_plain::derive_fromstr_from_deserialize!(SortDirection);

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn flip(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// The marker appended to the heading of the sorted column.
    pub fn arrow(&self) -> char {
        match self {
            SortDirection::Ascending => '▴',
            SortDirection::Descending => '▾',
        }
    }
}
