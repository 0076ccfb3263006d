//! What is currently on screen: the displayed rows, the last search, and the sort direction each
//! column heading will use next.

use crate::model::{Column, SearchMode, SortDirection, Transaction, TransactionSet};
use crate::store;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// A search that has been applied to the display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Search {
    pub term: String,
    pub mode: SearchMode,
}

/// The column and direction of the most recent sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSort {
    pub column: Column,
    pub direction: SortDirection,
}

/// The rows being displayed along with the state needed to respond to the next search or sort.
///
/// The first sort on a column is ascending. Each further sort on the same column flips that
/// column's direction, regardless of what has happened to other columns in between. Searching
/// replaces the rows but leaves the per-column directions alone.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    rows: Vec<Transaction>,
    search: Option<Search>,
    active_sort: Option<ActiveSort>,
    directions: BTreeMap<Column, SortDirection>,
}

impl DisplayState {
    /// Displays every transaction in `set`, in file order.
    pub fn new(set: &TransactionSet) -> Self {
        Self {
            rows: set.iter().cloned().collect(),
            ..Self::default()
        }
    }

    /// Replaces the displayed rows with the transactions of `set` that match `term`.
    pub fn search(&mut self, set: &TransactionSet, term: &str, mode: SearchMode) {
        self.rows = store::filter(set, term, mode);
        self.search = Some(Search {
            term: term.to_string(),
            mode,
        });
        self.active_sort = None;
    }

    /// Displays every transaction again and forgets the last search.
    pub fn reset(&mut self, set: &TransactionSet) {
        self.rows = set.iter().cloned().collect();
        self.search = None;
        self.active_sort = None;
    }

    /// Sorts the displayed rows by `column`, toggling that column's direction. Returns the
    /// direction that was used.
    pub fn sort_by(&mut self, column: Column) -> SortDirection {
        let direction = match self.directions.get(&column) {
            Some(last) => last.flip(),
            None => SortDirection::Ascending,
        };
        self.sort_with(column, direction);
        direction
    }

    /// Sorts the displayed rows by `column` in an explicit `direction`, recording it as that
    /// column's last direction.
    pub fn sort_with(&mut self, column: Column, direction: SortDirection) {
        debug!("Sorting {} rows by {column} {direction}", self.rows.len());
        store::sort_rows(&mut self.rows, column, direction.is_descending());
        let _ = self.directions.insert(column, direction);
        self.active_sort = Some(ActiveSort { column, direction });
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn search_applied(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// The sort that produced the current row order, if the rows have been sorted since they were
    /// last replaced.
    pub fn active_sort(&self) -> Option<ActiveSort> {
        self.active_sort
    }

    /// The direction `column` was last sorted in, if it has been sorted.
    pub fn last_direction(&self, column: Column) -> Option<SortDirection> {
        self.directions.get(&column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{sample_set, FOOD_AND_RENT, MONTH};

    fn amounts(view: &DisplayState) -> Vec<&str> {
        view.rows().iter().map(|t| t.amount().as_str()).collect()
    }

    #[test]
    fn test_new_shows_everything() {
        let set = sample_set(MONTH);
        let view = DisplayState::new(&set);
        assert_eq!(view.rows().len(), set.len());
        assert_eq!(view.search_applied(), None);
        assert_eq!(view.active_sort(), None);
    }

    #[test]
    fn test_sort_toggles_per_column() {
        let set = sample_set(FOOD_AND_RENT);
        let mut view = DisplayState::new(&set);

        assert_eq!(view.sort_by(Column::Amount), SortDirection::Ascending);
        assert_eq!(amounts(&view), vec!["12.5", "900"]);

        assert_eq!(view.sort_by(Column::Amount), SortDirection::Descending);
        assert_eq!(amounts(&view), vec!["900", "12.5"]);

        // a different column starts ascending
        assert_eq!(view.sort_by(Column::Category), SortDirection::Ascending);
        assert_eq!(amounts(&view), vec!["12.5", "900"]);

        // and the first column resumes from its own last direction
        assert_eq!(view.sort_by(Column::Amount), SortDirection::Ascending);
        assert_eq!(view.sort_by(Column::Amount), SortDirection::Descending);
        assert_eq!(
            view.active_sort(),
            Some(ActiveSort {
                column: Column::Amount,
                direction: SortDirection::Descending
            })
        );
        assert_eq!(
            view.last_direction(Column::Category),
            Some(SortDirection::Ascending)
        );
        assert_eq!(view.last_direction(Column::Date), None);
    }

    #[test]
    fn test_search_keeps_directions() {
        let set = sample_set(MONTH);
        let mut view = DisplayState::new(&set);
        view.sort_by(Column::Date);
        view.search(&set, "food", SearchMode::Contains);

        assert_eq!(view.rows().len(), 2);
        assert_eq!(view.active_sort(), None);
        assert_eq!(
            view.search_applied(),
            Some(&Search {
                term: "food".to_string(),
                mode: SearchMode::Contains
            })
        );
        assert_eq!(view.sort_by(Column::Date), SortDirection::Descending);
        let dates: Vec<&str> = view.rows().iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec!["2024-02-14", "2024-02-03"]);
    }

    #[test]
    fn test_sort_only_touches_displayed_rows() {
        let set = sample_set(MONTH);
        let mut view = DisplayState::new(&set);
        view.search(&set, "groceries", SearchMode::Exact);
        view.sort_by(Column::Amount);
        assert_eq!(amounts(&view), vec!["45.00", "45.2", "61"]);
    }

    #[test]
    fn test_reset() {
        let set = sample_set(MONTH);
        let mut view = DisplayState::new(&set);
        view.search(&set, "nothing matches this", SearchMode::Contains);
        assert!(view.rows().is_empty());
        view.reset(&set);
        assert_eq!(view.rows().len(), set.len());
        assert_eq!(view.search_applied(), None);
    }

    #[test]
    fn test_sort_with_records_direction() {
        let set = sample_set(FOOD_AND_RENT);
        let mut view = DisplayState::new(&set);
        view.sort_with(Column::Amount, SortDirection::Descending);
        assert_eq!(amounts(&view), vec!["900", "12.5"]);
        assert_eq!(view.sort_by(Column::Amount), SortDirection::Ascending);
    }
}
