use crate::model::{Amount, Column};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single dated transaction. The category it was filed under in the data file is carried as a
/// field so that it survives filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    date: String,
    amount: Amount,
    category: String,
}

impl Transaction {
    pub fn new(date: impl Into<String>, amount: Amount, category: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The text of the given column, as searched and displayed.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Date => self.date(),
            Column::Amount => self.amount.as_str(),
            Column::Category => self.category(),
        }
    }

    /// Compares two transactions by a single column. Amounts compare by value, everything else
    /// compares as text.
    pub fn cmp_by(&self, other: &Self, column: Column) -> Ordering {
        match column {
            Column::Amount => self.amount.value().cmp(&other.amount.value()),
            Column::Date | Column::Category => self.get(column).cmp(other.get(column)),
        }
    }
}

/// One record as it appears in the data file. Fields other than these are ignored.
#[derive(Debug, Clone, Deserialize)]
struct Record {
    date: String,
    amount: Amount,
}

/// The transactions of one category, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    name: String,
    transactions: Vec<Transaction>,
}

impl CategoryGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

/// All transactions from the data file, grouped by category. Categories keep the order in which
/// they appear in the file.
///
/// The file is a JSON object mapping category names to arrays of records:
/// ```json
/// {
///   "Food": [{ "date": "2024-01-01", "amount": 12.5 }],
///   "Rent": [{ "date": "2024-01-02", "amount": 900 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSet {
    groups: Vec<CategoryGroup>,
}

impl TransactionSet {
    /// Builds a set from `(category, transactions)` pairs. A repeated category replaces the
    /// transactions of the earlier one but keeps its position.
    pub fn new<S, I>(groups: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<(String, Amount)>)>,
    {
        let mut set = Self::default();
        for (name, records) in groups {
            set.insert(name.into(), records);
        }
        set
    }

    fn insert(&mut self, name: String, records: Vec<(String, Amount)>) {
        let transactions = records
            .into_iter()
            .map(|(date, amount)| Transaction::new(date, amount, name.as_str()))
            .collect();
        match self.groups.iter_mut().find(|g| g.name == name) {
            Some(existing) => existing.transactions = transactions,
            None => self.groups.push(CategoryGroup { name, transactions }),
        }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Iterates every transaction, category by category, in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.groups.iter().flat_map(CategoryGroup::transactions)
    }

    /// The total number of transactions across all categories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.transactions().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for TransactionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TransactionSetVisitor)
    }
}

/// Reads the top level object entry by entry so that the category order of the file survives.
struct TransactionSetVisitor;

impl<'de> Visitor<'de> for TransactionSetVisitor {
    type Value = TransactionSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping category names to arrays of {date, amount} records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut set = TransactionSet::default();
        while let Some(name) = map.next_key::<String>()? {
            if name.is_empty() {
                return Err(serde::de::Error::custom("category names must not be empty"));
            }
            let records: Vec<Record> = map.next_value()?;
            set.insert(
                name,
                records.into_iter().map(|r| (r.date, r.amount)).collect(),
            );
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amt(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_keeps_file_order() {
        let json = r#"{
            "Rent": [{"date": "2024-01-02", "amount": 900}],
            "Food": [
                {"date": "2024-01-01", "amount": 12.5},
                {"date": "2024-01-03", "amount": "4.50", "note": "ignored"}
            ]
        }"#;
        let set: TransactionSet = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = set.groups().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Rent", "Food"]);
        assert_eq!(set.len(), 3);

        let rows: Vec<(&str, &str, &str)> = set
            .iter()
            .map(|t| (t.date(), t.amount().as_str(), t.category()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2024-01-02", "900", "Rent"),
                ("2024-01-01", "12.5", "Food"),
                ("2024-01-03", "4.50", "Food"),
            ]
        );
    }

    #[test]
    fn test_deserialize_empty_object() {
        let set: TransactionSet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());
        assert!(set.groups().is_empty());
    }

    #[test]
    fn test_deserialize_empty_category() {
        let set: TransactionSet = serde_json::from_str(r#"{"Food": []}"#).unwrap();
        assert_eq!(set.groups().len(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicate_category_replaces_in_place() {
        let json = r#"{
            "Food": [{"date": "a", "amount": 1}],
            "Rent": [{"date": "b", "amount": 2}],
            "Food": [{"date": "c", "amount": 3}]
        }"#;
        let set: TransactionSet = serde_json::from_str(json).unwrap();
        let dates: Vec<&str> = set.iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec!["c", "b"]);
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        // not an object
        assert!(serde_json::from_str::<TransactionSet>("[]").is_err());
        // category value is not an array
        assert!(serde_json::from_str::<TransactionSet>(r#"{"Food": 1}"#).is_err());
        // missing amount
        assert!(serde_json::from_str::<TransactionSet>(r#"{"Food": [{"date": "x"}]}"#).is_err());
        // missing date
        assert!(serde_json::from_str::<TransactionSet>(r#"{"Food": [{"amount": 1}]}"#).is_err());
        // amount is not a number
        assert!(
            serde_json::from_str::<TransactionSet>(r#"{"Food": [{"date": "x", "amount": "?"}]}"#)
                .is_err()
        );
        // empty category name
        assert!(
            serde_json::from_str::<TransactionSet>(r#"{"": [{"date": "x", "amount": 1}]}"#)
                .is_err()
        );
    }

    #[test]
    fn test_whitespace_category_is_kept() {
        let set: TransactionSet =
            serde_json::from_str(r#"{"  ": [{"date": "x", "amount": 1}]}"#).unwrap();
        assert_eq!(set.groups()[0].name(), "  ");
        assert_eq!(set.iter().next().unwrap().category(), "  ");
    }

    #[test]
    fn test_new_from_pairs() {
        let set = TransactionSet::new(vec![(
            "Food",
            vec![("2024-01-01".to_string(), amt("12.5"))],
        )]);
        let t = set.iter().next().unwrap();
        assert_eq!(t, &Transaction::new("2024-01-01", amt("12.5"), "Food"));
    }

    #[test]
    fn test_get_and_cmp_by() {
        let a = Transaction::new("2024-01-02", amt("9"), "Rent");
        let b = Transaction::new("2024-01-01", amt("10"), "Food");
        assert_eq!(a.get(Column::Amount), "9");
        assert_eq!(a.cmp_by(&b, Column::Amount), Ordering::Less);
        // as text "9" > "10", as numbers 9 < 10
        assert_eq!(a.get(Column::Amount).cmp(b.get(Column::Amount)), Ordering::Greater);
        assert_eq!(a.cmp_by(&b, Column::Date), Ordering::Greater);
        assert_eq!(a.cmp_by(&b, Column::Category), Ordering::Greater);
    }

    #[test]
    fn test_serialize() {
        let t = Transaction::new("2024-01-01", amt("12.5"), "Food");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-01","amount":"12.5","category":"Food"}"#
        );
    }
}
