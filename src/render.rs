//! Rendering of displayed rows as a text table, JSON or CSV.

use crate::model::{Column, Transaction};
use crate::view::{ActiveSort, DisplayState};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The output formats that rows can be rendered in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// An aligned text table with a sort marker on the sorted column.
    #[default]
    Table,
    /// A JSON array of objects.
    Json,
    /// CSV with a header row.
    Csv,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// Renders the rows of `view` in `format`.
pub fn render(view: &DisplayState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table(view.rows(), view.active_sort())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view.rows()).context("Unable to serialize rows to JSON")
        }
        OutputFormat::Csv => csv(view.rows()),
    }
}

fn table(rows: &[Transaction], sort: Option<ActiveSort>) -> String {
    let headings: Vec<String> = Column::ALL
        .iter()
        .map(|&column| match sort {
            Some(s) if s.column == column => format!("{} {}", column.heading(), s.direction.arrow()),
            _ => column.heading().to_string(),
        })
        .collect();

    let mut widths: Vec<usize> = headings.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (ix, &column) in Column::ALL.iter().enumerate() {
            widths[ix] = widths[ix].max(row.get(column).chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headings.iter().map(String::as_str), &widths);
    let rules: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, rules.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, Column::ALL.iter().map(|&c| row.get(c)), &widths);
    }
    out.push_str(&format!(
        "{} transaction{}\n",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (ix, cell) in cells.enumerate() {
        if ix > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[ix].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn csv(rows: &[Transaction]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer
            .write_record(Column::ALL.iter().map(|c| c.to_string()))
            .context("Unable to write CSV header")?;
    }
    for row in rows {
        writer
            .serialize(row)
            .context("Unable to write CSV record")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Unable to flush CSV data: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchMode;
    use crate::test::{sample_set, FOOD_AND_RENT};

    #[test]
    fn test_table_unsorted() {
        let view = DisplayState::new(&sample_set(FOOD_AND_RENT));
        let expected = "\
Date        Amount  Category
----------  ------  --------
2024-01-01  12.5    Food
2024-01-02  900     Rent
2 transactions
";
        assert_eq!(render(&view, OutputFormat::Table).unwrap(), expected);
    }

    #[test]
    fn test_table_sort_marker() {
        let mut view = DisplayState::new(&sample_set(FOOD_AND_RENT));
        view.sort_by(Column::Amount);
        view.sort_by(Column::Amount);
        let out = render(&view, OutputFormat::Table).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), "Date        Amount ▾  Category");
        assert_eq!(lines.next().unwrap(), "----------  --------  --------");
        assert_eq!(lines.next().unwrap(), "2024-01-02  900       Rent");
    }

    #[test]
    fn test_table_empty() {
        let set = sample_set(FOOD_AND_RENT);
        let mut view = DisplayState::new(&set);
        view.search(&set, "nope", SearchMode::Exact);
        let out = render(&view, OutputFormat::Table).unwrap();
        assert!(out.starts_with("Date  Amount  Category\n"));
        assert!(out.ends_with("0 transactions\n"));
    }

    #[test]
    fn test_json() {
        let set = sample_set(FOOD_AND_RENT);
        let mut view = DisplayState::new(&set);
        view.search(&set, "rent", SearchMode::Contains);
        let out = render(&view, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"date": "2024-01-02", "amount": "900", "category": "Rent"}])
        );
    }

    #[test]
    fn test_csv() {
        let view = DisplayState::new(&sample_set(FOOD_AND_RENT));
        let out = render(&view, OutputFormat::Csv).unwrap();
        assert_eq!(
            out,
            "date,amount,category\n2024-01-01,12.5,Food\n2024-01-02,900,Rent\n"
        );
    }

    #[test]
    fn test_csv_empty_has_header() {
        let view = DisplayState::default();
        let out = render(&view, OutputFormat::Csv).unwrap();
        assert_eq!(out, "date,amount,category\n");
    }
}
