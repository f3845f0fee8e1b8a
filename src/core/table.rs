use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::CellValue;
use crate::error::{ChartError, ChartResult};

/// One spreadsheet row: column name to raw cell, in column order.
pub type Record = IndexMap<String, CellValue>;

/// In-memory representation of a parsed spreadsheet.
///
/// Created once at ingestion time and read-only afterwards; many chart
/// derivations may share one table without coordination. Row order is the
/// original sheet order. Every row's key set is a subset of `columns`;
/// ingestion fills missing cells with empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Builds a table from pre-shaped parts, enforcing the column invariants.
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> ChartResult<Self> {
        let mut seen: IndexSet<&str> = IndexSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ChartError::InvalidConfig(format!(
                    "duplicate column name `{column}`"
                )));
            }
        }
        for (index, row) in rows.iter().enumerate() {
            for key in row.keys() {
                if !seen.contains(key.as_str()) {
                    return Err(ChartError::InvalidConfig(format!(
                        "row {index} has key `{key}` outside the column set"
                    )));
                }
            }
        }
        Ok(Self { columns, rows })
    }

    /// Ingests parsed sheet records the way the upload pipeline produces
    /// them: column names are the first record's keys in order, missing
    /// cells become empty text, and keys outside the column set are dropped.
    ///
    /// An empty record list yields an empty table with no columns.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        let columns: Vec<String> = records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|column| {
                        let cell = record
                            .swap_remove(column)
                            .unwrap_or_else(|| CellValue::Text(String::new()));
                        (column.clone(), cell)
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Cells of `column` in row order. Missing cells read as `Null`, though
    /// ingestion normally fills them with empty text.
    pub fn column_cells<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a CellValue> {
        self.rows
            .iter()
            .map(move |row| row.get(column).unwrap_or(&CellValue::Null))
    }
}
