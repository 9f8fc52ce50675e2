// SPDX-License-Identifier: MPL-2.0
//! Tabular data and CSV export.
//!
//! Tables are registered under an identifier and looked up when exported.
//! The CSV dialect is fixed: every field is wrapped in double quotes, fields
//! are separated by commas and rows by `\n`, without a trailing newline.
//! Double quotes inside a field are written as-is, not escaped.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// A grid of text cells. Header rows are ordinary rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from anything that yields rows of cells.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn push_row<C: Into<String>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the table, see [`to_csv`].
    #[must_use]
    pub fn to_csv(&self) -> String {
        to_csv(&self.rows)
    }
}

/// Serializes rows of cells to CSV text.
#[must_use]
pub fn to_csv<R: AsRef<[String]>>(rows: &[R]) -> String {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tables addressable by identifier.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: HashMap<String, Table>,
}

impl TableRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `table` under `id`, replacing any previous table.
    pub fn register(&mut self, id: impl Into<String>, table: Table) -> Option<Table> {
        self.tables.insert(id.into(), table)
    }

    pub fn remove(&mut self, id: &str) -> Option<Table> {
        self.tables.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.get(id)
    }

    /// Serializes the table registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TableNotFound` if nothing is registered under `id`.
    pub fn csv(&self, id: &str) -> Result<String> {
        self.get(id)
            .map(Table::to_csv)
            .ok_or_else(|| Error::TableNotFound(id.to_string()))
    }
}

/// Writes content to a file atomically.
///
/// Uses a temporary sibling file, then renames it over the final path so a
/// failed write never leaves a truncated export behind.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_every_field() {
        let table = Table::from_rows([["a", "b"], ["c", "d"]]);
        assert_eq!(table.to_csv(), "\"a\",\"b\"\n\"c\",\"d\"");
    }

    #[test]
    fn csv_of_empty_table_is_empty() {
        assert_eq!(Table::new().to_csv(), "");
    }

    #[test]
    fn csv_keeps_ragged_rows() {
        let mut table = Table::new();
        table.push_row(["Name", "Phone", "Email"]);
        table.push_row(["Ana"]);
        assert_eq!(table.to_csv(), "\"Name\",\"Phone\",\"Email\"\n\"Ana\"");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let table = Table::from_rows([["say \"hi\"", "x,y"]]);
        assert_eq!(table.to_csv(), "\"say \"hi\"\",\"x,y\"");
    }

    #[test]
    fn registry_reports_missing_table() {
        let registry = TableRegistry::new();
        assert!(matches!(
            registry.csv("missing"),
            Err(Error::TableNotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn registry_replaces_by_id() {
        let mut registry = TableRegistry::new();
        registry.register("t", Table::from_rows([["1"]]));
        let previous = registry.register("t", Table::from_rows([["2"]]));
        assert_eq!(previous, Some(Table::from_rows([["1"]])));
        assert_eq!(registry.csv("t").expect("table exists"), "\"2\"");
        assert!(registry.remove("t").is_some());
        assert!(registry.get("t").is_none());
    }

    #[test]
    fn atomic_write_creates_file_without_leftovers() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join("export.csv");

        write_atomic(&path, "\"a\"").expect("write should succeed");

        assert_eq!(fs::read_to_string(&path).expect("should read"), "\"a\"");
        assert!(!temp_dir.path().join("export.csv.tmp").exists());
    }

    #[test]
    fn atomic_write_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join("nope").join("export.csv");
        assert!(write_atomic(&path, "x").is_err());
    }
}
