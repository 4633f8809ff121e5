//! In-memory tables of categorical records.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaplingError};

/// Named columns of string values, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new<S: Into<String>>(columns: Vec<S>) -> Self {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table and fill it with `rows`.
    pub fn from_rows<S, R>(columns: Vec<S>, rows: Vec<Vec<R>>) -> Result<Self>
    where
        S: Into<String>,
        R: Into<String>,
    {
        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row. Its length must match the number of columns.
    pub fn push_row<R: Into<String>>(&mut self, row: Vec<R>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(SaplingError::dataset(format!(
                "row has {} values but the table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row.into_iter().map(Into::into).collect());
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| SaplingError::dataset(format!("no column named {name:?}")))
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Distinct values of one column in order of first appearance.
    pub fn unique(&self, name: &str) -> Result<Vec<&str>> {
        let mut seen: Vec<&str> = Vec::new();
        for value in self.column(name)? {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        Ok(seen)
    }

    /// The given columns of every row, in the requested order.
    pub fn select(&self, names: &[&str]) -> Result<Vec<Vec<String>>> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect())
    }
}

/// Historical patient records: two symptoms and the diagnosed disease.
pub fn symptom_table() -> Table {
    let rows = [
        ["Diarrhea", "Fever", "Mesiopathy"],
        ["Diarrhea", "Vomiting", "Mesiopathy"],
        ["Paralysis", "Headache", "Mesiopathy"],
        ["Paralysis", "Vomiting", "Ritengitis"],
        ["Paralysis", "Vomiting", "Ritengitis"],
    ];

    Table {
        columns: vec![
            "Symptom 1".to_string(),
            "Symptom 2".to_string(),
            "Disease".to_string(),
        ],
        rows: rows
            .iter()
            .map(|row| row.iter().map(|value| value.to_string()).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_table() {
        let table = symptom_table();
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.columns(), &["Symptom 1", "Symptom 2", "Disease"]);
        assert_eq!(
            table.column("Disease").unwrap(),
            vec!["Mesiopathy", "Mesiopathy", "Mesiopathy", "Ritengitis", "Ritengitis"]
        );
    }

    #[test]
    fn test_unique_keeps_first_appearance() {
        let table = symptom_table();
        assert_eq!(
            table.unique("Symptom 2").unwrap(),
            vec!["Fever", "Vomiting", "Headache"]
        );
        assert_eq!(
            table.unique("Symptom 1").unwrap(),
            vec!["Diarrhea", "Paralysis"]
        );
    }

    #[test]
    fn test_select() {
        let table = symptom_table();
        let selected = table.select(&["Symptom 2", "Symptom 1"]).unwrap();
        assert_eq!(selected[0], vec!["Fever", "Diarrhea"]);
        assert!(table.select(&["Symptom 3"]).is_err());
    }

    #[test]
    fn test_ragged_row() {
        let result = Table::from_rows(vec!["a", "b"], vec![vec!["1", "2"], vec!["3"]]);
        assert!(matches!(result, Err(SaplingError::Dataset(_))));
    }
}
