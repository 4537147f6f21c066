use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, StatsError};

/// A single non-empty cell value recovered from an export.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(value) => f.write_str(value),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// A flat row table with a unified column set. Cells that a source sheet did
/// not provide are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Option<Cell>>>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::default();
        for column in columns {
            table.add_column(column.into());
        }
        table
    }

    /// Appends a column if it is not already present and returns its index.
    pub fn add_column(&mut self, column: String) -> usize {
        if let Some(&idx) = self.index.get(&column) {
            return idx;
        }
        let idx = self.columns.len();
        self.index.insert(column.clone(), idx);
        self.columns.push(column);
        for row in &mut self.rows {
            row.push(None);
        }
        idx
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row given in column order. Short rows are padded with `None`,
    /// surplus cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<Option<Cell>>) {
        cells.resize(self.columns.len(), None);
        self.rows.push(cells);
    }

    /// Renames a column. Returns `false` if `from` is absent. When `to`
    /// already exists the call is a no-op returning `false`.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if self.index.contains_key(to) {
            return false;
        }
        match self.index.remove(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                self.index.insert(to.to_string(), idx);
                true
            }
            None => false,
        }
    }

    /// Replaces blank cells in `columns` with `value` and coerces every
    /// present value in those columns to text. Every listed column must exist
    /// unless the table has no rows, in which case it is added.
    pub fn fill_missing(&mut self, columns: &[&str], value: &str) -> Result<()> {
        for column in columns {
            let idx = match self.index.get(*column) {
                Some(&idx) => idx,
                None if self.rows.is_empty() => self.add_column(column.to_string()),
                None => return Err(StatsError::missing_column(column)),
            };
            for row in &mut self.rows {
                let text = match row[idx].take() {
                    Some(cell) => cell.to_string(),
                    None => value.to_string(),
                };
                row[idx] = Some(Cell::Text(text));
            }
        }
        Ok(())
    }

    /// Concatenates tables row-wise. The column set is the union of all
    /// headers in first-seen order.
    pub fn concat(tables: impl IntoIterator<Item = Table>) -> Table {
        let mut result = Table::default();
        for table in tables {
            let mapping: Vec<usize> = table
                .columns
                .iter()
                .map(|column| result.add_column(column.clone()))
                .collect();
            for row in table.rows {
                let mut cells = vec![None; result.columns.len()];
                for (source, cell) in row.into_iter().enumerate() {
                    cells[mapping[source]] = cell;
                }
                result.rows.push(cells);
            }
        }
        result
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(number, cells)| Row {
            table: self,
            number,
            cells,
        })
    }
}

/// Borrowed view over one data row with column-name based accessors.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    number: usize,
    cells: &'a [Option<Cell>],
}

impl<'a> Row<'a> {
    /// Zero-based data row number within the table.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Raw cell lookup; fails only when the column itself is unknown.
    pub fn value(&self, column: &str) -> Result<Option<&'a Cell>> {
        let idx = *self
            .table
            .index
            .get(column)
            .ok_or_else(|| StatsError::missing_column(column))?;
        Ok(self.cells[idx].as_ref())
    }

    /// Required text value.
    pub fn text(&self, column: &str) -> Result<String> {
        self.opt_text(column)?
            .ok_or_else(|| StatsError::MissingValue {
                column: column.to_string(),
                row: self.number,
            })
    }

    pub fn opt_text(&self, column: &str) -> Result<Option<String>> {
        Ok(self.value(column)?.map(Cell::to_string))
    }

    pub fn int(&self, column: &str) -> Result<i64> {
        let cell = self.required(column)?;
        let invalid = || StatsError::InvalidValue {
            column: column.to_string(),
            value: cell.to_string(),
        };
        match cell {
            Cell::Int(value) => Ok(*value),
            Cell::Float(value) if value.fract() == 0.0 => Ok(*value as i64),
            Cell::Text(value) => value.trim().parse().map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    pub fn float(&self, column: &str) -> Result<f64> {
        let cell = self.required(column)?;
        match cell {
            Cell::Int(value) => Ok(*value as f64),
            Cell::Float(value) => Ok(*value),
            Cell::Text(value) => value
                .trim()
                .trim_end_matches('%')
                .trim()
                .parse()
                .map_err(|_| StatsError::InvalidValue {
                    column: column.to_string(),
                    value: value.clone(),
                }),
            Cell::Bool(_) => Err(StatsError::InvalidValue {
                column: column.to_string(),
                value: cell.to_string(),
            }),
        }
    }

    fn required(&self, column: &str) -> Result<&'a Cell> {
        self.value(column)?.ok_or_else(|| StatsError::MissingValue {
            column: column.to_string(),
            row: self.number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Option<Cell> {
        Some(Cell::Text(value.to_string()))
    }

    #[test]
    fn concat_unions_columns_in_first_seen_order() {
        let mut first = Table::new(["Paper ID", "Title"]);
        first.push_row(vec![Some(Cell::Int(1)), text("A")]);
        let mut second = Table::new(["Paper ID", "Abstract"]);
        second.push_row(vec![Some(Cell::Int(2)), text("abs")]);

        let table = Table::concat([first, second]);

        assert_eq!(table.columns(), ["Paper ID", "Title", "Abstract"]);
        assert_eq!(table.len(), 2);
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].value("Abstract").unwrap(), None);
        assert_eq!(rows[1].value("Title").unwrap(), None);
        assert_eq!(rows[1].text("Abstract").unwrap(), "abs");
    }

    #[test]
    fn fill_missing_requires_listed_columns() {
        let mut table = Table::new(["Abstract"]);
        table.push_row(vec![None]);
        table.push_row(vec![Some(Cell::Float(3.0))]);

        table.fill_missing(&["Abstract"], "").unwrap();
        let values: Vec<_> = table.rows().map(|row| row.text("Abstract").unwrap()).collect();
        assert_eq!(values, ["", "3"]);

        let err = table.fill_missing(&["Reviewers"], "").unwrap_err();
        assert!(matches!(err, StatsError::MissingColumn { column } if column == "Reviewers"));
    }

    #[test]
    fn fill_missing_adds_columns_to_empty_tables() {
        let mut table = Table::default();
        table.fill_missing(&["Reviewers"], "").unwrap();
        assert!(table.has_column("Reviewers"));
        assert!(table.is_empty());
    }

    #[test]
    fn numeric_accessors_coerce_spreadsheet_values() {
        let mut table = Table::new(["Paper ID", "% Completed", "Bids"]);
        table.push_row(vec![Some(Cell::Float(42.0)), text("75%"), text("x")]);
        let row = table.rows().next().unwrap();

        assert_eq!(row.int("Paper ID").unwrap(), 42);
        assert_eq!(row.float("% Completed").unwrap(), 75.0);
        assert!(matches!(
            row.int("Bids"),
            Err(StatsError::InvalidValue { .. })
        ));
        assert!(matches!(
            row.text("Status"),
            Err(StatsError::MissingColumn { .. })
        ));
    }

    #[test]
    fn rename_column_keeps_position() {
        let mut table = Table::new(["Old", "Other"]);
        assert!(table.rename_column("Old", "New"));
        assert!(!table.rename_column("Old", "New"));
        assert_eq!(table.columns(), ["New", "Other"]);
        assert!(table.has_column("New"));
    }
}
