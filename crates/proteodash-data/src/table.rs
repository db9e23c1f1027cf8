//! In-memory tabular sheet data.
//!
//! A [`Table`] is a header row plus data rows of loosely typed [`Cell`]s, the
//! shape a spreadsheet sheet has before any column is interpreted.

use std::collections::HashMap;

use calamine::{Data, Range};
use proteodash_common::{ProteodashError, Result};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Coerce to a float. Empty cells read as NaN; text must parse as a number.
    pub fn to_f64(&self, column: &str, row: usize) -> Result<f64> {
        match self {
            Cell::Number(n) => Ok(*n),
            Cell::Empty => Ok(f64::NAN),
            Cell::Text(s) => s.trim().parse::<f64>().map_err(|_| ProteodashError::NonNumeric {
                column: column.to_string(),
                row,
                value: s.clone(),
            }),
            Cell::Bool(b) => Err(ProteodashError::NonNumeric {
                column: column.to_string(),
                row,
                value: b.to_string(),
            }),
        }
    }

    /// Render the cell as text; empty cells render as "".
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// True when the cell holds exactly this text.
    ///
    /// Numeric cells never match, even when their rendering equals `other`.
    pub fn text_eq(&self, other: &str) -> bool {
        matches!(self, Cell::Text(s) if s == other)
    }
}

/// True for a cell with no content; an empty string counts as blank.
fn is_blank(data: &Data) -> bool {
    match data {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::String(s) => Cell::Text(s.clone()),
            other => Cell::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from raw header names and rows.
    ///
    /// Blank names become `Unnamed: <index>` and repeated names get a `.N`
    /// suffix, so every column is addressable by name. Short rows are padded
    /// with [`Cell::Empty`].
    pub fn new(header: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let columns = normalise_header(header);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Convert a calamine range, treating the absolute sheet row `header_row`
    /// (0-based) as the header and discarding everything above it. Fully blank
    /// rows below the header are dropped.
    pub fn from_range(range: &Range<Data>, header_row: usize) -> Result<Self> {
        // Ranges start at the first used cell, not at A1.
        let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
        let skip = header_row.checked_sub(first_row).ok_or_else(|| {
            ProteodashError::Spreadsheet(format!(
                "header row {} lies above the first used row {}",
                header_row, first_row
            ))
        })?;

        let mut rows = range.rows().skip(skip);
        let header: Vec<String> = rows
            .next()
            .ok_or_else(|| {
                ProteodashError::Spreadsheet(format!("sheet has no row {} to use as header", header_row))
            })?
            .iter()
            .map(|cell| Cell::from(cell).as_text())
            .collect();

        let data = rows
            .filter(|row| !row.iter().all(is_blank))
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();

        Ok(Self::new(header, data))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`Table::column_index`] but fails with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| ProteodashError::MissingColumn {
            column: name.to_string(),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}

fn normalise_header(header: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    header
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let name = if name.is_empty() { format!("Unnamed: {}", i) } else { name };
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 { name } else { format!("{}.{}", name, count) };
            *count += 1;
            unique
        })
        .collect()
}
