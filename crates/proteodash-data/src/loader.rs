//! Supplementary workbook loader.
//!
//! The dataset is a single `.xlsx` file with two sheets of interest:
//! - `S4B limma results`: per-gene logFC and adjusted p-values
//! - `S4A values`: per-gene sample measurements, one column per sample
//!
//! Both sheets carry a two-row title preamble, so the header is the third row.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader};
use proteodash_common::{ProteodashError, Result};
use tracing::{debug, info};

use crate::table::Table;

pub const DEFAULT_DATASET_PATH: &str = "data/NIHMS1635539-supplement-1635539_Sup_tab_4.xlsx";
pub const EXPRESSION_SHEET: &str = "S4B limma results";
pub const VALUES_SHEET: &str = "S4A values";
/// 0-based index of the header row within each sheet.
pub const DEFAULT_HEADER_ROW: usize = 2;

/// Where the two dataset tables come from.
///
/// Loading is blocking; async callers should run it on a blocking thread.
pub trait DatasetSource: Send + Sync {
    /// Load the limma results (expression) table.
    fn load_expression(&self) -> Result<Table>;

    /// Load the per-sample values table.
    fn load_values(&self) -> Result<Table>;
}

/// Reads both tables from a workbook on disk.
#[derive(Debug, Clone)]
pub struct XlsxDataset {
    pub path: PathBuf,
    pub expression_sheet: String,
    pub values_sheet: String,
    pub header_row: usize,
}

impl XlsxDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for XlsxDataset {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            expression_sheet: EXPRESSION_SHEET.to_string(),
            values_sheet: VALUES_SHEET.to_string(),
            header_row: DEFAULT_HEADER_ROW,
        }
    }
}

impl DatasetSource for XlsxDataset {
    fn load_expression(&self) -> Result<Table> {
        read_sheet(&self.path, &self.expression_sheet, self.header_row)
    }

    fn load_values(&self) -> Result<Table> {
        read_sheet(&self.path, &self.values_sheet, self.header_row)
    }
}

/// Read one named sheet, using row `header_row` (0-based) as the header.
pub fn read_sheet(path: &Path, sheet: &str, header_row: usize) -> Result<Table> {
    if !path.exists() {
        return Err(ProteodashError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("dataset not found at {}", path.display()),
        )));
    }

    info!(path = %path.display(), sheet, "Loading sheet");

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ProteodashError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|s| s == sheet) {
        debug!(available = ?sheet_names, "Requested sheet missing");
        return Err(ProteodashError::SheetNotFound(sheet.to_string()));
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| ProteodashError::Spreadsheet(format!("{}: {}", sheet, e)))?;

    let table = Table::from_range(&range, header_row)?;
    info!(sheet, n_rows = table.n_rows(), n_columns = table.n_columns(), "Loaded sheet");
    Ok(table)
}
