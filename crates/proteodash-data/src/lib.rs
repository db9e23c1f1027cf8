//! proteodash-data — Spreadsheet loading and reshaping for the proteomics dashboard.
//!
//! - [`loader`] reads the supplementary workbook into [`Table`]s
//! - [`volcano`] turns the limma results into volcano plot points
//! - [`boxplot`] groups one gene's sample values into young/old summaries

pub mod table;
pub mod loader;
pub mod volcano;
pub mod boxplot;
pub mod stats;

pub use table::{Cell, Table};
pub use loader::{DatasetSource, XlsxDataset};
pub use volcano::{prepare_volcano_data, VolcanoData, VolcanoPoint};
pub use boxplot::{prepare_boxplot_data, BoxplotData, GroupSummary};

/// Gene symbol column shared by both sheets.
pub const GENE_SYMBOL_COLUMN: &str = "EntrezGeneSymbol";
