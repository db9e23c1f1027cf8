use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProteodashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Column '{column}' missing from table")]
    MissingColumn { column: String },

    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    NonNumeric { column: String, row: usize, value: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network capabilities capped: {0}")]
    SecurityError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProteodashError>;
