use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error(
        "Could not detect header row. Expected at least 3 of these columns: {}",
        .expected.join(", ")
    )]
    HeaderNotFound { expected: Vec<String> },

    #[error("Invalid file type: {0}. Allowed types: .xls, .xlsx, .csv")]
    UnsupportedFileType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no worksheets: {0}")]
    EmptyWorkbook(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

impl StatementError {
    /// True for problems the caller can only fix by supplying a different file.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::HeaderNotFound { .. } | Self::UnsupportedFileType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StatementError>;
