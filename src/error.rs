use thiserror::Error;

/// Convenience result type for the geophyte pipeline.
pub type GeophyteResult<T> = Result<T, GeophyteError>;

/// Error type returned by every stage of the pipeline.
///
/// All variants are fatal: the pipeline either runs to completion or aborts with one of these.
#[derive(Debug, Error)]
pub enum GeophyteError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet could not be opened or a sheet could not be read.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// The taxonomy file (or the report writer) hit a CSV error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook is readable but unusable (no sheets, unknown sheet name, ...).
    #[error("workbook error: {message}")]
    Workbook { message: String },

    /// A fixed header cell does not hold the expected column name.
    #[error("header mismatch at {cell}: expected '{expected}', got '{actual}'")]
    HeaderMismatch {
        cell: String,
        expected: String,
        actual: String,
    },

    /// A lookup failed because the two inputs disagree about a key.
    #[error("missing key '{key}' in {index} index")]
    MissingKey { index: &'static str, key: String },

    /// A botanical name is not at least a two-part "Genus species" name.
    #[error("malformed botanical name at row {row}: '{name}'")]
    MalformedName { row: usize, name: String },
}

impl GeophyteError {
    pub(crate) fn missing_key(index: &'static str, key: impl Into<String>) -> Self {
        Self::MissingKey {
            index,
            key: key.into(),
        }
    }
}
