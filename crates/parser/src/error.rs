use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Required column '{0}' is missing from the header row")]
    MissingColumn(&'static str),

    /// `row` is the zero-based index of the data row (the header is not counted).
    #[error("Malformed row {row}: column '{column}' {reason}")]
    MalformedRow {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error("Failed to read delimited text: {0}")]
    Csv(#[from] csv::Error),
}
