use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("No records to compute metrics over")]
    EmptyInput,

    #[error("An unexpected error occurred during analytics calculation: {0}")]
    InternalError(String),
}

