//! Error types for gantt-chart-maker.
//!
//! Every error is terminal for the action that triggered it and leaves the
//! task store untouched. Skipped CSV rows are not errors.

use thiserror::Error;

/// Main error type for chart generation, import/export and task entry.
#[derive(Error, Debug)]
pub enum Error {
    /// Chart generation was requested with zero tasks.
    #[error("No tasks to display")]
    EmptyInput,

    /// A required CSV column is absent from the header row.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Any other failure while reading a CSV file.
    #[error("Failed to import: {0}")]
    ImportFailure(String),

    /// A task entry is missing a required field.
    #[error("Please fill in all fields ({0} is required)")]
    Validation(String),

    /// A task's bar would run past the last representable date.
    #[error("Dates of task '{0}' are out of range")]
    DateOutOfRange(String),

    #[error("Task index {index} is out of range ({len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short title for a user-facing dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Error::EmptyInput => "No Data",
            Error::MissingColumn(_) | Error::ImportFailure(_) => "Import Error",
            Error::Validation(_) | Error::DateOutOfRange(_) => "Input Error",
            Error::IndexOutOfRange { .. } => "No Selection",
            Error::Io(_) | Error::Csv(_) | Error::Json(_) => "Error",
        }
    }

    /// Whether the condition is a warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::IndexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_column() {
        let err = Error::MissingColumn("End_Date".to_string());
        assert_eq!(err.to_string(), "Missing column: End_Date");
        assert_eq!(err.title(), "Import Error");
        assert!(!err.is_warning());
    }

    #[test]
    fn empty_input_is_a_warning() {
        assert!(Error::EmptyInput.is_warning());
        assert_eq!(Error::EmptyInput.title(), "No Data");
    }
}
