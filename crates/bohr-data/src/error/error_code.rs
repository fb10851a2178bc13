//! Error codes for element lookup.
//!
//! Error codes are organized by source:
//! - `L0xx` - Query errors
//! - `L1xx` - Dataset errors

use std::fmt;

/// Error codes for categorizing lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Query Errors (L0xx)
    // =========================================================================
    /// Empty query.
    ///
    /// The query was empty or contained only whitespace.
    L001,

    /// Element not found.
    ///
    /// No element in the dataset matches the query by name, symbol, or
    /// atomic number.
    L002,

    // =========================================================================
    // Dataset Errors (L1xx)
    // =========================================================================
    /// Invalid dataset.
    ///
    /// A custom element dataset could not be parsed.
    L100,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "L001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::L001 => "L001",
            ErrorCode::L002 => "L002",
            ErrorCode::L100 => "L100",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::L001 => "empty query",
            ErrorCode::L002 => "element not found",
            ErrorCode::L100 => "invalid element dataset",
        }
    }

    /// Returns a hint on how to fix the error.
    pub fn help(&self) -> &'static str {
        match self {
            ErrorCode::L001 => "enter a name (`sodium`), a symbol (`Na`) or an atomic number (`11`)",
            ErrorCode::L002 => {
                "names and symbols are matched case-insensitively; atomic numbers must be written without leading zeros"
            }
            ErrorCode::L100 => {
                "a dataset is a list of `[[element]]` tables with `atomic_number`, `symbol`, `name` and `shells`"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
