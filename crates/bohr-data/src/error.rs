//! Lookup errors.
//!
//! Every [`LookupError`] carries an [`ErrorCode`] so the command line can
//! print a stable code and a help line next to the message.

mod error_code;

use thiserror::Error;

pub use error_code::ErrorCode;

/// Failure to resolve a query or load a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter an element's name, symbol, or atomic number.")]
    EmptyQuery,

    /// `query` is the text exactly as the user typed it.
    #[error("Element \"{query}\" not found. Please check your input.")]
    NotFound { query: String },

    #[error("invalid element dataset: {message}")]
    Dataset { message: String },
}

impl LookupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyQuery => ErrorCode::L001,
            Self::NotFound { .. } => ErrorCode::L002,
            Self::Dataset { .. } => ErrorCode::L100,
        }
    }

    pub fn help(&self) -> &'static str {
        self.code().help()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(
            LookupError::EmptyQuery.to_string(),
            "Please enter an element's name, symbol, or atomic number."
        );
        assert_eq!(
            LookupError::NotFound {
                query: " Xyz".to_string()
            }
            .to_string(),
            "Element \" Xyz\" not found. Please check your input."
        );
    }

    #[test]
    fn test_lookup_error_codes() {
        assert_eq!(LookupError::EmptyQuery.code(), ErrorCode::L001);
        assert_eq!(
            LookupError::NotFound {
                query: "x".to_string()
            }
            .code(),
            ErrorCode::L002
        );
        assert_eq!(
            LookupError::Dataset {
                message: "bad".to_string()
            }
            .code(),
            ErrorCode::L100
        );
    }
}
