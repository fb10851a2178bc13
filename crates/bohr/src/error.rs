//! Error types for Bohr diagram operations.
//!
//! This module provides the main error type [`BohrError`] which wraps
//! the error conditions of every pipeline stage.

use std::io;

use thiserror::Error;

use bohr_core::scene::SceneError;
use bohr_data::LookupError;

/// The main error type for Bohr diagram operations.
///
/// # Diagnostic Variants
///
/// The `Lookup` variant keeps the structured [`LookupError`] so callers can
/// report its error code and help text.
#[derive(Debug, Error)]
pub enum BohrError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for BohrError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<SceneError> for BohrError {
    fn from(error: SceneError) -> Self {
        Self::Layout(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use bohr_core::primitive::PrimitiveId;

    use super::*;

    #[test]
    fn test_lookup_error_is_transparent() {
        let err = BohrError::from(LookupError::EmptyQuery);
        assert_eq!(
            err.to_string(),
            "Please enter an element's name, symbol, or atomic number."
        );
    }

    #[test]
    fn test_scene_error_becomes_layout_error() {
        let err = BohrError::from(SceneError::MissingDelay(PrimitiveId::Shell(1)));
        assert!(matches!(err, BohrError::Layout(_)));
        assert_eq!(
            err.to_string(),
            "Layout error: no animation delay scheduled for `shell[1]`"
        );
    }

    #[test]
    fn test_export_error_message() {
        let err = BohrError::from(crate::export::Error::Render("empty".to_string()));
        assert_eq!(err.to_string(), "Export error: Render error: empty");
    }
}
