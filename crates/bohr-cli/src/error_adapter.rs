//! Error adapter for converting BohrError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Lookup errors carry an error code and help text, and an unknown query is
//! shown as the source snippet with the whole query underlined.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use bohr::{BohrError, LookupError};

/// Adapter for a [`LookupError`].
pub struct LookupAdapter<'a> {
    err: &'a LookupError,
}

impl<'a> LookupAdapter<'a> {
    pub fn new(err: &'a LookupError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for LookupAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for LookupAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for LookupAdapter<'_> {}

impl MietteDiagnostic for LookupAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.help()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            LookupError::NotFound { query } => Some(query as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let LookupError::NotFound { query } = self.err else {
            return None;
        };

        let span = SourceSpan::new(0.into(), query.len());
        let label = LabeledSpan::new_primary_with_span(
            Some("no element has this name, symbol or atomic number".to_string()),
            span,
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for the remaining [`BohrError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, configuration errors, layout errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a BohrError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BohrError::Io(_) => "bohr::io",
            BohrError::Lookup(err) => return Some(Box::new(err.code())),
            BohrError::Config(_) => "bohr::config",
            BohrError::Layout(_) => "bohr::layout",
            BohrError::Export(_) => "bohr::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a lookup diagnostic or a plain error, providing a
/// uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A lookup failure with code, help and the query as source.
    Lookup(LookupAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Lookup(l) => fmt::Display::fmt(l, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Lookup(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Lookup(l) => l.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Lookup(l) => l.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Lookup(l) => l.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Lookup(l) => l.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`BohrError`] into a reportable error.
pub fn to_reportable(err: &BohrError) -> Reportable<'_> {
    match err {
        BohrError::Lookup(lookup) => Reportable::Lookup(LookupAdapter::new(lookup)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

/// Render a [`BohrError`] as a graphical miette report.
pub fn render_report(err: &BohrError, handler: &miette::GraphicalReportHandler) -> String {
    let mut out = String::new();
    if handler.render_report(&mut out, &to_reportable(err)).is_err() {
        // Writing into a String only fails if a Display impl does
        out = err.to_string();
    }
    out
}
