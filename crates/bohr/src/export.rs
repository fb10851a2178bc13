//! Export functionality for Bohr diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a composed scene into an output format. It is the final stage in
//! the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Query
//!     ↓ lookup
//! ElementData
//!     ↓ layout + schedule
//! Scene (positioned, timed primitives)
//!     ↓ export (this module)
//! Output document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: animated SVG via [`svg::SvgBuilder`] and [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`BohrError::Export`] at the crate boundary.
//!
//! [`BohrError::Export`]: crate::BohrError::Export

/// SVG export backend.
pub mod svg;

use bohr_core::{element::ElementData, scene::Scene};

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Renders `scene` for `element` into the backend's output format.
    ///
    /// `element` supplies the text content (symbol, name, shell summary);
    /// all positions and delays come from `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format.
    fn export_scene(&self, scene: &Scene, element: &ElementData) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
