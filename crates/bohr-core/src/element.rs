//! Element input data for the diagram engine.

use std::fmt;

use serde::Deserialize;

/// One chemical element as consumed by the layout engine and scheduler.
///
/// `shells[i]` holds the electron count of shell `i`, innermost first.
/// The engine trusts this data: it does not check that the shell counts
/// sum to the atomic number, and malformed records produce a sparser
/// diagram rather than an error.
///
/// # Examples
///
/// ```
/// # use bohr_core::element::ElementData;
/// let sodium = ElementData::new(11, "Na", "Sodium", vec![2, 8, 1]);
/// assert_eq!(sodium.shell_count(), 3);
/// assert_eq!(sodium.electron_count(), 11);
/// assert_eq!(sodium.shell_summary(), "2 - 8 - 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ElementData {
    atomic_number: u32,
    symbol: String,
    name: String,
    shells: Vec<u32>,
}

impl ElementData {
    pub fn new(
        atomic_number: u32,
        symbol: impl Into<String>,
        name: impl Into<String>,
        shells: Vec<u32>,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.into(),
            name: name.into(),
            shells,
        }
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Electron counts per shell, innermost first.
    pub fn shells(&self) -> &[u32] {
        &self.shells
    }

    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    /// Total number of electrons across all shells.
    pub fn electron_count(&self) -> u32 {
        self.shells.iter().sum()
    }

    /// Shell counts joined for display, e.g. `"2 - 8 - 1"`.
    pub fn shell_summary(&self) -> String {
        self.shells
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

impl fmt::Display for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, Z={})", self.name, self.symbol, self.atomic_number)
    }
}
