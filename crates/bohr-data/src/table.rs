//! The element dataset and text lookup.

use log::{debug, info};
use serde::Deserialize;

use bohr_core::element::ElementData;

use crate::{builtin::ELEMENTS, error::LookupError};

/// An ordered list of elements.
///
/// Lookup returns the first match in dataset order, so a custom dataset
/// can shadow an entry by listing it earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTable {
    elements: Vec<ElementData>,
}

/// On-disk dataset layout: a list of `[[element]]` tables.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default, rename = "element")]
    elements: Vec<ElementData>,
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PeriodicTable {
    /// Creates a table from elements in lookup order.
    pub fn new(elements: Vec<ElementData>) -> Self {
        Self { elements }
    }

    /// The full periodic table, hydrogen through oganesson.
    pub fn builtin() -> Self {
        let elements = ELEMENTS
            .iter()
            .map(|e| ElementData::new(e.atomic_number, e.symbol, e.name, e.shells.to_vec()))
            .collect();
        Self { elements }
    }

    /// Parses a dataset from TOML.
    ///
    /// ```
    /// # use bohr_data::PeriodicTable;
    /// let table = PeriodicTable::from_toml_str(r#"
    ///     [[element]]
    ///     atomic_number = 1
    ///     symbol = "H"
    ///     name = "Hydrogen"
    ///     shells = [1]
    /// "#).unwrap();
    /// assert_eq!(table.len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Dataset`] when the text is not valid TOML, a
    /// record is missing a field, or the dataset holds no elements.
    pub fn from_toml_str(source: &str) -> Result<Self, LookupError> {
        let file: DatasetFile = toml::from_str(source).map_err(|err| LookupError::Dataset {
            message: err.message().to_string(),
        })?;

        if file.elements.is_empty() {
            return Err(LookupError::Dataset {
                message: "dataset contains no `[[element]]` entries".to_string(),
            });
        }

        debug!(elements = file.elements.len(); "Loaded custom element dataset");

        Ok(Self::new(file.elements))
    }

    /// Returns the first element with the given atomic number.
    pub fn get(&self, atomic_number: u32) -> Option<&ElementData> {
        self.elements
            .iter()
            .find(|e| e.atomic_number() == atomic_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementData> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Resolves a free-text query to an element.
    ///
    /// The query is trimmed and lowercased, then compared exactly against
    /// each element's lowercased name, lowercased symbol, and decimal
    /// atomic number.
    ///
    /// # Errors
    ///
    /// [`LookupError::EmptyQuery`] for a blank query and
    /// [`LookupError::NotFound`] (echoing the untrimmed query) when nothing
    /// matches.
    pub fn lookup(&self, query: &str) -> Result<&ElementData, LookupError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let found = self.elements.iter().find(|e| {
            e.name().to_lowercase() == needle
                || e.symbol().to_lowercase() == needle
                || e.atomic_number().to_string() == needle
        });

        match found {
            Some(element) => {
                info!(query, element = element.name(); "Element found");
                Ok(element)
            }
            None => Err(LookupError::NotFound {
                query: query.to_string(),
            }),
        }
    }
}
