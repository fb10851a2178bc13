//! Element dataset and lookup for Bohr diagrams.
//!
//! [`PeriodicTable::builtin`] provides all 118 elements with their shell
//! configurations; [`PeriodicTable::from_toml_str`] loads a custom dataset.
//! [`PeriodicTable::lookup`] resolves user text (a name, symbol or atomic
//! number, case-insensitive) to an [`ElementData`](bohr_core::element::ElementData).
//!
//! ```
//! # use bohr_data::PeriodicTable;
//! let table = PeriodicTable::builtin();
//! let sodium = table.lookup(" na ").unwrap();
//! assert_eq!(sodium.shells(), &[2, 8, 1]);
//! ```

mod builtin;
pub mod error;
mod table;

pub use error::{ErrorCode, LookupError};
pub use table::PeriodicTable;
