//! Notebook reading and import scanning.
//!
//! - [`document`] - nbformat JSON model and loading
//! - [`scanner`] - import statement extraction from code cells

pub mod document;
pub mod scanner;

pub use document::{Cell, CellSource, Notebook};
pub use scanner::{scan_imports, top_level_module};
