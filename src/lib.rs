//! nbdeps - Check and install the Python packages a Jupyter notebook imports.
//!
//! nbdeps scans a notebook's code cells for `import` statements, looks each
//! top-level module up in a Python environment, offers to `pip install` the
//! missing ones, and prints a report.
//!
//! # Modules
//!
//! - [`check`] - End-to-end check pipeline
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Version pins and other check settings
//! - [`deps`] - Dependency resolution and installation
//! - [`environment`] - Installed-package lookup
//! - [`error`] - Error types and result aliases
//! - [`notebook`] - Notebook parsing and import scanning
//! - [`process`] - External process execution
//! - [`report`] - Table, CSV and JSON report output
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use nbdeps::notebook::{scan_imports, Notebook};
//! use std::path::Path;
//!
//! let json = r#"{"cells": [{"cell_type": "code",
//!     "source": ["import numpy as np\n", "from pandas.core import frame\n"]}]}"#;
//! let notebook = Notebook::parse(json, Path::new("example.ipynb")).unwrap();
//! let imports: Vec<_> = scan_imports(&notebook).into_iter().collect();
//! assert_eq!(imports, vec!["numpy", "pandas"]);
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod deps;
pub mod environment;
pub mod error;
pub mod notebook;
pub mod process;
pub mod report;
pub mod ui;

pub use error::{NbdepsError, Result};
