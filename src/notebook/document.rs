//! Notebook document model.
//!
//! Only the parts of nbformat the scanner needs are modelled: the `cells`
//! list, each cell's `cell_type`, and the `source` of code cells. Everything
//! else in the document is ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{NbdepsError, Result};

/// Cell type marker for code cells.
pub const CODE_CELL: &str = "code";

/// A parsed notebook document.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    /// All cells in document order.
    pub cells: Vec<Cell>,
}

/// A single notebook cell.
#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    /// Cell type (`code`, `markdown`, `raw`).
    pub cell_type: String,

    /// Cell source. Required for code cells.
    #[serde(default)]
    pub source: Option<CellSource>,
}

/// Cell source as stored on disk.
///
/// nbformat writes a list of lines, but a single multi-line string is also
/// valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl CellSource {
    /// Iterate over the source lines.
    pub fn lines(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Lines(lines) => Box::new(lines.iter().map(|l| l.as_str())),
            Self::Text(text) => Box::new(text.lines()),
        }
    }
}

impl Cell {
    /// Check if this is a code cell.
    pub fn is_code(&self) -> bool {
        self.cell_type == CODE_CELL
    }
}

impl Notebook {
    /// Load a notebook from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NbdepsError::NotebookNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                NbdepsError::Io(e)
            }
        })?;

        let notebook = Self::parse(&contents, path)?;
        tracing::debug!(
            "Loaded notebook {} with {} cells",
            path.display(),
            notebook.cells.len()
        );
        Ok(notebook)
    }

    /// Parse notebook JSON. `path` is only used for error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let notebook: Notebook =
            serde_json::from_str(contents).map_err(|e| NbdepsError::NotebookParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let Some(index) = notebook
            .cells
            .iter()
            .position(|c| c.is_code() && c.source.is_none())
        {
            return Err(NbdepsError::NotebookParse {
                path: path.to_path_buf(),
                message: format!("code cell {} has no source", index),
            });
        }

        Ok(notebook)
    }

    /// Iterate over code cells.
    pub fn code_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_code())
    }

    /// Iterate over every source line of every code cell.
    pub fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.code_cells()
            .filter_map(|c| c.source.as_ref())
            .flat_map(|s| s.lines())
    }
}
