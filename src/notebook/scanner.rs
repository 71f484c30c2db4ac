//! Import statement scanning.
//!
//! Matches `import X` and `from X import Y` at the start of a line (after
//! optional indentation) and keeps the top-level package of `X`. This is a
//! line regex, not a Python parser: multi-line imports and every name after
//! the first in `import a, b` are not seen.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::Notebook;

static IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:import|from)\s+([\w.]+)").expect("IMPORT_REGEX must compile")
});

/// Extract the top-level module imported by a source line, if any.
///
/// Returns `None` for lines that are not import statements and for relative
/// imports (`from . import x`), whose first segment is empty.
pub fn top_level_module(line: &str) -> Option<&str> {
    let captures = IMPORT_REGEX.captures(line)?;
    let name = captures.get(1)?.as_str();
    name.split('.').next().filter(|s| !s.is_empty())
}

/// Collect the unique top-level modules imported by a notebook's code cells.
pub fn scan_imports(notebook: &Notebook) -> BTreeSet<String> {
    let imports: BTreeSet<String> = notebook
        .code_lines()
        .filter_map(top_level_module)
        .map(str::to_string)
        .collect();

    tracing::debug!("Found {} top-level imports", imports.len());
    imports
}
