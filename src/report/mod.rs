//! Dependency report rendering.
//!
//! - [`table`] - box-drawn table for the terminal
//! - [`export`] - CSV file and JSON output

pub mod export;
pub mod table;

pub use export::{to_json, write_csv, CSV_HEADERS};
pub use table::Table;

use crate::deps::DependencyEntry;

/// Column headers of the report table.
pub const TABLE_HEADERS: [&str; 4] = ["Module", "Installed", "Version", "Action"];

/// Placeholder for an absent version.
pub const NO_VERSION: &str = "-";

/// Render entries as a table.
pub fn render_table(entries: &[DependencyEntry]) -> String {
    let mut table = Table::new(TABLE_HEADERS.to_vec());

    for entry in entries {
        let installed = if entry.installed { "yes" } else { "no" };
        table.add_row(vec![
            entry.module.as_str(),
            installed,
            entry.version.as_deref().unwrap_or(NO_VERSION),
            entry.action.label(),
        ]);
    }

    table.render()
}

/// One-line summary, e.g. `5 modules, 2 missing`.
pub fn summary_line(entries: &[DependencyEntry]) -> String {
    let missing = entries.iter().filter(|e| !e.installed).count();
    let noun = if entries.len() == 1 { "module" } else { "modules" };
    format!("{} {}, {} missing", entries.len(), noun, missing)
}
