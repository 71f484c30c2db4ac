//! Report export: CSV file and JSON text.

use std::path::Path;

use anyhow::Context;

use crate::deps::DependencyEntry;
use crate::error::Result;

/// CSV header row.
pub const CSV_HEADERS: [&str; 4] = ["module", "installed", "version", "action"];

/// Write entries to a CSV file. An absent version is an empty field.
pub fn write_csv(path: &Path, entries: &[DependencyEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;

    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write report header")?;

    for entry in entries {
        let installed = entry.installed.to_string();
        writer
            .write_record([
                entry.module.as_str(),
                installed.as_str(),
                entry.version.as_deref().unwrap_or(""),
                entry.action.label(),
            ])
            .with_context(|| format!("Failed to write report row for {}", entry.module))?;
    }

    writer.flush()?;
    tracing::debug!("Wrote {} report rows to {}", entries.len(), path.display());
    Ok(())
}

/// Serialize entries as a pretty-printed JSON array.
pub fn to_json(entries: &[DependencyEntry]) -> Result<String> {
    let json = serde_json::to_string_pretty(entries).context("Failed to serialize report")?;
    Ok(json)
}
