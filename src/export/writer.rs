// src/export/writer.rs

use crate::errors::AppResult;
use crate::export::{SessionExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export YAML (sequence of mappings).
pub(crate) fn export_yaml(rows: &[SessionExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to YAML: {}", path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut out, rows)?;
    out.flush()?;

    notify_export_success("YAML", path);
    Ok(())
}
