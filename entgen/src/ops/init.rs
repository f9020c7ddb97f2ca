//! Init operation - schema scaffolding.

use std::path::Path;

use entgen_core::{GeneratedFile, WriteResult};
use entgen_schema::SchemaFile;
use eyre::{Context, Result};

use crate::reports::InitReport;

/// Create `target` and write a schema file for each entity into it.
/// Existing files are left alone.
pub fn init(files: &[SchemaFile], target: &Path) -> Result<InitReport> {
    std::fs::create_dir_all(target)
        .wrap_err_with(|| format!("failed to create {}", target.display()))?;

    let mut report = InitReport {
        target: target.to_path_buf(),
        created: Vec::new(),
        skipped: Vec::new(),
    };

    for file in files {
        let path = file.path(target);
        let written = file
            .write(target)
            .wrap_err_with(|| format!("failed to create schema for {}", file.name()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match written {
            WriteResult::Written => report.created.push(name),
            WriteResult::Skipped => report.skipped.push(name),
        }
    }

    Ok(report)
}
