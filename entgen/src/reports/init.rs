//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema scaffolding.
#[derive(Debug)]
pub struct InitReport {
    /// Directory holding the schema files.
    pub target: PathBuf,
    /// Newly created file names.
    pub created: Vec<String>,
    /// File names that already existed.
    pub skipped: Vec<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.created.is_empty() {
            out.key_value("Created", &self.target.display().to_string());
            for file in &self.created {
                out.added_item(file);
            }
        }
        for file in &self.skipped {
            out.warning(&format!("{file} already exists, skipped"));
        }
    }
}
