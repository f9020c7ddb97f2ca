//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Entity names in schema order.
    pub entities: Vec<String>,
    /// Identifier type used for every entity.
    pub id_type: String,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Written paths, relative to the output directory.
    pub files: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A file that would be generated.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => {
                out.section(&format!("Entities ({})", self.entities.len()));
                for entity in &self.entities {
                    out.list_item(entity);
                }
                out.newline();
                out.key_value("ID type", &self.id_type);
                out.key_value("Generated", &written.output_dir.display().to_string());
                for file in &written.files {
                    out.added_item(file);
                }
            }
            GenerationResult::Preview(preview) => {
                for file in &preview.files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} files would be generated",
                    preview.files.len()
                ));
            }
        }
    }
}
