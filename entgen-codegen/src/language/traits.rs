//! Language-agnostic code generation traits.

use std::path::Path;

use entgen_core::FieldType;
use eyre::Result;
use log::info;

use crate::{
    decode::ScanType,
    generation::{FileEntry, FileRegistry},
    graph::Field,
};

/// Trait for language-specific code generators.
///
/// Implementations render the whole graph into a [`FileRegistry`]; the
/// provided methods preview or write that registry. Because rendering
/// finishes before the first write, a run either writes every file or none.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// Render every output file in memory.
    fn render(&self) -> Result<FileRegistry>;

    /// Rendered files, without writing them
    fn preview(&self) -> Result<Vec<FileEntry>> {
        Ok(self.render()?.preview())
    }

    /// Render all files, then write them into `output_dir`. Returns the
    /// written paths relative to `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<Vec<String>> {
        let written = self.render()?.write_all(output_dir)?;
        info!(
            "generated {} {} files in {}",
            written.len(),
            self.language(),
            output_dir.display()
        );
        Ok(written)
    }
}

/// Trait for mapping field types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar field type to a language type
    fn map_field_type(&self, ty: FieldType) -> &'static str;

    /// Type of the generated struct member for `field`, including
    /// JSON payload types, enum types and nillable wrappers
    fn map_field(&self, field: &Field) -> String;

    /// Type a column is scanned into
    fn map_scan_type(&self, scan: ScanType) -> String;
}
