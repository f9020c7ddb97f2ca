//! Rendered output held in memory until the whole graph has rendered.
//!
//! A failing entity aborts the run before [`FileRegistry::write_all`] is
//! reached, so output is never half written.
//!
//! ```
//! use entgen_codegen::generation::{FileEntry, FileRegistry};
//!
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::module("mod.rs", "pub mod user;\n")).unwrap();
//! registry.register(FileEntry::entity("user.rs", "pub struct User;\n")).unwrap();
//!
//! let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
//! assert_eq!(paths, ["user.rs", "mod.rs"]);
//! ```

use std::path::Path;

use entgen_core::{WriteMode, write_file};
use eyre::{Result, bail};
use indexmap::IndexMap;
use log::debug;

/// What a file holds; entries are listed and written in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    /// `<module>.rs` of one entity
    Entity,
    /// Output of an extra graph-scoped template
    Template,
    /// `mod.rs`
    Module,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Entity => "entity",
            FileCategory::Template => "template",
            FileCategory::Module => "module",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative to the output directory
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn entity(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::of(FileCategory::Entity, path, content)
    }

    pub fn template(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::of(FileCategory::Template, path, content)
    }

    pub fn module(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::of(FileCategory::Module, path, content)
    }

    fn of(category: FileCategory, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }
}

/// Rendered files keyed by relative path.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: IndexMap<String, FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry`. A path can only be produced once per run.
    pub fn register(&mut self, entry: FileEntry) -> Result<()> {
        if let Some(existing) = self.files.get(&entry.path) {
            bail!(
                "'{}' is generated twice (as {} and as {})",
                entry.path,
                existing.category.as_str(),
                entry.category.as_str()
            );
        }
        self.files.insert(entry.path.clone(), entry);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.files.get(path)
    }

    /// Entries by category, then registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut entries: Vec<_> = self.files.values().collect();
        entries.sort_by_key(|entry| entry.category);
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Copies of every entry, in write order.
    pub fn preview(&self) -> Vec<FileEntry> {
        self.entries().cloned().collect()
    }

    /// Write every entry below `base`, replacing existing files. Returns
    /// the written paths in write order.
    pub fn write_all(&self, base: &Path) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.len());
        for entry in self.entries() {
            let path = base.join(&entry.path);
            write_file(&path, &entry.content, WriteMode::Replace)?;
            debug!("wrote {}", path.display());
            written.push(entry.path.clone());
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_entries_follow_category_order() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::module("mod.rs", "")).unwrap();
        registry.register(FileEntry::template("debug.rs", "")).unwrap();
        registry.register(FileEntry::entity("user.rs", "")).unwrap();
        registry.register(FileEntry::entity("pet.rs", "")).unwrap();

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["user.rs", "pet.rs", "debug.rs", "mod.rs"]);
    }

    #[test]
    fn test_path_collision() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::entity("user.rs", "a")).unwrap();
        let err = registry
            .register(FileEntry::template("user.rs", "b"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "'user.rs' is generated twice (as entity and as template)"
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("user.rs").unwrap().content, "a");
    }

    #[test]
    fn test_write_all_replaces_stale_output() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("ent");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("user.rs"), "stale").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::module("mod.rs", "mod")).unwrap();
        registry.register(FileEntry::entity("user.rs", "fresh")).unwrap();

        let written = registry.write_all(&target).unwrap();

        assert_eq!(written, ["user.rs", "mod.rs"]);
        assert_eq!(fs::read_to_string(target.join("user.rs")).unwrap(), "fresh");
    }

    #[test]
    fn test_preview_is_in_write_order() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::module("mod.rs", "b")).unwrap();
        registry.register(FileEntry::entity("user.rs", "a")).unwrap();

        let preview = registry.preview();
        assert_eq!(preview[0].path, "user.rs");
        assert_eq!(preview[0].content, "a");
        assert_eq!(preview[1].category, FileCategory::Module);
    }
}
