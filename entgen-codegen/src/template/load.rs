//! Loading external template sources from the file system.

use std::path::{Path, PathBuf};

use log::debug;

use super::{TemplateError, TemplateRegistry};

/// Extension of template files picked up from directories.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

impl TemplateRegistry {
    /// Load a template file, or every `*.tmpl` file directly inside a
    /// directory (sorted by file name). Returns the names defined.
    pub fn load_path(&mut self, path: &Path) -> Result<Vec<String>, TemplateError> {
        self.load(path, false)
    }

    /// Like [`load_path`](Self::load_path), descending into subdirectories.
    pub fn load_tree(&mut self, path: &Path) -> Result<Vec<String>, TemplateError> {
        self.load(path, true)
    }

    /// Load several sources in order; later sources override earlier ones.
    pub fn load_paths<I, P>(&mut self, paths: I) -> Result<Vec<String>, TemplateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut names = Vec::new();
        for path in paths {
            names.extend(self.load_path(path.as_ref())?);
        }
        Ok(names)
    }

    fn load(&mut self, path: &Path, recursive: bool) -> Result<Vec<String>, TemplateError> {
        let metadata = std::fs::metadata(path).map_err(|e| TemplateError::io(path, e))?;
        if !metadata.is_dir() {
            return self.load_file(path);
        }

        let mut names = Vec::new();
        for file in template_files(path, recursive)? {
            names.extend(self.load_file(&file)?);
        }
        Ok(names)
    }

    fn load_file(&mut self, path: &Path) -> Result<Vec<String>, TemplateError> {
        let text = std::fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let names = self.parse(&path.display().to_string(), stem, &text)?;
        debug!("loaded templates {:?} from {}", names, path.display());
        Ok(names)
    }
}

fn template_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, TemplateError> {
    let entries = std::fs::read_dir(dir).map_err(|e| TemplateError::io(dir, e))?;

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TemplateError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| TemplateError::io(&path, e))?;
        if file_type.is_dir() {
            if recursive {
                dirs.push(path);
            }
        } else if path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
            files.push(path);
        }
    }

    files.sort();
    dirs.sort();
    for sub in dirs {
        files.extend(template_files(&sub, true)?);
    }
    Ok(files)
}
