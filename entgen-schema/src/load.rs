//! Loading schema documents from the file system.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{EntitySpec, Error, Result, SchemaSpec, parse::parse_str};

/// Load a schema from a single file or from a directory of `*.toml` files.
///
/// Directories are read shallowly and their files are loaded in file name
/// order, so entity order is the same on every run.
pub fn load(path: impl AsRef<Path>) -> Result<SchemaSpec> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;

    if metadata.is_dir() {
        load_dir(path)
    } else {
        Ok(SchemaSpec::new([load_file(path)?]))
    }
}

/// Load one schema document.
pub fn load_file(path: impl AsRef<Path>) -> Result<EntitySpec> {
    let path = path.as_ref();
    debug!("loading schema file {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_str(&content, &path.display().to_string())
}

fn load_dir(path: &Path) -> Result<SchemaSpec> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        let file = entry.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == "toml") {
            files.push(file);
        }
    }

    if files.is_empty() {
        return Err(Box::new(Error::NoEntities {
            path: path.to_path_buf(),
        }));
    }

    files.sort();
    debug!("found {} schema file(s) in {}", files.len(), path.display());

    files
        .iter()
        .map(load_file)
        .collect::<Result<Vec<_>>>()
        .map(SchemaSpec::new)
}
