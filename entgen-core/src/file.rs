use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// How an existing file at the destination is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Generated code: always replaced
    #[default]
    Replace,
    /// User-owned files such as schema scaffolds: written once
    CreateOnly,
}

/// Outcome of writing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file existed and the mode kept it
    Skipped,
}

/// A file entgen produces below some base directory.
pub trait GeneratedFile {
    fn path(&self, base: &Path) -> PathBuf;

    fn mode(&self) -> WriteMode {
        WriteMode::Replace
    }

    fn render(&self) -> String;

    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_file(&self.path(base), &self.render(), self.mode())
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str, mode: WriteMode) -> Result<WriteResult> {
    if mode == WriteMode::CreateOnly && path.exists() {
        return Ok(WriteResult::Skipped);
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(WriteResult::Written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_replace_creates_dirs_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ent").join("user.rs");

        write_file(&path, "old", WriteMode::Replace).unwrap();
        let result = write_file(&path, "new", WriteMode::Replace).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_create_only_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.toml");
        fs::write(&path, "name = \"User\"\n").unwrap();

        let result = write_file(&path, "overwritten", WriteMode::CreateOnly).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "name = \"User\"\n");
    }

    #[test]
    fn test_generated_file_uses_its_mode() {
        struct Scaffold;

        impl GeneratedFile for Scaffold {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("pet.toml")
            }

            fn mode(&self) -> WriteMode {
                WriteMode::CreateOnly
            }

            fn render(&self) -> String {
                "name = \"Pet\"\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        assert_eq!(Scaffold.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Scaffold.write(temp.path()).unwrap(), WriteResult::Skipped);
    }
}
