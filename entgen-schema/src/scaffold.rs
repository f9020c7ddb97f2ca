//! Blank schema documents for `entgen init`.

use std::path::{Path, PathBuf};

use entgen_core::{GeneratedFile, WriteMode, pluralize, to_snake_case};

use crate::{Error, Result, validate::validate_identifier};

/// A new schema document for one entity
#[derive(Debug, Clone)]
pub struct SchemaFile {
    name: String,
}

impl SchemaFile {
    /// Create a scaffold for `name`, which must be a valid identifier that
    /// begins with an uppercase letter.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(Box::new(Error::InvalidSchemaName {
                name,
                reason: "schema names must begin with an uppercase letter".to_string(),
            }));
        }
        if let Some(reason) = validate_identifier(&name) {
            return Err(Box::new(Error::InvalidSchemaName {
                name,
                reason: reason.to_string(),
            }));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl GeneratedFile for SchemaFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.toml", to_snake_case(&self.name)))
    }

    fn mode(&self) -> WriteMode {
        WriteMode::CreateOnly
    }

    fn render(&self) -> String {
        let name = &self.name;
        format!(
            r#"name = "{name}"
comment = "{name} holds the schema definition for the {name} entity."

# Fields of the {name}.
#
# [[fields]]
# name = "name"
# type = "string"

# Edges of the {name}.
#
# [[edges]]
# name = "owner"
# target = "User"
# direction = "from"
# ref = "{edge}"
"#,
            edge = to_snake_case(&pluralize(name)),
        )
    }
}
