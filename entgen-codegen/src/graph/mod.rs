//! Graph model: every entity of a schema with resolved field types and
//! edges, built once per generation run and read-only afterwards.
//!
//! # Example
//!
//! ```
//! use entgen_codegen::graph::{Config, Graph};
//! use entgen_schema::{EntitySpec, FieldSpec, SchemaSpec};
//!
//! let schema = SchemaSpec::new([EntitySpec::new("User").field(FieldSpec::new("age", "int"))]);
//! let graph = Graph::new(Config::default(), &schema).unwrap();
//!
//! let user = graph.entity("User").unwrap();
//! assert_eq!(user.columns(), ["id", "age"]);
//! ```

mod build;
mod describe;
mod types;

use std::path::PathBuf;

use entgen_core::IdType;
use indexmap::IndexMap;
pub use types::{Edge, Entity, EnumValue, Field, Rel};

/// Header prepended to every generated file unless configured otherwise.
pub const DEFAULT_HEADER: &str = "// Code generated by entgen, DO NOT EDIT.";

/// Generation settings supplied by the driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Type of the `id` field of every entity
    pub id_type: IdType,
    /// Text prepended verbatim to generated files
    pub header: String,
    /// External template sources, later entries override earlier ones
    pub templates: Vec<PathBuf>,
    /// Output directory
    pub target: PathBuf,
    /// Module name of the generated code
    pub package: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_type: IdType::default(),
            header: DEFAULT_HEADER.to_string(),
            templates: Vec::new(),
            target: PathBuf::from("ent"),
            package: "ent".to_string(),
        }
    }
}

impl Config {
    pub fn with_id_type(mut self, id_type: IdType) -> Self {
        self.id_type = id_type;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_templates(mut self, templates: impl IntoIterator<Item = PathBuf>) -> Self {
        self.templates = templates.into_iter().collect();
        self
    }

    /// Set the output directory. The package name follows the directory name.
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        if let Some(name) = self.target.file_name().and_then(|n| n.to_str()) {
            self.package = entgen_core::to_snake_case(name);
        }
        self
    }
}

/// The full set of entities, keyed by name in schema order.
#[derive(Debug, Clone)]
pub struct Graph {
    config: Config,
    entities: IndexMap<String, Entity>,
}

impl Graph {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Entities in schema declaration order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
