//! Pure-data description of a schema, as produced by the loader.
//!
//! Specs can also be assembled in code, which is how the generator's own
//! tests describe their graphs:
//!
//! ```
//! use entgen_schema::{EdgeSpec, EntitySpec, FieldSpec};
//!
//! let user = EntitySpec::new("User")
//!     .field(FieldSpec::new("age", "int"))
//!     .field(FieldSpec::new("nickname", "string").optional().nillable())
//!     .edge(EdgeSpec::to("pets", "Pet"));
//! assert_eq!(user.fields.len(), 2);
//! ```

use miette::SourceSpan;
use serde::Deserialize;

use crate::SourceContext;

/// All entities of a schema, in load order.
#[derive(Debug, Clone, Default)]
pub struct SchemaSpec {
    pub entities: Vec<EntitySpec>,
}

impl SchemaSpec {
    pub fn new(entities: impl IntoIterator<Item = EntitySpec>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    pub fn entity(&self, name: &str) -> Option<&EntitySpec> {
        self.entities.iter().find(|e| e.name == name)
    }
}

/// One entity declaration.
#[derive(Debug, Clone)]
pub struct EntitySpec {
    pub name: String,
    pub comment: Option<String>,
    /// Fields in declaration order
    pub fields: Vec<FieldSpec>,
    /// Edges in declaration order
    pub edges: Vec<EdgeSpec>,
    /// Document the entity was declared in
    pub source: SourceContext,
    pub span: Option<SourceSpan>,
}

impl EntitySpec {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            source: SourceContext::inline(&name),
            name,
            comment: None,
            fields: Vec::new(),
            edges: Vec::new(),
            span: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn edge(mut self, edge: EdgeSpec) -> Self {
        self.edges.push(edge);
        self
    }
}

/// A declared field. The type is kept as written; resolving it to a
/// logical type is the graph builder's job.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub type_name: String,
    /// Column may hold NULL
    pub optional: bool,
    /// Generated struct field is an `Option`
    pub nillable: bool,
    pub unique: bool,
    pub comment: Option<String>,
    /// Rust type of a `json` payload
    pub json_type: Option<String>,
    /// Allowed values of an `enum` field
    pub values: Vec<String>,
    pub span: Option<SourceSpan>,
    pub type_span: Option<SourceSpan>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            nillable: false,
            unique: false,
            comment: None,
            json_type: None,
            values: Vec::new(),
            span: None,
            type_span: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn nillable(mut self) -> Self {
        self.nillable = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn json(mut self, json_type: impl Into<String>) -> Self {
        self.json_type = Some(json_type.into());
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Which side of a relation an edge declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// Owner side
    #[default]
    To,
    /// Inverse side, backed by the owner's edge named in `ref`
    From,
}

/// A declared edge.
#[derive(Debug, Clone)]
pub struct EdgeSpec {
    pub name: String,
    pub target: String,
    pub direction: EdgeDirection,
    pub unique: bool,
    /// Name of the owner edge on `target` (inverse edges only)
    pub inverse: Option<String>,
    pub comment: Option<String>,
    pub span: Option<SourceSpan>,
    pub target_span: Option<SourceSpan>,
}

impl EdgeSpec {
    /// An owner-side edge pointing at `target`.
    pub fn to(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            direction: EdgeDirection::To,
            unique: false,
            inverse: None,
            comment: None,
            span: None,
            target_span: None,
        }
    }

    /// An inverse edge backed by the `to` edge `inverse` declared on `target`.
    pub fn inverse(
        name: impl Into<String>,
        target: impl Into<String>,
        inverse: impl Into<String>,
    ) -> Self {
        Self {
            direction: EdgeDirection::From,
            inverse: Some(inverse.into()),
            ..Self::to(name, target)
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
