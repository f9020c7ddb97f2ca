use std::fmt;

use entgen_core::{FieldType, is_rust_keyword, pluralize, to_snake_case};
use entgen_schema::EdgeDirection;

/// Names generated code already uses for its own locals.
const RESERVED_LOCALS: &[&str] = &["rows", "scan"];

fn escape_local(name: String) -> String {
    if is_rust_keyword(&name) || RESERVED_LOCALS.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// One entity of the graph.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub comment: Option<String>,
    /// Identifier field, always scanned first
    pub id: Field,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    /// Edges in declaration order
    pub edges: Vec<Edge>,
}

impl Entity {
    /// Module (and file stem) of the generated code
    pub fn module(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Name of the collection type. Names whose plural is the name itself
    /// get a `Slice` suffix.
    pub fn plural(&self) -> String {
        let plural = pluralize(&self.name);
        if plural == self.name {
            format!("{}Slice", self.name)
        } else {
            plural
        }
    }

    /// Local variable name used for one decoded record
    pub fn receiver(&self) -> String {
        escape_local(to_snake_case(&self.name))
    }

    /// Local variable name used for a decoded collection
    pub fn plural_receiver(&self) -> String {
        escape_local(to_snake_case(&self.plural()))
    }

    /// Table name: snake_case plural of the entity name
    pub fn table(&self) -> String {
        to_snake_case(&pluralize(&self.name))
    }

    /// Name of the private struct rows are scanned into
    pub fn scan_name(&self) -> String {
        format!("{}Scan", self.name)
    }

    /// Name of the struct holding loaded edges
    pub fn edges_name(&self) -> String {
        format!("{}Edges", self.name)
    }

    /// Column names in scan order: identifier first, then every field in
    /// declaration order.
    pub fn columns(&self) -> Vec<String> {
        std::iter::once(&self.id)
            .chain(&self.fields)
            .map(Field::column)
            .collect()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn enum_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.ty.is_enum())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.name == name)
    }
}

/// One field of an entity.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    /// Column may hold NULL
    pub optional: bool,
    /// Generated struct field is an `Option`
    pub nillable: bool,
    pub unique: bool,
    pub comment: Option<String>,
    /// Rust type of a `json` payload
    pub json_type: Option<String>,
    /// Name of the generated enum type of an `enum` field
    pub enum_type: Option<String>,
    pub enum_values: Vec<EnumValue>,
}

impl Field {
    /// A required field of the given type
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            nillable: false,
            unique: false,
            comment: None,
            json_type: None,
            enum_type: None,
            enum_values: Vec::new(),
        }
    }

    /// Column name in the result set
    pub fn column(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Member name in generated structs
    pub fn struct_field(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Type the column is stored as. Enums are stored as text.
    pub fn storage_type(&self) -> FieldType {
        match self.ty {
            FieldType::Enum => FieldType::String,
            other => other,
        }
    }
}

/// One allowed value of an enum field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value as stored in the column
    pub value: String,
    /// Generated variant name
    pub variant: String,
}

/// Cardinality of a relation, seen from the edge's own entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rel {
    O2O,
    O2M,
    M2O,
    M2M,
}

impl Rel {
    /// Relation of an owner edge, given the uniqueness of the owner edge and
    /// of its inverse (if one is declared).
    pub fn resolve(owner_unique: bool, inverse_unique: Option<bool>) -> Self {
        match (owner_unique, inverse_unique) {
            (true, None) | (true, Some(true)) => Rel::O2O,
            (false, None) | (false, Some(true)) => Rel::O2M,
            (true, Some(false)) => Rel::M2O,
            (false, Some(false)) => Rel::M2M,
        }
    }

    /// The same relation seen from the other side
    pub fn flip(self) -> Self {
        match self {
            Rel::O2M => Rel::M2O,
            Rel::M2O => Rel::O2M,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rel::O2O => "O2O",
            Rel::O2M => "O2M",
            Rel::M2O => "M2O",
            Rel::M2M => "M2M",
        }
    }
}

impl fmt::Display for Rel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edge of an entity.
#[derive(Debug, Clone)]
pub struct Edge {
    pub name: String,
    /// Entity this edge points at
    pub target: String,
    /// Entity holding the owner (`to`) side of the relation
    pub owner: String,
    pub direction: EdgeDirection,
    pub rel: Rel,
    /// Edge holds at most one neighbour
    pub unique: bool,
    /// Name of the counterpart edge on `target`, if declared
    pub inverse: Option<String>,
    pub comment: Option<String>,
}

impl Edge {
    pub fn is_inverse(&self) -> bool {
        self.direction == EdgeDirection::From
    }

    /// Member name in the generated edges struct
    pub fn struct_field(&self) -> String {
        to_snake_case(&self.name)
    }
}
