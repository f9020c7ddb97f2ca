//! Built-in templates of the Rust generator.
//!
//! Each concern of a generated entity module is a separately named template
//! so that an external source can override one piece without touching the
//! rest. The `entity` and `module` templates assemble whole files by
//! executing the others through the
//! [`Emitter`](entgen_codegen::template::Emitter), which is how overrides
//! reach them.

mod decode;
mod edges;
mod enums;
mod files;
mod model;

use entgen_codegen::{
    graph::Field,
    template::{Scope, TemplateError, TemplateRegistry},
};

/// File header text.
pub const HEADER: &str = "header";
/// Entity struct.
pub const MODEL: &str = "model";
/// Enum type of one enum field.
pub const ENUM: &str = "enum";
/// `COLUMNS` constant.
pub const COLUMNS: &str = "columns";
/// Private scan struct.
pub const SCAN: &str = "scan";
/// Single-record decode.
pub const DECODE_ONE: &str = "decode/one";
/// Collection decode.
pub const DECODE_MANY: &str = "decode/many";
/// Edges struct and accessors.
pub const EDGES: &str = "edges";
/// A whole entity file.
pub const ENTITY: &str = "entity";
/// The `mod.rs` file.
pub const MODULE: &str = "module";

/// A registry holding every built-in template.
pub fn builtin_templates() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register_builtin(HEADER, files::header);
    registry.register_builtin(MODEL, model::model);
    registry.register_builtin(ENUM, enums::enum_type);
    registry.register_builtin(COLUMNS, decode::columns);
    registry.register_builtin(SCAN, decode::scan_struct);
    registry.register_builtin(DECODE_ONE, decode::decode_one);
    registry.register_builtin(DECODE_MANY, decode::decode_many);
    registry.register_builtin(EDGES, edges::edges);
    registry.register_builtin(ENTITY, files::entity);
    registry.register_builtin(MODULE, files::module);
    registry
}

/// The field in scope, for templates executed once per field.
fn require_field<'a>(scope: &Scope<'a>, template: &str) -> Result<&'a Field, TemplateError> {
    scope.field.ok_or_else(|| TemplateError::OutOfScope {
        template: template.to_string(),
        name: "field".to_string(),
        scope: "fields",
    })
}

/// Render a string as a Rust string literal.
fn literal(value: &str) -> String {
    format!("{value:?}")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use entgen_codegen::graph::{Config, Graph};
    use entgen_core::IdType;
    use entgen_schema::{EdgeSpec, EntitySpec, FieldSpec, SchemaSpec};

    /// The User/Pet schema used across generator tests.
    pub fn schema() -> SchemaSpec {
        SchemaSpec::new([
            EntitySpec::new("User")
                .field(FieldSpec::new("age", "int"))
                .field(FieldSpec::new("name", "string"))
                .field(
                    FieldSpec::new("nickname", "string")
                        .optional()
                        .nillable()
                        .comment("Nickname shown instead of the name."),
                )
                .field(FieldSpec::new("tags", "json").json("Vec<String>"))
                .field(FieldSpec::new("status", "enum").values(["active", "in_review"]))
                .field(FieldSpec::new("created_at", "time"))
                .field(FieldSpec::new("last_seen", "time").optional().nillable())
                .field(FieldSpec::new("score", "float64").optional())
                .edge(EdgeSpec::to("pets", "Pet")),
            EntitySpec::new("Pet")
                .field(FieldSpec::new("name", "string"))
                .edge(EdgeSpec::inverse("owner", "User", "pets").unique()),
        ])
    }

    pub fn graph(id_type: IdType) -> Graph {
        Graph::new(Config::default().with_id_type(id_type), &schema()).unwrap()
    }
}
