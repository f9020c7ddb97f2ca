use entgen_codegen::{
    language::TypeMapper,
    template::{Emitter, Scope, TemplateError},
};

use super::MODEL;
use crate::{Field, RustTypeMapper, Struct};

/// The entity struct: identifier, fields in declaration order, then the
/// loaded edges.
pub(super) fn model(emitter: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let entity = scope.require_entity(MODEL)?;
    let mapper = RustTypeMapper;
    let id_type = emitter.graph().config().id_type.field_type();

    let doc = entity.comment.clone().unwrap_or_else(|| {
        format!(
            "{} is the model entity for the {} schema.",
            entity.name, entity.name
        )
    });

    let mut model = Struct::new(&entity.name)
        .doc(doc)
        .derive("Debug")
        .derive("Clone")
        .field(
            Field::new(entity.id.struct_field(), mapper.map_field_type(id_type))
                .doc_opt(entity.id.comment.as_deref()),
        )
        .fields(entity.fields.iter().map(|field| {
            Field::new(field.struct_field(), mapper.map_field(field))
                .doc_opt(field.comment.as_deref())
        }));

    if entity.has_edges() {
        model = model.field(
            Field::new("edges", entity.edges_name())
                .doc("Relations loaded together with the entity."),
        );
    }

    Ok(model.build())
}
