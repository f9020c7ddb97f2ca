use entgen_codegen::{
    graph::Edge,
    template::{Emitter, Scope, TemplateError},
};

use super::{EDGES, literal};
use crate::{Field, Fn, Impl, Param, RustFile, Struct};

/// The edges struct and its accessors. Renders nothing for entities
/// without edges.
pub(super) fn edges(_: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let entity = scope.require_entity(EDGES)?;
    if !entity.has_edges() {
        return Ok(String::new());
    }

    let name = entity.edges_name();
    let holder = Struct::new(&name)
        .doc(format!(
            "Neighbours of a {} loaded by a query.",
            entity.name
        ))
        .derive("Debug")
        .derive("Clone")
        .derive("Default")
        .fields(entity.edges.iter().map(|edge| {
            Field::new(edge.struct_field(), format!("entgen_runtime::Edge<{}>", loaded_type(edge)))
                .doc_opt(edge.comment.as_deref())
        }));

    let accessors = entity
        .edges
        .iter()
        .fold(Impl::new(&name), |accessors, edge| accessors.method(accessor(edge)));

    Ok(RustFile::new().add(holder).add(accessors).render())
}

fn target(edge: &Edge) -> String {
    format!("super::{}", edge.target)
}

fn loaded_type(edge: &Edge) -> String {
    if edge.unique {
        format!("Option<Box<{}>>", target(edge))
    } else {
        format!("Vec<{}>", target(edge))
    }
}

fn accessor(edge: &Edge) -> Fn {
    let member = edge.struct_field();
    let name = literal(&edge.name);
    let method = Fn::new(format!("{member}_or_err")).param(Param::self_ref());

    if edge.unique {
        method
            .doc(format!(
                "The {name} edge, or an error if it was not loaded or no {} was found.",
                edge.target
            ))
            .returns(format!("Result<&{}, entgen_runtime::EdgeError>", target(edge)))
            .body_lines([
                format!("self.{member}"),
                format!("    .get({name})?"),
                "    .as_deref()".to_string(),
                format!("    .ok_or(entgen_runtime::EdgeError::NotFound {{ edge: {name} }})"),
            ])
    } else {
        method
            .doc(format!(
                "The {name} edge, or an error if it was not loaded."
            ))
            .returns(format!(
                "Result<&[{}], entgen_runtime::EdgeError>",
                target(edge)
            ))
            .body_line(format!("self.{member}.get({name}).map(Vec::as_slice)"))
    }
}
