//! Templates producing whole files.

use entgen_codegen::template::{Emitter, Scope, TemplateError};

use super::{COLUMNS, DECODE_MANY, DECODE_ONE, EDGES, ENTITY, ENUM, HEADER, MODEL, SCAN};
use crate::{Impl, RawCode, RustFile};

/// The configured header, verbatim.
pub(super) fn header(emitter: &Emitter<'_>, _: &Scope<'_>) -> Result<String, TemplateError> {
    Ok(emitter.graph().config().header.clone())
}

/// One entity module: model, enum types, collection alias, scan struct,
/// decoders and edges.
pub(super) fn entity(emitter: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let entity = scope.require_entity(ENTITY)?;
    let section = |name: &str| emitter.execute(name, scope).map(RawCode::new);

    let mut file = RustFile::new()
        .header(emitter.execute(HEADER, scope)?)
        .add(section(MODEL)?);

    for field in entity.enum_fields() {
        file.push(RawCode::new(emitter.execute(ENUM, &scope.with_field(field))?));
    }

    let plural = entity.plural();
    file.push(RawCode::lines([
        format!("/// {plural} is a list of {} records.", entity.name),
        format!("pub type {plural} = Vec<{}>;", entity.name),
    ]));
    file.push(section(SCAN)?);
    file.push(
        Impl::new(&entity.name)
            .text(emitter.execute(COLUMNS, scope)?)
            .text(emitter.execute(DECODE_ONE, scope)?)
            .text(emitter.execute(DECODE_MANY, scope)?),
    );
    file.push(section(EDGES)?);

    Ok(file.render())
}

/// `mod.rs`: one module per entity, each re-exported.
pub(super) fn module(emitter: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let graph = emitter.graph();
    let modules: Vec<String> = graph.entities().map(|entity| entity.module()).collect();

    Ok(RustFile::new()
        .header(emitter.execute(HEADER, scope)?)
        .add(RawCode::lines(
            modules.iter().map(|module| format!("pub mod {module};")),
        ))
        .add(RawCode::lines(
            modules.iter().map(|module| format!("pub use {module}::*;")),
        ))
        .render())
}
