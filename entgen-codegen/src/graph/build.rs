//! Graph construction from a loaded schema.

use std::collections::HashMap;

use entgen_core::{FieldType, is_rust_keyword, to_pascal_case, to_snake_case};
use entgen_schema::{
    EdgeDirection, EdgeSpec, EntitySpec, FieldSpec, ParseContext, Result, SchemaSpec,
};
use indexmap::IndexMap;
use log::{debug, trace};

use super::{Config, Edge, Entity, EnumValue, Field, Graph, Rel};

impl Graph {
    /// Build the graph for `schema`.
    ///
    /// Entities keep the schema's order and fields keep their declaration
    /// order, so the same schema always yields the same graph.
    pub fn new(config: Config, schema: &SchemaSpec) -> Result<Self> {
        debug!(
            "building graph for {} entities (id type: {})",
            schema.entities.len(),
            config.id_type
        );

        let mut entities: IndexMap<String, Entity> = IndexMap::new();
        let mut declared_in: HashMap<&str, &EntitySpec> = HashMap::new();
        let mut modules: HashMap<String, &str> = HashMap::new();

        for spec in &schema.entities {
            if let Some(first) = declared_in.get(spec.name.as_str()) {
                return Err(spec.source.duplicate_entity_error(
                    &spec.name,
                    first.source.filename(),
                    spec.span,
                ));
            }
            declared_in.insert(&spec.name, spec);

            let entity = build_entity(&config, spec)?;
            let module = entity.module();
            if let Some(other) = modules.insert(module.clone(), &spec.name) {
                return Err(spec.source.validation_error(
                    format!(
                        "entities '{}' and '{}' both generate module '{}'",
                        other, spec.name, module
                    ),
                    spec.span,
                ));
            }
            trace!(
                "entity {} with {} fields and {} edges",
                entity.name,
                entity.fields.len(),
                spec.edges.len()
            );
            entities.insert(entity.name.clone(), entity);
        }

        for spec in &schema.entities {
            let edges = spec
                .edges
                .iter()
                .map(|edge| resolve_edge(schema, spec, edge))
                .collect::<Result<Vec<_>>>()?;
            if let Some(entity) = entities.get_mut(&spec.name) {
                entity.edges = edges;
            }
        }

        let graph = Self { config, entities };
        check_generated_names(&graph, &declared_in)?;
        Ok(graph)
    }
}

fn build_entity(config: &Config, spec: &EntitySpec) -> Result<Entity> {
    let ctx = ParseContext::new(spec.source.clone());
    ctx.validate_entity_name(&spec.name, spec.span)?;

    let module = to_snake_case(&spec.name);
    if is_rust_keyword(&module) {
        return Err(spec.source.reserved_keyword_error(
            module,
            format!("module of entity '{}'", spec.name),
            spec.span,
        ));
    }

    let entity_ctx = ctx.push(&spec.name);
    let mut columns: HashMap<String, &str> = HashMap::new();
    let mut fields = Vec::with_capacity(spec.fields.len());

    for field_spec in &spec.fields {
        entity_ctx.validate_field_name(&field_spec.name, field_spec.span)?;

        let field = build_field(spec, field_spec)?;
        let column = field.column();
        if is_rust_keyword(&column) {
            return Err(spec.source.reserved_keyword_error(
                column,
                format!("column of field '{}.{}'", spec.name, field.name),
                field_spec.span,
            ));
        }
        if let Some(other) = columns.insert(column.clone(), &field_spec.name) {
            return Err(spec.source.validation_error(
                format!(
                    "fields '{}' and '{}' of '{}' both map to column '{}'",
                    other, field_spec.name, spec.name, column
                ),
                field_spec.span,
            ));
        }
        fields.push(field);
    }

    let mut id = Field::new("id", config.id_type.field_type());
    id.unique = true;
    id.comment = Some("ID of the entity.".to_string());

    Ok(Entity {
        name: spec.name.clone(),
        comment: spec.comment.clone(),
        id,
        fields,
        edges: Vec::new(),
    })
}

fn build_field(entity: &EntitySpec, spec: &FieldSpec) -> Result<Field> {
    let source = &entity.source;
    let ty: FieldType = spec.type_name.parse().map_err(|_| {
        source.unknown_field_type_error(&entity.name, &spec.name, &spec.type_name, spec.type_span)
    })?;

    let invalid = |message: String| source.validation_error(message, spec.span);

    match (ty, &spec.json_type) {
        (FieldType::Json, None) => {
            return Err(invalid(format!(
                "json field '{}' requires a 'json_type'",
                spec.name
            )));
        }
        (FieldType::Json, Some(json_type)) if json_type.trim().is_empty() => {
            return Err(invalid(format!(
                "json field '{}' has an empty 'json_type'",
                spec.name
            )));
        }
        (other, Some(_)) if other != FieldType::Json => {
            return Err(invalid(format!(
                "'json_type' is only allowed on json fields, '{}' is {}",
                spec.name, other
            )));
        }
        _ => {}
    }

    let mut enum_type = None;
    let mut enum_values = Vec::new();
    if ty.is_enum() {
        if spec.values.is_empty() {
            return Err(invalid(format!(
                "enum field '{}' requires at least one value",
                spec.name
            )));
        }
        if spec.optional && !spec.nillable {
            return Err(invalid(format!(
                "optional enum field '{}' must also be nillable",
                spec.name
            )));
        }
        enum_values = enum_values_of(spec).map_err(invalid)?;
        enum_type = Some(format!(
            "{}{}",
            entity.name,
            to_pascal_case(&to_snake_case(&spec.name))
        ));
    } else if !spec.values.is_empty() {
        return Err(invalid(format!(
            "'values' is only allowed on enum fields, '{}' is {}",
            spec.name, ty
        )));
    }

    Ok(Field {
        name: spec.name.clone(),
        ty,
        optional: spec.optional,
        nillable: spec.nillable,
        unique: spec.unique,
        comment: spec.comment.clone(),
        json_type: spec.json_type.as_ref().map(|t| t.trim().to_string()),
        enum_type,
        enum_values,
    })
}

fn enum_values_of(spec: &FieldSpec) -> std::result::Result<Vec<EnumValue>, String> {
    let mut variants: HashMap<String, &str> = HashMap::new();
    let mut values = Vec::with_capacity(spec.values.len());

    for value in &spec.values {
        let variant = to_pascal_case(&to_snake_case(value));
        let valid = variant.starts_with(|c: char| c.is_ascii_alphabetic())
            && variant.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid || is_rust_keyword(&variant) {
            return Err(format!(
                "enum value '{}' of field '{}' is not a valid variant name",
                value, spec.name
            ));
        }
        if let Some(other) = variants.insert(variant.clone(), value) {
            return Err(format!(
                "enum values '{}' and '{}' of field '{}' both map to variant '{}'",
                other, value, spec.name, variant
            ));
        }
        values.push(EnumValue {
            value: value.clone(),
            variant,
        });
    }

    Ok(values)
}

fn resolve_edge(schema: &SchemaSpec, owner: &EntitySpec, spec: &EdgeSpec) -> Result<Edge> {
    let Some(target) = schema.entity(&spec.target) else {
        return Err(owner.source.dangling_edge_error(
            &owner.name,
            &spec.name,
            &spec.target,
            spec.target_span,
        ));
    };

    match spec.direction {
        EdgeDirection::To => {
            let inverse = target.edges.iter().find(|e| {
                e.direction == EdgeDirection::From
                    && e.target == owner.name
                    && e.inverse.as_deref() == Some(spec.name.as_str())
            });
            Ok(Edge {
                name: spec.name.clone(),
                target: spec.target.clone(),
                owner: owner.name.clone(),
                direction: EdgeDirection::To,
                rel: Rel::resolve(spec.unique, inverse.map(|e| e.unique)),
                unique: spec.unique,
                inverse: inverse.map(|e| e.name.clone()),
                comment: spec.comment.clone(),
            })
        }
        EdgeDirection::From => {
            let ref_name = spec.inverse.as_deref().unwrap_or_default();
            let Some(assoc) = target
                .edges
                .iter()
                .find(|e| e.direction == EdgeDirection::To && e.name == ref_name)
                .filter(|e| e.target == owner.name)
            else {
                return Err(owner.source.missing_inverse_error(
                    &owner.name,
                    &spec.name,
                    &spec.target,
                    ref_name,
                    spec.span,
                ));
            };

            let claimed = owner.edges.iter().find(|e| {
                e.direction == EdgeDirection::From
                    && e.target == spec.target
                    && e.inverse.as_deref() == Some(ref_name)
            });
            if let Some(first) = claimed.filter(|first| first.name != spec.name) {
                return Err(owner.source.validation_error(
                    format!(
                        "edges '{}' and '{}' of '{}' are both inverses of '{}.{}'",
                        first.name, spec.name, owner.name, spec.target, ref_name
                    ),
                    spec.span,
                ));
            }

            Ok(Edge {
                name: spec.name.clone(),
                target: spec.target.clone(),
                owner: spec.target.clone(),
                direction: EdgeDirection::From,
                rel: Rel::resolve(assoc.unique, Some(spec.unique)).flip(),
                unique: spec.unique,
                inverse: Some(ref_name.to_string()),
                comment: spec.comment.clone(),
            })
        }
    }
}

/// Generated type names must not collide, neither within one entity module
/// nor across the re-exports of the module file.
fn check_generated_names(graph: &Graph, specs: &HashMap<&str, &EntitySpec>) -> Result<()> {
    let mut owners: HashMap<String, String> = HashMap::new();

    for entity in graph.entities() {
        let mut names = vec![
            (entity.name.clone(), "entity".to_string()),
            (entity.plural(), format!("collection type of '{}'", entity.name)),
            (entity.scan_name(), format!("scan struct of '{}'", entity.name)),
        ];
        if entity.has_edges() {
            names.push((entity.edges_name(), format!("edges struct of '{}'", entity.name)));
        }
        for field in entity.enum_fields() {
            if let Some(enum_type) = &field.enum_type {
                names.push((
                    enum_type.clone(),
                    format!("enum type of '{}.{}'", entity.name, field.name),
                ));
            }
        }

        for (name, what) in names {
            if let Some(first) = owners.get(&name) {
                let span = specs.get(entity.name.as_str()).and_then(|s| s.span);
                let source = specs
                    .get(entity.name.as_str())
                    .map(|s| s.source.clone())
                    .unwrap_or_else(|| entgen_schema::SourceContext::inline(&entity.name));
                return Err(source.validation_error(
                    format!("generated name '{}' of the {} collides with the {}", name, what, first),
                    span,
                ));
            }
            owners.insert(name, what);
        }
    }

    Ok(())
}
