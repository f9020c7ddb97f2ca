//! Schema document parsing.

use std::{collections::HashMap, path::Path};

use entgen_core::to_pascal_case;
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{
    EdgeDirection, EdgeSpec, EntitySpec, Error, FieldSpec, Result, SourceContext,
    validate::ParseContext,
};

/// One schema document as written
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntity {
    /// Defaults to the PascalCase file stem
    name: Option<Spanned<String>>,
    comment: Option<String>,
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: Spanned<String>,
    #[serde(rename = "type")]
    ty: Spanned<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    nillable: bool,
    #[serde(default)]
    unique: bool,
    comment: Option<String>,
    json_type: Option<String>,
    #[serde(default)]
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEdge {
    name: Spanned<String>,
    target: Spanned<String>,
    #[serde(default)]
    direction: EdgeDirection,
    #[serde(default)]
    unique: bool,
    #[serde(rename = "ref")]
    inverse: Option<Spanned<String>>,
    comment: Option<String>,
}

fn span_of<T>(spanned: &Spanned<T>) -> Option<SourceSpan> {
    Some(SourceSpan::from(spanned.span()))
}

/// Parse one schema document.
///
/// `filename` is used for error reporting and, when the document does not
/// declare a `name`, to derive the entity name from the file stem.
pub fn parse_str(content: &str, filename: &str) -> Result<EntitySpec> {
    let source = SourceContext::new(content, filename);
    let raw: RawEntity = toml::from_str(content).map_err(|e| source.parse_error(e))?;

    let (name, span) = match &raw.name {
        Some(name) => (name.get_ref().clone(), span_of(name)),
        None => {
            let stem = Path::new(filename)
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| source.validation_error("missing entity name", None))?;
            (to_pascal_case(stem), None)
        }
    };

    let (fields, edges) = {
        let ctx = ParseContext::new(source.clone());
        ctx.validate_entity_name(&name, span)?;

        let entity_ctx = ctx.push(&name);
        (
            parse_fields(&entity_ctx, &name, raw.fields)?,
            parse_edges(&entity_ctx, &name, raw.edges)?,
        )
    };

    Ok(EntitySpec {
        comment: raw.comment,
        fields,
        edges,
        source,
        span,
        name,
    })
}

fn parse_fields(ctx: &ParseContext, entity: &str, raw: Vec<RawField>) -> Result<Vec<FieldSpec>> {
    let mut seen: HashMap<String, Option<SourceSpan>> = HashMap::new();
    let mut fields = Vec::with_capacity(raw.len());

    for field in raw {
        let span = span_of(&field.name);
        let name = field.name.into_inner();
        ctx.validate_field_name(&name, span)?;

        if let Some(first_span) = seen.get(&name) {
            return Err(Box::new(Error::DuplicateField {
                src: ctx.source_context().named_source(),
                first_span: *first_span,
                second_span: span,
                entity: entity.to_string(),
                name,
            }));
        }
        seen.insert(name.clone(), span);

        fields.push(FieldSpec {
            type_span: span_of(&field.ty),
            type_name: field.ty.into_inner(),
            optional: field.optional,
            nillable: field.nillable,
            unique: field.unique,
            comment: field.comment,
            json_type: field.json_type,
            values: field.values,
            span,
            name,
        });
    }

    Ok(fields)
}

fn parse_edges(ctx: &ParseContext, entity: &str, raw: Vec<RawEdge>) -> Result<Vec<EdgeSpec>> {
    let mut seen: HashMap<String, Option<SourceSpan>> = HashMap::new();
    let mut edges = Vec::with_capacity(raw.len());

    for edge in raw {
        let span = span_of(&edge.name);
        let name = edge.name.into_inner();
        ctx.validate_name(&name, "edge", span)?;

        if let Some(first_span) = seen.get(&name) {
            return Err(Box::new(Error::DuplicateEdge {
                src: ctx.source_context().named_source(),
                first_span: *first_span,
                second_span: span,
                entity: entity.to_string(),
                name,
            }));
        }
        seen.insert(name.clone(), span);

        let target_span = span_of(&edge.target);
        ctx.validate_entity_name(edge.target.get_ref(), target_span)?;

        let inverse = match (edge.direction, edge.inverse) {
            (EdgeDirection::From, Some(inverse)) => Some(inverse.into_inner()),
            (EdgeDirection::From, None) => {
                return Err(ctx.source_context().validation_error(
                    format!("edge '{}' has direction \"from\" but no 'ref'", name),
                    span,
                ));
            }
            (EdgeDirection::To, Some(inverse)) => {
                return Err(ctx.source_context().validation_error(
                    "'ref' is only allowed on edges with direction \"from\"",
                    span_of(&inverse),
                ));
            }
            (EdgeDirection::To, None) => None,
        };

        edges.push(EdgeSpec {
            target: edge.target.into_inner(),
            direction: edge.direction,
            unique: edge.unique,
            comment: edge.comment,
            inverse,
            span,
            target_span,
            name,
        });
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"
name = "User"
comment = "User holds the schema definition for the User entity."

[[fields]]
name = "age"
type = "int"

[[fields]]
name = "nickname"
type = "string"
optional = true
nillable = true

[[fields]]
name = "tags"
type = "json"
json_type = "Vec<String>"

[[edges]]
name = "pets"
target = "Pet"
"#;

    #[test]
    fn test_parse_entity() {
        let user = parse_str(USER, "schema/user.toml").unwrap();
        assert_eq!(user.name, "User");
        assert_eq!(
            user.comment.as_deref(),
            Some("User holds the schema definition for the User entity.")
        );

        let names: Vec<_> = user.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["age", "nickname", "tags"]);
        assert_eq!(user.fields[0].type_name, "int");
        assert!(user.fields[1].optional && user.fields[1].nillable);
        assert_eq!(user.fields[2].json_type.as_deref(), Some("Vec<String>"));

        assert_eq!(user.edges.len(), 1);
        assert_eq!(user.edges[0].target, "Pet");
        assert_eq!(user.edges[0].direction, EdgeDirection::To);
        assert_eq!(user.source.filename(), "schema/user.toml");
    }

    #[test]
    fn test_field_spans_point_at_names() {
        let user = parse_str(USER, "user.toml").unwrap();
        let span = user.fields[0].span.unwrap();
        assert!(USER[span.offset()..span.offset() + span.len()].contains("age"));
    }

    #[test]
    fn test_name_defaults_to_file_stem() {
        let spec = parse_str("", "schema/group_info.toml").unwrap();
        assert_eq!(spec.name, "GroupInfo");
        assert!(spec.fields.is_empty());
        assert!(spec.edges.is_empty());
    }

    #[test]
    fn test_inverse_edge() {
        let pet = parse_str(
            r#"
[[edges]]
name = "owner"
target = "User"
direction = "from"
ref = "pets"
unique = true
"#,
            "pet.toml",
        )
        .unwrap();
        let owner = &pet.edges[0];
        assert_eq!(owner.direction, EdgeDirection::From);
        assert_eq!(owner.inverse.as_deref(), Some("pets"));
        assert!(owner.unique);
    }

    #[test]
    fn test_inverse_edge_requires_ref() {
        let err = parse_str(
            r#"
[[edges]]
name = "owner"
target = "User"
direction = "from"
"#,
            "pet.toml",
        )
        .unwrap_err();
        assert!(err.to_string().contains("no 'ref'"));
    }

    #[test]
    fn test_ref_on_owner_edge() {
        let err = parse_str(
            r#"
[[edges]]
name = "pets"
target = "Pet"
ref = "owner"
"#,
            "user.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_duplicate_field() {
        let err = parse_str(
            r#"
[[fields]]
name = "age"
type = "int"

[[fields]]
name = "age"
type = "string"
"#,
            "user.toml",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate field 'age' in entity 'User'");
    }

    #[test]
    fn test_duplicate_edge() {
        let err = parse_str(
            r#"
[[edges]]
name = "pets"
target = "Pet"

[[edges]]
name = "pets"
target = "Cat"
"#,
            "user.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateEdge { .. }));
    }

    #[test]
    fn test_reserved_field_name() {
        let err = parse_str(
            r#"
[[fields]]
name = "id"
type = "int"
"#,
            "user.toml",
        )
        .unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_keyword_field_name() {
        let err = parse_str(
            r#"
[[fields]]
name = "type"
type = "string"
"#,
            "user.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_lowercase_entity_name() {
        let err = parse_str(r#"name = "user""#, "user.toml").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = parse_str(
            r#"
[[fields]]
name = "age"
type = "int"
nullable = true
"#,
            "user.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let spec = parse_str(
            r#"
[[fields]]
name = "price"
type = "decimal"
"#,
            "product.toml",
        )
        .unwrap();
        assert_eq!(spec.fields[0].type_name, "decimal");
        assert!(spec.fields[0].type_span.is_some());
    }
}
