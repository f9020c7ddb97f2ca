//! Decode strategy selection.
//!
//! Every field is materialized from a row in one of four ways, picked by
//! [`DecodeStrategy::resolve`] in a fixed precedence order:
//!
//! 1. [`DecodeStrategy::Json`]: scan raw bytes, unmarshal when non-empty
//! 2. [`DecodeStrategy::NillableTime`]: scan straight into an optional time
//! 3. [`DecodeStrategy::NillableOther`]: scan into a nullable wrapper and
//!    copy the value across only when it is valid
//! 4. [`DecodeStrategy::Plain`]: scan into the storage type and assign
//!
//! The identifier gets its own rule ([`IdStrategy`]): string identifiers
//! are scanned as integers and converted to their decimal form.

use std::fmt;

use entgen_core::{FieldType, IdType};
use thiserror::Error;

use crate::graph::{Entity, Field};

/// A field whose strategy cannot be decided from its descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot resolve decode strategy for field '{field}': {reason}")]
pub struct UnresolvedStrategy {
    pub field: String,
    pub reason: &'static str,
}

/// How one field is converted from its scanned storage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStrategy {
    Json,
    NillableTime,
    NillableOther,
    Plain,
}

impl DecodeStrategy {
    /// Pick the strategy for `field`.
    pub fn resolve(field: &Field) -> Result<Self, UnresolvedStrategy> {
        let unresolved = |reason| UnresolvedStrategy {
            field: field.name.clone(),
            reason,
        };

        if field.ty.is_json() {
            return match &field.json_type {
                Some(ty) if !ty.trim().is_empty() => Ok(Self::Json),
                _ => Err(unresolved("json field has no payload type")),
            };
        }
        if field.ty.is_enum() && (field.enum_type.is_none() || field.enum_values.is_empty()) {
            return Err(unresolved("enum field has no values"));
        }

        Ok(match (field.nillable, field.ty.is_time()) {
            (true, true) => Self::NillableTime,
            (true, false) => Self::NillableOther,
            (false, _) => Self::Plain,
        })
    }

    /// Storage shape scanned for a field decoded with this strategy.
    pub fn scan_type(&self, field: &Field) -> ScanType {
        let storage = field.storage_type();
        match self {
            Self::Json => ScanType::Bytes,
            Self::NillableTime => ScanType::Optional(storage),
            Self::NillableOther => ScanType::Nullable(storage),
            // A nullable column still needs a wrapper to survive NULL.
            Self::Plain if field.optional => ScanType::Nullable(storage),
            Self::Plain => ScanType::Direct(storage),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::NillableTime => "nillable_time",
            Self::NillableOther => "nillable",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage shape a column is scanned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanType {
    /// Raw byte buffer
    Bytes,
    /// Optional value, `None` on NULL
    Optional(FieldType),
    /// Value plus validity flag
    Nullable(FieldType),
    /// The storage type itself
    Direct(FieldType),
}

/// How the identifier is converted after scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdStrategy {
    /// Assign the scanned value unchanged
    Direct,
    /// Scan an integer and assign its decimal string form
    IntToString,
}

impl IdStrategy {
    pub fn for_id_type(id_type: IdType) -> Self {
        if id_type.is_string() {
            Self::IntToString
        } else {
            Self::Direct
        }
    }
}

/// Decode plan of one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldPlan<'a> {
    pub field: &'a Field,
    pub strategy: DecodeStrategy,
    pub scan: ScanType,
}

/// Decode plan of one entity: the identifier, then every field in
/// declaration order. The order is the scan order of the generated code.
#[derive(Debug, Clone)]
pub struct DecodePlan<'a> {
    pub entity: &'a Entity,
    pub id: IdStrategy,
    /// Storage type the identifier column is scanned as
    pub id_scan: FieldType,
    pub fields: Vec<FieldPlan<'a>>,
}

impl<'a> DecodePlan<'a> {
    pub fn new(entity: &'a Entity, id_type: IdType) -> Result<Self, UnresolvedStrategy> {
        let fields = entity
            .fields
            .iter()
            .map(|field| {
                let strategy = DecodeStrategy::resolve(field)?;
                Ok(FieldPlan {
                    field,
                    strategy,
                    scan: strategy.scan_type(field),
                })
            })
            .collect::<Result<Vec<_>, UnresolvedStrategy>>()?;

        Ok(Self {
            entity,
            id: IdStrategy::for_id_type(id_type),
            id_scan: id_type.storage_type(),
            fields,
        })
    }

    /// Column names in scan order.
    pub fn columns(&self) -> Vec<String> {
        std::iter::once(self.entity.id.column())
            .chain(self.fields.iter().map(|plan| plan.field.column()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::EnumValue;

    use super::*;

    fn field(name: &str, ty: FieldType) -> Field {
        Field::new(name, ty)
    }

    fn nillable(mut field: Field) -> Field {
        field.optional = true;
        field.nillable = true;
        field
    }

    #[test]
    fn test_json_takes_precedence() {
        let mut tags = nillable(field("tags", FieldType::Json));
        tags.json_type = Some("Vec<String>".to_string());
        assert_eq!(DecodeStrategy::resolve(&tags), Ok(DecodeStrategy::Json));
        assert_eq!(DecodeStrategy::Json.scan_type(&tags), ScanType::Bytes);
    }

    #[test]
    fn test_json_without_type_is_unresolved() {
        let err = DecodeStrategy::resolve(&field("tags", FieldType::Json)).unwrap_err();
        assert_eq!(err.field, "tags");
        assert_eq!(
            err.to_string(),
            "cannot resolve decode strategy for field 'tags': json field has no payload type"
        );
    }

    #[test]
    fn test_nillable_time() {
        let created = nillable(field("created_at", FieldType::Time));
        let strategy = DecodeStrategy::resolve(&created).unwrap();
        assert_eq!(strategy, DecodeStrategy::NillableTime);
        assert_eq!(
            strategy.scan_type(&created),
            ScanType::Optional(FieldType::Time)
        );
    }

    #[test]
    fn test_nillable_other() {
        let nickname = nillable(field("nickname", FieldType::String));
        let strategy = DecodeStrategy::resolve(&nickname).unwrap();
        assert_eq!(strategy, DecodeStrategy::NillableOther);
        assert_eq!(
            strategy.scan_type(&nickname),
            ScanType::Nullable(FieldType::String)
        );
    }

    #[test]
    fn test_plain() {
        let age = field("age", FieldType::Int32);
        let strategy = DecodeStrategy::resolve(&age).unwrap();
        assert_eq!(strategy, DecodeStrategy::Plain);
        assert_eq!(strategy.scan_type(&age), ScanType::Direct(FieldType::Int32));

        let mut score = field("score", FieldType::Float64);
        score.optional = true;
        assert_eq!(
            DecodeStrategy::Plain.scan_type(&score),
            ScanType::Nullable(FieldType::Float64)
        );
    }

    #[test]
    fn test_enum_scans_as_string() {
        let mut status = field("status", FieldType::Enum);
        assert!(DecodeStrategy::resolve(&status).is_err());

        status.enum_type = Some("UserStatus".to_string());
        status.enum_values = vec![EnumValue {
            value: "active".to_string(),
            variant: "Active".to_string(),
        }];
        let strategy = DecodeStrategy::resolve(&status).unwrap();
        assert_eq!(strategy, DecodeStrategy::Plain);
        assert_eq!(
            strategy.scan_type(&status),
            ScanType::Direct(FieldType::String)
        );
    }

    #[test]
    fn test_id_strategy() {
        assert_eq!(IdStrategy::for_id_type(IdType::String), IdStrategy::IntToString);
        assert_eq!(IdStrategy::for_id_type(IdType::Int64), IdStrategy::Direct);
        assert_eq!(IdStrategy::for_id_type(IdType::Uint32), IdStrategy::Direct);
    }

    #[test]
    fn test_plan_column_order() {
        let entity = Entity {
            name: "User".to_string(),
            comment: None,
            id: Field::new("id", FieldType::String),
            fields: vec![
                field("age", FieldType::Int32),
                field("firstName", FieldType::String),
                nillable(field("lastSeen", FieldType::Time)),
            ],
            edges: Vec::new(),
        };
        let plan = DecodePlan::new(&entity, IdType::String).unwrap();
        assert_eq!(plan.columns(), ["id", "age", "first_name", "last_seen"]);
        assert_eq!(plan.columns(), entity.columns());
        assert_eq!(plan.id, IdStrategy::IntToString);
        assert_eq!(plan.id_scan, FieldType::Int64);

        let strategies: Vec<_> = plan.fields.iter().map(|p| p.strategy).collect();
        assert_eq!(
            strategies,
            [
                DecodeStrategy::Plain,
                DecodeStrategy::Plain,
                DecodeStrategy::NillableTime
            ]
        );
    }
}
