//! Logical field and identifier types.

use std::{fmt, str::FromStr};

use crate::ConfigError;

/// Logical type of a schema field.
///
/// Integer widths are explicit; the schema aliases `int` and `uint` resolve
/// to the 32-bit variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Time,
    Json,
    Enum,
    String,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

impl FieldType {
    /// All types in the order they are listed in diagnostics.
    pub const ALL: &'static [FieldType] = &[
        FieldType::Bool,
        FieldType::Time,
        FieldType::Json,
        FieldType::Enum,
        FieldType::String,
        FieldType::Float32,
        FieldType::Float64,
        FieldType::Int8,
        FieldType::Int16,
        FieldType::Int32,
        FieldType::Int64,
        FieldType::Uint8,
        FieldType::Uint16,
        FieldType::Uint32,
        FieldType::Uint64,
    ];

    /// Get the schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Time => "time",
            FieldType::Json => "json",
            FieldType::Enum => "enum",
            FieldType::String => "string",
            FieldType::Float32 => "float32",
            FieldType::Float64 => "float64",
            FieldType::Int8 => "int8",
            FieldType::Int16 => "int16",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Uint8 => "uint8",
            FieldType::Uint16 => "uint16",
            FieldType::Uint32 => "uint32",
            FieldType::Uint64 => "uint64",
        }
    }

    pub fn is_time(&self) -> bool {
        matches!(self, FieldType::Time)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, FieldType::Json)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, FieldType::Enum)
    }

    /// Whether the type belongs to the signed or unsigned integer family.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            FieldType::Int8
                | FieldType::Int16
                | FieldType::Int32
                | FieldType::Int64
                | FieldType::Uint8
                | FieldType::Uint16
                | FieldType::Uint32
                | FieldType::Uint64
        )
    }

    /// Whether values of this type can be used as an identifier column.
    pub fn is_valid_id(&self) -> bool {
        self.is_integer() || matches!(self, FieldType::String)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(FieldType::Int32),
            "uint" => Ok(FieldType::Uint32),
            other => FieldType::ALL
                .iter()
                .find(|ty| ty.as_str() == other)
                .copied()
                .ok_or_else(|| format!("unknown field type '{}'", other)),
        }
    }
}

/// Type of the identifier field shared by every entity in a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IdType {
    #[default]
    Int32,
    Int64,
    Uint32,
    Uint64,
    /// Carried as a 64-bit integer column and converted to its decimal
    /// string form when read.
    String,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Int32 => "int",
            IdType::Int64 => "int64",
            IdType::Uint32 => "uint",
            IdType::Uint64 => "uint64",
            IdType::String => "string",
        }
    }

    /// Logical type of the generated `id` field.
    pub fn field_type(&self) -> FieldType {
        match self {
            IdType::Int32 => FieldType::Int32,
            IdType::Int64 => FieldType::Int64,
            IdType::Uint32 => FieldType::Uint32,
            IdType::Uint64 => FieldType::Uint64,
            IdType::String => FieldType::String,
        }
    }

    /// Type of the physical identifier column.
    pub fn storage_type(&self) -> FieldType {
        match self {
            IdType::String => FieldType::Int64,
            other => other.field_type(),
        }
    }

    /// Whether the scanned column must be converted before assignment.
    pub fn is_string(&self) -> bool {
        matches!(self, IdType::String)
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "int32" => Ok(IdType::Int32),
            "int64" => Ok(IdType::Int64),
            "uint" | "uint32" => Ok(IdType::Uint32),
            "uint64" => Ok(IdType::Uint64),
            "string" => Ok(IdType::String),
            other => Err(ConfigError::InvalidIdType {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_str() {
        assert_eq!("bool".parse::<FieldType>().unwrap(), FieldType::Bool);
        assert_eq!("time".parse::<FieldType>().unwrap(), FieldType::Time);
        assert_eq!("json".parse::<FieldType>().unwrap(), FieldType::Json);
        assert_eq!("uint16".parse::<FieldType>().unwrap(), FieldType::Uint16);
        assert_eq!("float64".parse::<FieldType>().unwrap(), FieldType::Float64);
    }

    #[test]
    fn test_field_type_aliases() {
        assert_eq!("int".parse::<FieldType>().unwrap(), FieldType::Int32);
        assert_eq!("uint".parse::<FieldType>().unwrap(), FieldType::Uint32);
    }

    #[test]
    fn test_field_type_unknown() {
        let err = "decimal".parse::<FieldType>().unwrap_err();
        assert_eq!(err, "unknown field type 'decimal'");
        assert!("Int".parse::<FieldType>().is_err());
        assert!("".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_field_type_display_round_trips() {
        for ty in FieldType::ALL {
            assert_eq!(ty.to_string().parse::<FieldType>().unwrap(), *ty);
        }
    }

    #[test]
    fn test_field_type_predicates() {
        assert!(FieldType::Time.is_time());
        assert!(FieldType::Json.is_json());
        assert!(FieldType::Enum.is_enum());
        assert!(FieldType::Uint8.is_integer());
        assert!(!FieldType::Float32.is_integer());
        assert!(FieldType::String.is_valid_id());
        assert!(!FieldType::Json.is_valid_id());
        assert!(!FieldType::Time.is_valid_id());
    }

    #[test]
    fn test_id_type_from_str() {
        assert_eq!("int".parse::<IdType>().unwrap(), IdType::Int32);
        assert_eq!("int32".parse::<IdType>().unwrap(), IdType::Int32);
        assert_eq!("int64".parse::<IdType>().unwrap(), IdType::Int64);
        assert_eq!("uint".parse::<IdType>().unwrap(), IdType::Uint32);
        assert_eq!("uint64".parse::<IdType>().unwrap(), IdType::Uint64);
        assert_eq!("string".parse::<IdType>().unwrap(), IdType::String);
    }

    #[test]
    fn test_id_type_invalid() {
        let err = "uuid".parse::<IdType>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidIdType {
                value: "uuid".to_string()
            }
        );
        assert!(err.to_string().contains("invalid id type 'uuid'"));
        assert!("float64".parse::<IdType>().is_err());
    }

    #[test]
    fn test_id_type_default() {
        assert_eq!(IdType::default(), IdType::Int32);
    }

    #[test]
    fn test_id_type_storage() {
        assert_eq!(IdType::String.field_type(), FieldType::String);
        assert_eq!(IdType::String.storage_type(), FieldType::Int64);
        assert_eq!(IdType::Int64.storage_type(), FieldType::Int64);
        assert_eq!(IdType::Uint32.storage_type(), FieldType::Uint32);
        assert!(IdType::String.is_string());
        assert!(!IdType::Int64.is_string());
    }
}
