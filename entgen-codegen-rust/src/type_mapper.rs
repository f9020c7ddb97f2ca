//! Rust type mapper implementation.

use entgen_codegen::{decode::ScanType, graph::Field, language::TypeMapper};
use entgen_core::FieldType;

/// Maps field types to the Rust types used by generated entity modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_field_type(&self, ty: FieldType) -> &'static str {
        match ty {
            FieldType::Bool => "bool",
            FieldType::Time => "chrono::DateTime<chrono::Utc>",
            FieldType::Json => "Vec<u8>",
            FieldType::Enum | FieldType::String => "String",
            FieldType::Float32 => "f32",
            FieldType::Float64 => "f64",
            FieldType::Int8 => "i8",
            FieldType::Int16 => "i16",
            FieldType::Int32 => "i32",
            FieldType::Int64 => "i64",
            FieldType::Uint8 => "u8",
            FieldType::Uint16 => "u16",
            FieldType::Uint32 => "u32",
            FieldType::Uint64 => "u64",
        }
    }

    fn map_field(&self, field: &Field) -> String {
        let ty = match (&field.json_type, &field.enum_type) {
            (Some(json_type), _) if field.ty.is_json() => json_type.clone(),
            (_, Some(enum_type)) if field.ty.is_enum() => enum_type.clone(),
            _ => self.map_field_type(field.ty).to_string(),
        };

        // JSON payloads decode to their zero value instead of None.
        if field.nillable && !field.ty.is_json() {
            format!("Option<{ty}>")
        } else {
            ty
        }
    }

    fn map_scan_type(&self, scan: ScanType) -> String {
        match scan {
            ScanType::Bytes => "Vec<u8>".to_string(),
            ScanType::Optional(ty) => format!("Option<{}>", self.map_field_type(ty)),
            ScanType::Nullable(ty) => {
                format!("entgen_runtime::Nullable<{}>", self.map_field_type(ty))
            }
            ScanType::Direct(ty) => self.map_field_type(ty).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_scalar_types() {
        let mapper = RustTypeMapper;

        assert_eq!(mapper.map_field_type(FieldType::Int32), "i32");
        assert_eq!(mapper.map_field_type(FieldType::Uint64), "u64");
        assert_eq!(mapper.map_field_type(FieldType::Float64), "f64");
        assert_eq!(mapper.map_field_type(FieldType::Enum), "String");
        assert_eq!(
            mapper.map_field_type(FieldType::Time),
            "chrono::DateTime<chrono::Utc>"
        );
    }

    #[test]
    fn test_rust_field_types() {
        let mapper = RustTypeMapper;

        let mut nickname = Field::new("nickname", FieldType::String);
        nickname.optional = true;
        nickname.nillable = true;
        assert_eq!(mapper.map_field(&nickname), "Option<String>");

        let mut tags = Field::new("tags", FieldType::Json);
        tags.json_type = Some("Vec<String>".to_string());
        tags.nillable = true;
        assert_eq!(mapper.map_field(&tags), "Vec<String>");

        let mut status = Field::new("status", FieldType::Enum);
        status.enum_type = Some("UserStatus".to_string());
        assert_eq!(mapper.map_field(&status), "UserStatus");
    }

    #[test]
    fn test_rust_scan_types() {
        let mapper = RustTypeMapper;

        assert_eq!(mapper.map_scan_type(ScanType::Bytes), "Vec<u8>");
        assert_eq!(
            mapper.map_scan_type(ScanType::Optional(FieldType::Time)),
            "Option<chrono::DateTime<chrono::Utc>>"
        );
        assert_eq!(
            mapper.map_scan_type(ScanType::Nullable(FieldType::String)),
            "entgen_runtime::Nullable<String>"
        );
        assert_eq!(mapper.map_scan_type(ScanType::Direct(FieldType::Int64)), "i64");
    }
}
