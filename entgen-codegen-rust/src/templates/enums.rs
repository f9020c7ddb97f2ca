use entgen_codegen::template::{Emitter, Scope, TemplateError};

use super::{ENUM, literal, require_field};
use crate::{Enum, Fn, Impl, Param, RustFile, Variant};

/// The enum type of an enum field, with its string conversions.
pub(super) fn enum_type(_: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let field = require_field(scope, ENUM)?;
    let name = field
        .enum_type
        .as_deref()
        .ok_or_else(|| TemplateError::UnknownVariable {
            template: ENUM.to_string(),
            name: "field.enum_type".to_string(),
        })?;

    let definition = field.enum_values.iter().fold(
        Enum::new(name)
            .doc(format!(
                "{name} is the type of the {} enum field.",
                literal(&field.name)
            ))
            .derive("Debug")
            .derive("Clone")
            .derive("Copy")
            .derive("PartialEq")
            .derive("Eq")
            .derive("Hash"),
        |definition, value| definition.variant(Variant::new(&value.variant)),
    );

    let as_str = Fn::new("as_str")
        .doc("Value of the variant as stored in the column.")
        .param(Param::self_ref())
        .returns("&'static str")
        .body_line("match self {")
        .body_lines(field.enum_values.iter().map(|value| {
            format!(
                "    Self::{} => {},",
                value.variant,
                literal(&value.value)
            )
        }))
        .body_line("}");

    let display = Fn::new("fmt")
        .private()
        .param(Param::self_ref())
        .param(Param::new("f", "&mut std::fmt::Formatter<'_>"))
        .returns("std::fmt::Result")
        .body_line("f.write_str(self.as_str())");

    let from_str = Fn::new("from_str")
        .private()
        .param(Param::new("s", "&str"))
        .returns("Result<Self, Self::Err>")
        .body_line("match s {")
        .body_lines(field.enum_values.iter().map(|value| {
            format!(
                "    {} => Ok(Self::{}),",
                literal(&value.value),
                value.variant
            )
        }))
        .body_lines([
            "    other => Err(entgen_runtime::InvalidEnumValue {".to_string(),
            format!("        enum_name: {},", literal(name)),
            "        value: other.to_string(),".to_string(),
            "    }),".to_string(),
            "}".to_string(),
        ]);

    Ok(RustFile::new()
        .add(definition)
        .add(Impl::new(name).method(as_str))
        .add(
            Impl::new(name)
                .for_trait("std::fmt::Display")
                .method(display),
        )
        .add(
            Impl::new(name)
                .for_trait("std::str::FromStr")
                .item("type Err = entgen_runtime::InvalidEnumValue;")
                .method(from_str),
        )
        .render())
}
