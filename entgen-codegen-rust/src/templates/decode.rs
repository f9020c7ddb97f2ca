//! Row decoding templates: the column list, the scan struct and the
//! single-record and collection decoders.

use entgen_codegen::{
    decode::{DecodeStrategy, FieldPlan, IdStrategy},
    language::TypeMapper,
    template::{Emitter, Scope, TemplateError},
};

use super::{COLUMNS, DECODE_MANY, DECODE_ONE, SCAN, literal};
use crate::{Field, Fn, Param, RustTypeMapper, Struct};

const ROWS_BOUND: &str = "R: entgen_runtime::Rows + ?Sized";
const DECODE_RESULT: &str = "entgen_runtime::DecodeError";

/// `COLUMNS`: every column in scan order.
pub(super) fn columns(_: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let plan = scope.decode_plan(COLUMNS)?;
    let columns = plan
        .columns()
        .iter()
        .map(|column| literal(column))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "/// Columns of the {} table, in scan order.\npub const COLUMNS: &'static [&'static str] = &[{}];\n",
        plan.entity.table(),
        columns
    ))
}

/// The private struct a row is scanned into before conversion.
pub(super) fn scan_struct(_: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let plan = scope.decode_plan(SCAN)?;
    let mapper = RustTypeMapper;

    let scan = Struct::new(plan.entity.scan_name())
        .doc(format!(
            "Storage values of one {} row.",
            plan.entity.name
        ))
        .derive("Default")
        .private()
        .field(
            Field::new(plan.entity.id.struct_field(), mapper.map_field_type(plan.id_scan))
                .private(),
        )
        .fields(plan.fields.iter().map(|field| {
            Field::new(field.field.struct_field(), mapper.map_scan_type(field.scan)).private()
        }));

    Ok(scan.build())
}

/// `from_row`: decode the current row.
pub(super) fn decode_one(_: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let plan = scope.decode_plan(DECODE_ONE)?;
    let entity = plan.entity;

    let id = entity.id.struct_field();
    let id_value = match plan.id {
        IdStrategy::Direct => format!("scan.{id}"),
        IdStrategy::IntToString => format!("scan.{id}.to_string()"),
    };

    let mut assignments = vec![format!("    {id}: {id_value},")];
    assignments.extend(
        plan.fields
            .iter()
            .map(|field| format!("    {}: {},", field.field.struct_field(), convert(field))),
    );
    if entity.has_edges() {
        assignments.push(format!("    edges: {}::default(),", entity.edges_name()));
    }

    let from_row = Fn::new("from_row")
        .doc(format!(
            "Decode the current row of `rows` into a {}.\n\n\
             Values are scanned in [`COLUMNS`](Self::COLUMNS) order.",
            entity.name
        ))
        .generics(ROWS_BOUND)
        .param(Param::new("rows", "&mut R"))
        .returns(format!("Result<Self, {DECODE_RESULT}>"))
        .body_line(format!("let mut scan = {}::default();", entity.scan_name()))
        .body_line("rows.scan(&mut [")
        .body_lines(
            std::iter::once(id.clone())
                .chain(plan.fields.iter().map(|field| field.field.struct_field()))
                .map(|member| format!("    &mut scan.{member},")),
        )
        .body_line("])?;")
        .body_line("Ok(Self {")
        .body_lines(assignments)
        .body_line("})");

    Ok(from_row.build())
}

/// `from_rows`: decode every remaining row. The first failing row aborts
/// the whole collection.
pub(super) fn decode_many(_: &Emitter<'_>, scope: &Scope<'_>) -> Result<String, TemplateError> {
    let entity = scope.require_entity(DECODE_MANY)?;
    let plural = entity.plural();
    let receiver = entity.plural_receiver();

    let from_rows = Fn::new("from_rows")
        .doc(format!(
            "Decode every remaining row of `rows` into {plural}."
        ))
        .generics(ROWS_BOUND)
        .param(Param::new("rows", "&mut R"))
        .returns(format!("Result<{plural}, {DECODE_RESULT}>"))
        .body_line(format!("let mut {receiver} = {plural}::new();"))
        .body_line("while rows.next_row()? {")
        .body_line(format!("    {receiver}.push(Self::from_row(rows)?);"))
        .body_line("}")
        .body_line(format!("Ok({receiver})"));

    Ok(from_rows.build())
}

/// Expression converting the scanned value of one field.
fn convert(plan: &FieldPlan<'_>) -> String {
    let field = plan.field;
    let member = format!("scan.{}", field.struct_field());
    let name = literal(&field.name);

    match plan.strategy {
        DecodeStrategy::Json => format!("entgen_runtime::decode_json({name}, &{member})?"),
        DecodeStrategy::NillableTime => member,
        DecodeStrategy::NillableOther if field.ty.is_enum() => format!(
            "{member}.into_option().map(|v| entgen_runtime::decode_enum({name}, &v)).transpose()?"
        ),
        DecodeStrategy::NillableOther => format!("{member}.into_option()"),
        DecodeStrategy::Plain => {
            let value = if field.optional {
                format!("{member}.value")
            } else {
                member
            };
            if field.ty.is_enum() {
                format!("entgen_runtime::decode_enum({name}, &{value})?")
            } else {
                value
            }
        }
    }
}
