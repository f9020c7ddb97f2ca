use std::fs;

use entgen_codegen::{
    graph::{Config, Graph},
    language::LanguageCodegen,
};
use entgen_codegen_rust::Generator;
use entgen_core::IdType;
use entgen_schema::{EntitySpec, FieldSpec, SchemaSpec};
use tempfile::TempDir;

fn schema() -> SchemaSpec {
    SchemaSpec::new([
        EntitySpec::new("Group").field(FieldSpec::new("name", "string")),
        EntitySpec::new("Equipment")
            .comment("Equipment owned by a group.")
            .field(FieldSpec::new("serial", "uint64").unique()),
    ])
}

#[test]
fn writes_every_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("ent");
    let graph = Graph::new(
        Config::default()
            .with_id_type(IdType::Int64)
            .with_target(&target),
        &schema(),
    )
    .unwrap();

    let written = Generator::new(&graph).unwrap().generate(&target).unwrap();
    assert_eq!(written, ["group.rs", "equipment.rs", "mod.rs"]);

    let equipment = fs::read_to_string(target.join("equipment.rs")).unwrap();
    assert!(equipment.contains("/// Equipment owned by a group.\n#[derive(Debug, Clone)]\npub struct Equipment {"));
    assert!(equipment.contains("    pub id: i64,\n"));
    assert!(equipment.contains("        id: scan.id,\n"));
    assert!(equipment.contains("pub type EquipmentSlice = Vec<Equipment>;"));
    assert!(!equipment.contains("EquipmentEdges"));
}

#[test]
fn template_directory_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(
        templates.join("header.tmpl"),
        "// Generated for {{ package }}. Do not edit.",
    )
    .unwrap();
    fs::write(
        templates.join("columns.tmpl"),
        "{{ define \"columns\" }}pub const COLUMNS: &'static [&'static str] = &[{{ entity.columns }}];{{ end }}",
    )
    .unwrap();

    let graph = Graph::new(
        Config::default().with_templates([templates]),
        &schema(),
    )
    .unwrap();
    let generator = Generator::new(&graph).unwrap();
    assert_eq!(generator.templates().extras().count(), 0);

    let files = generator.render().unwrap();
    let group = &files.get("group.rs").unwrap().content;
    assert!(group.starts_with("// Generated for ent. Do not edit.\n\n"));
    assert!(group.contains(
        "impl Group {\n    pub const COLUMNS: &'static [&'static str] = &[\"id\", \"name\"];\n\n    /// Decode"
    ));
    assert!(files.get("mod.rs").unwrap().content.starts_with("// Generated for ent."));
}

#[test]
fn later_template_source_wins() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first.tmpl");
    let second = temp.path().join("second.tmpl");
    fs::write(&first, "{{ define \"header\" }}// first{{ end }}").unwrap();
    fs::write(&second, "{{ define \"header\" }}// second{{ end }}").unwrap();

    let graph = Graph::new(Config::default().with_templates([first, second]), &schema()).unwrap();
    let files = Generator::new(&graph).unwrap().render().unwrap();

    assert!(files.get("mod.rs").unwrap().content.starts_with("// second\n"));
}

#[test]
fn broken_template_source_fails_before_rendering() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.tmpl");
    fs::write(&broken, "{{ define \"header\" }}// unterminated").unwrap();

    let graph = Graph::new(Config::default().with_templates([broken]), &schema()).unwrap();
    let err = Generator::new(&graph).err().unwrap();
    assert!(err.to_string().starts_with("failed to load templates from"));
}

#[test]
fn failed_render_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("edges.tmpl");
    fs::write(&templates, "{{ template \"missing\" }}").unwrap();
    let target = temp.path().join("ent");

    let graph = Graph::new(Config::default().with_templates([templates]), &schema()).unwrap();
    assert!(Generator::new(&graph).unwrap().generate(&target).is_err());
    assert!(!target.exists());
}

#[test]
fn extra_template_cannot_escape_target() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("extra.tmpl");
    fs::write(&templates, "{{ define \"../escaped\" }}// hi\n{{ end }}").unwrap();
    let target = temp.path().join("out").join("ent");

    let graph = Graph::new(
        Config::default()
            .with_templates([templates])
            .with_target(&target),
        &schema(),
    )
    .unwrap();
    let err = Generator::new(&graph).unwrap().generate(&target).unwrap_err();

    assert!(err.to_string().contains("'../escaped'"), "{err}");
    assert!(!target.exists());
    assert!(!temp.path().join("out").join("escaped.rs").exists());
}
