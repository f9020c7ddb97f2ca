use std::fs;

use entgen_schema::{Error, load, load_file};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_load_directory_in_file_name_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.toml", "[[fields]]\nname = \"age\"\ntype = \"int\"\n");
    write(&dir, "group.toml", "");
    write(&dir, "car.toml", "name = \"Car\"\n");
    write(&dir, "README.md", "# not a schema");
    fs::create_dir(dir.path().join("nested.toml")).unwrap();

    let schema = load(dir.path()).unwrap();
    let names: Vec<_> = schema.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Car", "Group", "User"]);
    assert_eq!(schema.entity("User").unwrap().fields[0].name, "age");
}

#[test]
fn test_load_is_shallow() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.toml", "");
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("pet.toml"), "").unwrap();

    let schema = load(dir.path()).unwrap();
    assert_eq!(schema.entities.len(), 1);
}

#[test]
fn test_load_single_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "pet.toml", "[[fields]]\nname = \"name\"\ntype = \"string\"\n");

    let schema = load(dir.path().join("pet.toml")).unwrap();
    assert_eq!(schema.entities.len(), 1);
    assert_eq!(schema.entities[0].name, "Pet");
}

#[test]
fn test_load_empty_directory() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path()).unwrap_err();
    assert!(matches!(*err, Error::NoEntities { .. }));
}

#[test]
fn test_load_missing_path() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("missing")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_load_file_missing_type() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.toml", "[[fields]]\nname = \"age\"\n");

    let err = load_file(dir.path().join("user.toml")).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
    assert_eq!(err.to_string(), "failed to parse schema");
}
