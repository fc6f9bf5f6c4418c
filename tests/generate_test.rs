use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use wecon::error::Error;
use wecon::project::MARKER_FILE;
use wecon::scaffold::{generate_module, ModuleOptions, MODULE_DIRS};
use tempfile::TempDir;

/// A minimal project: the marker file and an empty modules directory.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/modules")).unwrap();
    fs::write(dir.path().join(MARKER_FILE), "export default { app: { name: \"test\" } };").unwrap();
    dir
}

fn module_dir(project: &Path, name: &str) -> PathBuf {
    project.join("src/modules").join(name)
}

#[test]
fn test_module_structure() {
    let project = project();
    generate_module(project.path(), "users", &ModuleOptions::default()).unwrap();

    let module = module_dir(project.path(), "users");
    let mut dirs: Vec<String> = fs::read_dir(&module)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    dirs.sort();
    let mut expected: Vec<String> = MODULE_DIRS.iter().map(|d| d.to_string()).collect();
    expected.sort();
    assert_eq!(dirs, expected);
}

#[test]
fn test_module_definition() {
    let project = project();
    let generated = generate_module(project.path(), "products", &ModuleOptions::default()).unwrap();

    let definition = module_dir(project.path(), "products").join("products.module.ts");
    assert!(generated.written.contains(&definition));
    let content = fs::read_to_string(definition).unwrap();
    assert!(content.contains("defineModule"));
    assert!(content.contains("name: \"products\""));
    assert!(content.contains("Products"));
}

#[test]
fn test_translation_file() {
    let project = project();
    generate_module(project.path(), "orders", &ModuleOptions::default()).unwrap();

    let i18n = module_dir(project.path(), "orders").join("i18n/en.translation.json");
    let content: Value = serde_json::from_str(&fs::read_to_string(i18n).unwrap()).unwrap();
    assert!(content["welcome"].as_str().unwrap().contains("orders"));
}

#[test]
fn test_crud_controller() {
    let project = project();
    let options = ModuleOptions { crud: true, ..ModuleOptions::default() };
    generate_module(project.path(), "items", &options).unwrap();

    let controller = module_dir(project.path(), "items").join("controllers/items.controller.ts");
    let content = fs::read_to_string(controller).unwrap();
    for operation in ["findAll", "findOne", "create", "update", "delete"] {
        assert!(content.contains(operation), "controller lacks {operation}");
    }
    assert!(content.contains("class ItemsController"));
}

#[test]
fn test_no_controller_without_crud() {
    let project = project();
    let generated = generate_module(project.path(), "items", &ModuleOptions::default()).unwrap();

    assert_eq!(generated.written.len(), 2);
    let controllers = module_dir(project.path(), "items").join("controllers");
    assert_eq!(fs::read_dir(controllers).unwrap().count(), 0);
}

#[test]
fn test_existing_module() {
    let project = project();
    let existing = module_dir(project.path(), "existing");
    fs::create_dir_all(&existing).unwrap();

    match generate_module(project.path(), "existing", &ModuleOptions::default()) {
        Err(Error::ModuleExists { name }) => assert_eq!(name, "existing"),
        other => panic!("Expected ModuleExists, got {other:?}"),
    }
    assert_eq!(fs::read_dir(existing).unwrap().count(), 0);
}

#[test]
fn test_outside_project() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        generate_module(dir.path(), "users", &ModuleOptions::default()),
        Err(Error::NotInProject { .. })
    ));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
