use std::fs;

use wecon::cli::{BuildArgs, DevArgs, PostmanArgs, StartArgs};
use wecon::commands::{build, dev, postman, start};
use wecon::error::Error;
use wecon::project::MARKER_FILE;
use tempfile::TempDir;

fn dev_args() -> DevArgs {
    DevArgs { port: 3000, mode: "development".to_string() }
}

fn start_args() -> StartArgs {
    StartArgs { port: 3000, mode: "production".to_string() }
}

fn assert_not_in_project<T: std::fmt::Debug>(result: wecon::error::Result<T>) {
    match result {
        Err(Error::NotInProject { marker }) => assert_eq!(marker, MARKER_FILE),
        other => panic!("Expected NotInProject, got {other:?}"),
    }
}

#[test]
fn test_commands_outside_project_do_not_touch_disk() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.ts"), "").unwrap();

    assert_not_in_project(dev::run(dir.path(), &dev_args()));
    assert_not_in_project(start::run(dir.path(), &start_args()));
    assert_not_in_project(build::run(dir.path(), &BuildArgs { mode: "production".to_string() }));
    assert_not_in_project(postman::run(dir.path(), &PostmanArgs { env: "development".to_string() }));

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["src"]);
}

#[test]
fn test_dev_without_entry_point() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MARKER_FILE), "export default {};").unwrap();

    match dev::run(dir.path(), &dev_args()) {
        Err(Error::EntryPointNotFound { candidates }) => {
            assert!(candidates.contains("src/main.ts"));
        }
        other => panic!("Expected EntryPointNotFound, got {other:?}"),
    }
}

#[test]
fn test_start_with_empty_build_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MARKER_FILE), "export default {};").unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();

    assert!(matches!(
        start::run(dir.path(), &start_args()),
        Err(Error::EntryPointNotFound { .. })
    ));
}

#[test]
fn test_postman_script_is_rendered_for_env() {
    let dir = TempDir::new().unwrap();
    let script = postman::write_script(dir.path(), "staging").unwrap();

    assert_eq!(script, dir.path().join(postman::SCRIPT_FILE));
    let content = fs::read_to_string(script).unwrap();
    assert!(content.contains("loadConfig(configPath, \"staging\")"));
    assert!(!content.contains("{{"));
}

#[test]
fn test_copy_dir_is_recursive() {
    let from = TempDir::new().unwrap();
    let to = TempDir::new().unwrap();
    fs::create_dir_all(from.path().join("img/icons")).unwrap();
    fs::write(from.path().join("index.html"), "<html></html>").unwrap();
    fs::write(from.path().join("img/icons/a.svg"), "<svg/>").unwrap();

    let target = to.path().join("public");
    assert_eq!(build::copy_dir(from.path(), &target).unwrap(), 2);
    assert!(!dir_diff::is_different(from.path(), &target).unwrap());
}
