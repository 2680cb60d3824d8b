use speclens::io::walker::{find_spec_files, SpecWalker};
use speclens::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "it('x', () => {});\n").unwrap();
}

#[test]
fn walks_only_spec_suffixes() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "login.spec.js");
    touch(&dir, "cart.cy.ts");
    touch(&dir, "nested/deep/checkout.spec.tsx");
    touch(&dir, "helper.js");
    touch(&dir, "readme.md");
    touch(&dir, "spec.js");

    let files = find_spec_files(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"login.spec.js".to_string()));
    assert!(names.contains(&"cart.cy.ts".to_string()));
    assert!(names.contains(&"checkout.spec.tsx".to_string()));
}

#[test]
fn output_is_sorted_by_path() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "z.spec.js");
    touch(&dir, "a.spec.js");
    touch(&dir, "m/b.spec.js");

    let files = find_spec_files(dir.path()).unwrap();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn walk_is_restartable() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "one.spec.js");
    let walker = SpecWalker::new(dir.path().to_path_buf());
    let first = walker.walk().unwrap();
    let second = walker.walk().unwrap();
    assert_eq!(first, second);
}

#[test]
fn ignore_patterns_filter_candidates() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "keep.spec.js");
    touch(&dir, "legacy/old.spec.js");

    let files = SpecWalker::new(dir.path().to_path_buf())
        .with_ignore_patterns(vec!["**/legacy/**".to_string()])
        .walk()
        .unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("keep.spec.js"));
}

#[test]
fn missing_root_reports_configuration_error() {
    let err = SpecWalker::new(PathBuf::from("/no/such/speclens/root"))
        .walk()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.is_fatal());
}

#[test]
fn file_as_root_reports_configuration_error() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "only.spec.js");
    let err = SpecWalker::new(dir.path().join("only.spec.js"))
        .walk()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn empty_tree_yields_empty_sorted_list() {
    let dir = TempDir::new().unwrap();
    let files = find_spec_files(dir.path()).unwrap();
    assert!(files.is_empty());
}
