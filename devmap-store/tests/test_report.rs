use devmap_store::{unmapped_path, write_unmapped_report};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_writes_one_name_per_line() {
    let dir = TempDir::new().unwrap();
    let unmapped = strings(&["Attack", "Release"]);
    write_unmapped_report(dir.path(), "Comp", &unmapped).unwrap();

    let contents = fs::read_to_string(unmapped_path(dir.path(), "Comp")).unwrap();
    assert_eq!(contents, "Attack\nRelease\n");
}

#[test]
fn test_overwrites_prior_content() {
    let dir = TempDir::new().unwrap();
    write_unmapped_report(dir.path(), "Comp", &strings(&["Old", "Stale", "Names"])).unwrap();
    write_unmapped_report(dir.path(), "Comp", &strings(&["Fresh"])).unwrap();

    let contents = fs::read_to_string(unmapped_path(dir.path(), "Comp")).unwrap();
    assert_eq!(contents, "Fresh\n");
}

#[test]
fn test_empty_set_removes_existing_report() {
    let dir = TempDir::new().unwrap();
    write_unmapped_report(dir.path(), "Comp", &strings(&["Gain"])).unwrap();
    assert!(unmapped_path(dir.path(), "Comp").exists());

    write_unmapped_report(dir.path(), "Comp", &[]).unwrap();
    assert!(!unmapped_path(dir.path(), "Comp").exists());
}

#[test]
fn test_empty_set_with_no_report_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    write_unmapped_report(dir.path(), "Comp", &[]).unwrap();
    assert!(!unmapped_path(dir.path(), "Comp").exists());
}

#[test]
fn test_report_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let unmapped = strings(&["Attack", "Release"]);

    write_unmapped_report(dir.path(), "Comp", &unmapped).unwrap();
    let first = fs::read_to_string(unmapped_path(dir.path(), "Comp")).unwrap();
    write_unmapped_report(dir.path(), "Comp", &unmapped).unwrap();
    let second = fs::read_to_string(unmapped_path(dir.path(), "Comp")).unwrap();
    assert_eq!(first, second);
}
