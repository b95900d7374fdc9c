mod common;

use assert_fs::TempDir;
use common::command::{documents_dir, file_a, file_b, run_sxs_command};
use common::file::{FileSpec, write_file};
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::Path;

fn stdout_of(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_sxs_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();
    Ok(String::from_utf8(stdout)?)
}

#[rstest]
fn renders_identical_documents_in_both_columns(
    documents_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.txt"), "one\ntwo\n".to_string()));
    write_file(FileSpec::new(dir.path().join("right.txt"), "one\ntwo\n".to_string()));

    let stdout = stdout_of(dir.path(), &["left.txt", "right.txt"])?;
    pretty_assertions::assert_eq!(stdout, "one │ one\ntwo │ two\n");

    Ok(())
}

#[rstest]
fn renders_edited_line_with_both_versions(
    documents_dir: TempDir,
    file_a: String,
    file_b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.rs"), file_a));
    write_file(FileSpec::new(dir.path().join("right.rs"), file_b));

    let stdout = stdout_of(dir.path(), &["left.rs", "right.rs"])?;

    let expected = format!(
        "{:<20} │ {}\n{:<20} │ {}\n{:<20} │ {}\n",
        "fn main() {",
        "fn main() {",
        "    println!(\"one\");",
        "    println!(\"two\");",
        "}",
        "}",
    );
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn pads_rows_for_lines_added_on_the_right(
    documents_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.txt"), "one\n".to_string()));
    write_file(FileSpec::new(dir.path().join("right.txt"), "one\ntwo\n".to_string()));

    let stdout = stdout_of(dir.path(), &["left.txt", "right.txt"])?;
    pretty_assertions::assert_eq!(stdout, "one │ one\n    │ two\n");

    Ok(())
}

#[rstest]
fn renders_nothing_for_two_empty_documents(
    documents_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.txt"), String::new()));
    write_file(FileSpec::new(dir.path().join("right.txt"), String::new()));

    let stdout = stdout_of(dir.path(), &["left.txt", "right.txt"])?;
    pretty_assertions::assert_eq!(stdout, "");

    Ok(())
}

#[rstest]
fn accepts_the_no_pager_flag(documents_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.txt"), "same\n".to_string()));
    write_file(FileSpec::new(dir.path().join("right.txt"), "same\n".to_string()));

    let stdout = stdout_of(dir.path(), &["--no-pager", "left.txt", "right.txt"])?;
    pretty_assertions::assert_eq!(stdout, "same │ same\n");

    Ok(())
}

#[rstest]
fn fails_for_a_missing_document(documents_dir: TempDir) {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.txt"), "one\n".to_string()));

    run_sxs_command(dir.path(), &["left.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[rstest]
fn fails_when_a_document_is_a_directory(documents_dir: TempDir) {
    let dir = documents_dir;
    write_file(FileSpec::new(dir.path().join("left.txt"), "one\n".to_string()));
    std::fs::create_dir(dir.path().join("subdir")).expect("Failed to create directory");

    run_sxs_command(dir.path(), &["left.txt", "subdir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a file"));
}
