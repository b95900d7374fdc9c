use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn documents_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    println!("one");
}
"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    println!("two");
}
"#
    .to_string()
}

pub fn run_sxs_command(current_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sxs").expect("Failed to find sxs binary");
    // force plain output so expected strings carry no escape codes
    cmd.current_dir(current_dir).env("NO_COLOR", "1").args(args);
    cmd
}
