use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn history_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_gitlanes_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlanes").expect("Failed to find gitlanes binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
