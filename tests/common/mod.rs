// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

pub const BIN_NAME: &str = "run-portfolio2-tests";

/// A fake `npm` that echoes its argument vector and working directory, then
/// exits with `exit_code`.
pub fn echoing_npm_script(exit_code: i32) -> String {
    format!(
        r#"#!/bin/sh
echo "FAKE_NPM_ARGC:$#"
for arg in "$@"; do
    echo "FAKE_NPM_ARG:$arg"
done
echo "FAKE_NPM_CWD:$(pwd -P)"
exit {exit_code}
"#
    )
}

/// Creates a directory holding an `npm` file with the given contents and mode,
/// to be used as the whole of `PATH`.
#[cfg(unix)]
pub fn fake_npm_dir(script: &str, mode: u32) -> TempDir {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let npm_path = temp_dir.path().join("npm");
    fs::write(&npm_path, script).expect("Failed to write fake npm");
    fs::set_permissions(&npm_path, fs::Permissions::from_mode(mode))
        .expect("Failed to set fake npm permissions");
    temp_dir
}

/// An executable fake `npm` that exits with `exit_code`.
#[cfg(unix)]
pub fn executable_npm(exit_code: i32) -> TempDir {
    fake_npm_dir(&echoing_npm_script(exit_code), 0o755)
}

/// A `PATH` directory with no `npm` in it at all.
pub fn empty_path_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// The runner binary with `PATH` restricted to `path_dir`, an English locale
/// and colors disabled so assertions can match plain text.
pub fn runner_command(path_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    cmd.env("PATH", path_dir)
        .env("LC_ALL", "en_US.UTF-8")
        .env("LANG", "en_US.UTF-8")
        .env_remove("LANGUAGE")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// The canonical directory the runner binary lives in, which is where the
/// child process is expected to start.
pub fn binary_dir() -> PathBuf {
    let bin = assert_cmd::cargo::cargo_bin(BIN_NAME);
    let bin = fs::canonicalize(&bin).expect("Failed to canonicalize runner binary path");
    bin.parent()
        .expect("Runner binary has no parent directory")
        .to_path_buf()
}
