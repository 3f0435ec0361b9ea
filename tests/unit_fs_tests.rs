//! # File System Helpers Unit Tests / 文件系统辅助函数单元测试
//!
//! `enter_dir` changes the process-wide working directory, so only one test
//! in this binary touches it.

use portfolio_test_runner::infra::fs::{absolute_path, enter_dir, parent_dir, program_dir};
use std::env;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_program_dir_is_canonical_parent_of_executable() {
    let exe = fs::canonicalize(env::current_exe().unwrap()).unwrap();

    let dir = program_dir().unwrap();

    assert!(dir.is_absolute());
    assert_eq!(dir, exe.parent().unwrap());
}

#[test]
fn test_parent_dir_of_root_fails() {
    let err = parent_dir(Path::new("/")).unwrap_err();

    assert!(err.to_string().contains("has no parent directory"));
}

#[test]
fn test_absolute_path_of_missing_path_fails_with_context() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let err = absolute_path(&missing).unwrap_err();

    assert!(err.to_string().starts_with("Failed to resolve path:"));
}

#[test]
fn test_enter_dir_changes_working_directory() {
    let original = env::current_dir().unwrap();
    let dir = tempdir().unwrap();

    enter_dir(dir.path()).unwrap();
    let entered = env::current_dir().unwrap();
    enter_dir(&original).unwrap();

    assert_eq!(entered, fs::canonicalize(dir.path()).unwrap());
    assert!(enter_dir(&dir.path().join("missing")).is_err());
}
