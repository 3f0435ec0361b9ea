//! # File System Operations Module / 文件系统操作模块
//!
//! This module resolves the directory the program lives in and moves the
//! process into it.
//!
//! 此模块解析程序所在的目录，并将进程的工作目录切换到该目录。

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the absolute directory containing the running executable.
///
/// Symlinks are resolved first, so a link placed on the search path still
/// points back at the project the binary was installed into.
///
/// 解析当前可执行文件所在的绝对目录。
/// 会先解析符号链接，因此放在搜索路径上的链接仍然指向二进制文件所在的项目。
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe = absolute_path(&exe)?;
    parent_dir(&exe)
}

/// Returns the parent directory of `path`.
pub fn parent_dir(path: &Path) -> Result<PathBuf> {
    path.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Path has no parent directory: {}", path.display()))
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Makes `dir` the process's working directory for the rest of its lifetime.
pub fn enter_dir(dir: &Path) -> Result<()> {
    env::set_current_dir(dir)
        .with_context(|| format!("Failed to change directory to {}", dir.display()))
}
