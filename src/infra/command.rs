//! # Command Module / 命令模块
//!
//! Builds and spawns child processes whose standard output and error stream
//! straight to the terminal instead of being captured.
//!
//! 构建并启动子进程，其标准输出和标准错误直接输出到终端，而不是被捕获。

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::{Child, Command};

/// Builds a command that runs `program` with `args` inside `working_dir`.
///
/// stdout and stderr are inherited so the child's output streams live;
/// stdin is closed so a tool that prompts cannot block the run.
///
/// 构建一个在 `working_dir` 中以 `args` 运行 `program` 的命令。
/// 继承 stdout 和 stderr 以便实时输出；关闭 stdin，避免交互式提示阻塞运行。
pub fn inherited_command<I, S>(program: &str, args: I, working_dir: &Path) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Spawns a command without capturing any of its output.
///
/// # Returns
/// The running `Child`, or the `io::Error` from the spawn attempt. A missing
/// executable surfaces as `io::ErrorKind::NotFound`.
///
/// 启动命令且不捕获任何输出。
/// 返回正在运行的 `Child`，或启动失败时的 `io::Error`。
/// 可执行文件不存在时表现为 `io::ErrorKind::NotFound`。
pub fn spawn_inherited(mut cmd: Command) -> std::io::Result<Child> {
    cmd.spawn()
}
