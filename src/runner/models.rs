//! # Data Models Module / 数据模型模块
//!
//! This module defines the outcome of a single test-runner invocation.
//!
//! 此模块定义单次测试运行器调用的结果。

use std::fmt;
use std::process::ExitStatus;

/// Represents the final result of running the test command to completion.
/// 表示测试命令运行结束后的最终结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child exited with code 0.
    /// 子进程以退出码 0 退出。
    Passed,
    /// The child exited with a nonzero code.
    /// 子进程以非零退出码退出。
    Failed {
        /// The child's exit code / 子进程的退出码
        code: i32,
    },
    /// The child was killed by a signal and has no exit code (Unix only).
    /// 子进程被信号终止，没有退出码（仅限 Unix）。
    Terminated {
        /// The terminating signal number / 终止信号编号
        signal: i32,
    },
}

impl RunOutcome {
    /// Classifies a finished child's exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => RunOutcome::Passed,
            Some(code) => RunOutcome::Failed { code },
            None => RunOutcome::Terminated {
                signal: terminating_signal(&status),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Passed)
    }

    /// The exit code this wrapper terminates with: 0 on success, 1 otherwise.
    /// 本程序的退出码：成功为 0，否则为 1。
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Passed => write!(f, "passed"),
            RunOutcome::Failed { code } => write!(f, "failed with exit code {}", code),
            RunOutcome::Terminated { signal } => write!(f, "terminated by signal {}", signal),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or_default()
}

// Windows always reports an exit code, so this is unreachable in practice.
#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> i32 {
    0
}
