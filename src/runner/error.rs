//! # Invocation Errors / 调用错误
//!
//! Failures that can occur while launching or waiting on the test runner.
//! A child that runs and exits non-zero is not an error; it is a
//! [`RunOutcome`](crate::runner::models::RunOutcome).
//!
//! 启动或等待测试运行器时可能发生的失败。
//! 子进程正常运行但以非零状态退出并不是错误，而是一个 `RunOutcome`。

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvocationError {
    /// The executable could not be found on the search path.
    /// 在搜索路径中找不到可执行文件。
    #[error("{program} not found")]
    ToolNotFound { program: String },

    /// Spawning failed for any other reason (permission denied, bad working directory, ...).
    /// 由于其他原因启动失败（权限被拒绝、工作目录无效等）。
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The child was started but waiting on it failed.
    /// 子进程已启动，但等待其结束时失败。
    #[error("failed to wait for {program}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl InvocationError {
    /// Classifies an error returned by `spawn()`.
    pub fn from_spawn(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            InvocationError::ToolNotFound {
                program: program.to_string(),
            }
        } else {
            InvocationError::Spawn {
                program: program.to_string(),
                source,
            }
        }
    }

    pub fn is_tool_not_found(&self) -> bool {
        matches!(self, InvocationError::ToolNotFound { .. })
    }
}
