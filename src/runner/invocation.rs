//! # Test Invocation Module / 测试调用模块
//!
//! Launches a [`TestInvocation`] in a given directory, waits for it without a
//! timeout and classifies the result.
//!
//! 在指定目录中启动 `TestInvocation`，无超时地等待其结束并对结果进行分类。

use std::path::Path;
use tracing::debug;

use crate::infra::command::{inherited_command, spawn_inherited};
use crate::runner::{config::TestInvocation, error::InvocationError, models::RunOutcome};

/// Runs `invocation` with `working_dir` as the child's working directory.
///
/// The directory is applied to the child only; the calling process's own
/// working directory is left untouched.
///
/// # Arguments
/// * `invocation` - The program and arguments to run
/// * `working_dir` - Directory the child process starts in
///
/// # Returns
/// The classified `RunOutcome` once the child exits, or an `InvocationError`
/// if it could not be started or waited on.
///
/// 以 `working_dir` 作为子进程的工作目录运行 `invocation`。
/// 该目录只作用于子进程，调用进程自身的工作目录保持不变。
pub async fn run_invocation(
    invocation: &TestInvocation,
    working_dir: &Path,
) -> Result<RunOutcome, InvocationError> {
    debug!(
        program = %invocation.program,
        args = ?invocation.args,
        dir = %working_dir.display(),
        "spawning test runner"
    );

    let cmd = inherited_command(&invocation.program, &invocation.args, working_dir);
    let mut child = spawn_inherited(cmd).map_err(|e| {
        debug!(program = %invocation.program, error = %e, "failed to spawn test runner");
        InvocationError::from_spawn(&invocation.program, e)
    })?;

    let status = child.wait().await.map_err(|source| InvocationError::Wait {
        program: invocation.program.clone(),
        source,
    })?;

    let outcome = RunOutcome::from_status(status);
    debug!(%status, %outcome, "test runner finished");
    Ok(outcome)
}
