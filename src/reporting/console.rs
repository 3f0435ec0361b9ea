//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the status lines printed around a test run: the banner
//! shown before spawning, and the single terminal line that ends every run
//! (success, failure with the child's exit code, or an error).
//!
//! 此模块处理测试运行前后打印的状态行：启动前显示的横幅，
//! 以及每次运行结束时恰好一条的最终消息（成功、带有子进程退出码的失败，或错误）。

use colored::*;

use crate::infra::t;
use crate::runner::{config::TestInvocation, error::InvocationError, models::RunOutcome};

/// Width of the separator printed below the banner.
pub const SEPARATOR_WIDTH: usize = 50;

/// Prints the banner shown before the test runner starts.
///
/// # Output Format / 输出格式
/// ```text
/// Running Portfolio 2 tests...
/// Command: npm test -- --testPathPattern=Portfolio2 --verbose --watchAll=false
/// --------------------------------------------------
/// ```
pub fn print_banner(invocation: &TestInvocation) {
    println!("{}", t!("running_tests").cyan().bold());
    println!("{}", t!("command_line", command = invocation.command_line()));
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// Prints the final line for a child that ran to completion.
/// 为运行结束的子进程打印最终消息。
pub fn print_outcome(outcome: &RunOutcome) {
    println!("\n{}", outcome_message(outcome));
}

/// Prints the final line for a run that could not be carried out.
/// 为无法执行的运行打印最终消息。
pub fn print_error(error: &anyhow::Error) {
    println!("{}", error_message(error).red().bold());
}

/// The colored terminal line for an outcome.
pub fn outcome_message(outcome: &RunOutcome) -> ColoredString {
    match outcome {
        RunOutcome::Passed => t!("tests_passed").green().bold(),
        RunOutcome::Failed { code } => t!("tests_failed", code = code).red().bold(),
        RunOutcome::Terminated { signal } => t!("tests_terminated", signal = signal).red().bold(),
    }
}

/// The uncolored terminal line for an error.
///
/// A missing test tool gets its dedicated hint; everything else is reported
/// with the error's full context chain.
pub fn error_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<InvocationError>() {
        Some(InvocationError::ToolNotFound { program }) => {
            t!("tool_not_found", program = program).to_string()
        }
        _ => t!("run_error", error = format!("{:#}", error)).to_string(),
    }
}
