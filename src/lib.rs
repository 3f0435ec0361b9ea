//! # Portfolio Test Runner Library / Portfolio 测试运行器库
//!
//! This library provides the functionality behind the `run-portfolio2-tests`
//! binary: it launches `npm test` with a fixed set of Jest flags from the
//! program's own directory and turns the child's exit status into a report
//! and an exit code.
//!
//! 此库为 `run-portfolio2-tests` 二进制程序提供功能：
//! 它在程序所在目录下以固定的 Jest 参数启动 `npm test`，
//! 并将子进程的退出状态转换为报告和退出码。
//!
//! ## Modules / 模块
//!
//! - `runner` - The fixed invocation, outcome model, error taxonomy and the spawn-and-wait logic
//! - `infra` - Infrastructure services like process spawning, path resolution and logging
//! - `reporting` - Console status lines
//! - `cli` - Command-line interface and top-level flow
//!
//! - `runner` - 固定调用、结果模型、错误分类以及启动并等待的逻辑
//! - `infra` - 基础设施服务，如进程启动、路径解析和日志
//! - `reporting` - 控制台状态输出
//! - `cli` - 命令行接口和顶层流程

pub mod cli;
pub mod infra;
pub mod reporting;
pub mod runner;

// Re-export commonly used items
pub use runner::config::TestInvocation;
pub use runner::error::InvocationError;
pub use runner::invocation::run_invocation;
pub use runner::models::RunOutcome;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
///
/// Returns the locale that was selected.
pub fn init() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let lang = select_locale(&locale, &available_locales());
    rust_i18n::set_locale(lang);
    lang.to_string()
}

/// Locales bundled from the `locales/` directory.
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// Picks the best available locale for a system locale string.
///
/// `en_US.UTF-8`-style values are normalized to `en-US` before matching.
pub fn select_locale<'a>(system_locale: &str, available: &[&'a str]) -> &'a str {
    let normalized = system_locale
        .split('.')
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    if let Some(full) = available.iter().find(|l| l.eq_ignore_ascii_case(&normalized)) {
        return *full;
    }

    normalized
        .split('-')
        .next()
        .and_then(|lang_code| available.iter().find(|l| l.eq_ignore_ascii_case(lang_code)))
        .copied()
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
