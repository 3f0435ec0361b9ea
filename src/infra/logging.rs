//! # Logging Module / 日志模块
//!
//! Diagnostics go through `tracing` to stderr so that stdout carries only
//! the status lines. The filter comes from `RUST_LOG` and defaults to `warn`.
//!
//! 诊断信息通过 `tracing` 输出到 stderr，使 stdout 只包含状态行。
//! 过滤级别来自 `RUST_LOG`，默认为 `warn`。

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
