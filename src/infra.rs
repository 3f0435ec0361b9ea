//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the Portfolio test runner,
//! including child-process spawning, path resolution and logging setup.
//!
//! 此模块为 Portfolio 测试运行器提供基础设施服务，
//! 包括子进程启动、路径解析和日志设置。

pub mod command;
pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
