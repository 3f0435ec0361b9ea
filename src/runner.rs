//! # Runner Module / 运行器模块
//!
//! This module contains the core functionality of the Portfolio test runner:
//! what gets launched, how a child's exit status is classified, and how
//! launch failures are categorized.
//!
//! 此模块包含 Portfolio 测试运行器的核心功能：
//! 启动什么命令、如何对子进程的退出状态进行分类，以及如何对启动失败进行归类。
//!
//! ## Module Organization / 模块组织
//!
//! - `config` - The fixed test invocation (program and argument vector)
//! - `error` - Invocation error taxonomy
//! - `invocation` - Spawn-and-wait of a test invocation
//! - `models` - Run outcome model
//!
//! - `config` - 固定的测试调用（程序和参数列表）
//! - `error` - 调用错误分类
//! - `invocation` - 启动并等待测试调用
//! - `models` - 运行结果模型

/// The fixed test invocation / 固定的测试调用
pub mod config;
/// Invocation error taxonomy / 调用错误分类
pub mod error;
/// Spawn-and-wait of a test invocation / 启动并等待测试调用
pub mod invocation;
/// Run outcome model / 运行结果模型
pub mod models;
