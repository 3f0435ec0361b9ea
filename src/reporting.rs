//! # Reporting Module / 报告模块
//!
//! This module prints the localized, colored status lines that frame a test
//! run on standard output.
//!
//! 此模块在标准输出上打印本地化的彩色状态行。

pub mod console;

// Re-export common reporting functions
pub use console::{print_banner, print_error, print_outcome};
