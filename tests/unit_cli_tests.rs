//! # CLI Parsing Unit Tests / CLI 解析单元测试

use portfolio_test_runner::cli::ignored_args;

#[test]
fn test_no_arguments() {
    assert!(ignored_args(["run-portfolio2-tests"]).is_empty());
}

#[test]
fn test_flags_and_values_are_collected() {
    assert_eq!(
        ignored_args(["run-portfolio2-tests", "--watch", "extra"]),
        vec!["--watch", "extra"]
    );
}

#[test]
fn test_help_and_version_are_not_special() {
    assert_eq!(
        ignored_args(["run-portfolio2-tests", "--help", "--version"]),
        vec!["--help", "--version"]
    );
}
