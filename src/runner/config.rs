/// The npm executable name. On Windows npm ships as a batch shim, which
/// `CreateProcess` only resolves when the extension is spelled out.
/// npm 可执行文件名。在 Windows 上 npm 以批处理脚本形式提供，
/// 只有写明扩展名时 `CreateProcess` 才能找到它。
#[cfg(windows)]
pub const NPM_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
pub const NPM_PROGRAM: &str = "npm";

/// Arguments passed to npm: run the `test` script and forward the Jest flags
/// that select the Portfolio 2 suite, print per-test results and disable watch mode.
/// 传递给 npm 的参数：运行 `test` 脚本，并转发 Jest 参数以选择 Portfolio 2 测试套件、
/// 打印每个测试的结果并禁用监视模式。
pub const PORTFOLIO2_ARGS: [&str; 5] = [
    "test",
    "--",
    "--testPathPattern=Portfolio2",
    "--verbose",
    "--watchAll=false",
];

/// Represents the external test-runner invocation: an executable name and
/// an ordered argument vector. The working directory is supplied at run time.
/// 代表外部测试运行器的调用：一个可执行文件名和有序的参数列表。
/// 工作目录在运行时提供。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInvocation {
    /// The executable, resolved through the search path when spawned.
    /// 可执行文件，启动时通过搜索路径解析。
    pub program: String,
    /// The arguments, passed verbatim.
    /// 参数，原样传递。
    pub args: Vec<String>,
}

impl TestInvocation {
    /// The `npm test -- --testPathPattern=Portfolio2 --verbose --watchAll=false` invocation.
    pub fn portfolio2() -> Self {
        Self {
            program: NPM_PROGRAM.to_string(),
            args: PORTFOLIO2_ARGS.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Renders the invocation as a single space-joined command line for display,
    /// e.g. `npm test -- --testPathPattern=Portfolio2 --verbose --watchAll=false`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TestInvocation {
    fn default() -> Self {
        Self::portfolio2()
    }
}
