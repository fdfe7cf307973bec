//! # 外部命令执行器
//!
//! 把 ffmpeg 调用收窄为"参数列表 → 退出状态 + 诊断文本"，
//! 业务逻辑（命名、选择、校验）只依赖 `CommandRunner` trait，测试中可替换为假实现。
//!
//! ## 依赖关系
//! - 被 `media/trimmer.rs`, `media/concat.rs` 使用
//! - 被 `commands/` 用于启动时检查 ffmpeg

use crate::error::{AudiocutError, Result};

use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};

/// 一次外部调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// 退出状态是否为 0
    pub success: bool,
    /// 标准错误输出（按 UTF-8 宽松解码）
    pub stderr: String,
}

/// 外部命令执行接口
pub trait CommandRunner {
    /// 程序名，用于错误信息
    fn program(&self) -> &str;

    /// 阻塞执行一次，直到进程退出
    fn run(&self, args: &[OsString]) -> Result<ToolOutput>;

    /// 命令行的可读形式
    fn describe(&self, args: &[OsString]) -> String {
        let mut line = self.program().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// 基于子进程的 ffmpeg 执行器
pub struct FfmpegRunner {
    program: String,
}

impl FfmpegRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 检查 ffmpeg 是否可用（运行 `-version`）
    pub fn check(&self) -> Result<()> {
        self.run(&["-version".into()]).map(|_| ())
    }
}

impl CommandRunner for FfmpegRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[OsString]) -> Result<ToolOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AudiocutError::ExternalToolMissing {
                    tool: self.program.clone(),
                },
                _ => AudiocutError::ExternalToolFailure {
                    command: self.describe(args),
                    stderr: e.to_string(),
                },
            })?;

        Ok(ToolOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
