//! # 统一错误处理模块
//!
//! 定义 audiocut 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// audiocut 统一错误类型
#[derive(Error, Debug)]
pub enum AudiocutError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Terminal I/O failed")]
    Terminal(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 输入校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid time range '{0}', expected HH:MM-HH:MM or HH:MM:SS-HH:MM:SS")]
    InvalidTimeFormat(String),

    #[error("No audio files found in {path}")]
    NoAudioFiles { path: String },

    #[error("At least two files are required for concatenation, got {count}")]
    NotEnoughFiles { count: usize },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External tool '{tool}' not found, please install it or pass --ffmpeg")]
    ExternalToolMissing { tool: String },

    #[error("External command failed: {command}\n{stderr}")]
    ExternalToolFailure { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 剪贴板
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AudiocutError>;
