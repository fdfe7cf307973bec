//! # 会话状态
//!
//! 在菜单交互之间保持的输入/输出目录和 ffmpeg 可执行文件，显式传入各操作。
//!
//! ## 依赖关系
//! - 由 `cli/session.rs` 构造
//! - 被 `commands/` 使用

use std::path::PathBuf;

/// 当前会话配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// 音频源目录
    pub input_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
    /// ffmpeg 可执行文件
    pub tool: String,
}
