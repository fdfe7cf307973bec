//! # 会话参数 CLI 定义
//!
//! 输入/输出目录与 ffmpeg 路径，所有子命令共享。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 转换为 `models::Session`

use crate::models::Session;
use clap::Args;
use std::path::PathBuf;

/// 全局会话参数
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Directory containing the source audio files
    #[arg(short, long, global = true, env = "AUDIOCUT_INPUT", default_value = "raw")]
    pub input: PathBuf,

    /// Directory receiving trimmed/merged files (created if absent)
    #[arg(short, long, global = true, env = "AUDIOCUT_OUTPUT", default_value = "output")]
    pub output: PathBuf,

    /// ffmpeg executable name or path
    #[arg(long, global = true, env = "AUDIOCUT_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: String,
}

impl From<SessionArgs> for Session {
    fn from(args: SessionArgs) -> Self {
        Session {
            input_dir: args.input,
            output_dir: args.output,
            tool: args.ffmpeg,
        }
    }
}
