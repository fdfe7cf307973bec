//! # trim 子命令 CLI 定义
//!
//! 按时间段批量截取音频
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/trim.rs`

use clap::Args;

/// trim 子命令参数
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Files to trim: '0' for all, '3', '1,3,5' or '2-5' (1-based, as listed by `scan`)
    #[arg(short, long)]
    pub select: String,

    /// Time range to keep, e.g. '00:00-03:14:59'
    #[arg(short, long)]
    pub range: String,
}
