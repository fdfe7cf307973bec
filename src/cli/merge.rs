//! # merge 子命令 CLI 定义
//!
//! 按选择顺序拼接音频
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/merge.rs`

use clap::Args;

/// merge 子命令参数
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Files to concatenate, in order: '0' for all, '1,3,2' or '2-5'
    #[arg(short, long)]
    pub select: String,
}
