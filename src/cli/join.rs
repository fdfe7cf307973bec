//! # join 子命令 CLI 定义
//!
//! 剪贴板多行文本转逗号分隔
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/join.rs`

use clap::Args;

/// join 子命令参数
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Print the result without writing it back to the clipboard
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
