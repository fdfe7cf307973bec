//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `menu`: 交互式菜单（未给出子命令时的默认行为）
//! - `scan`: 扫描音频文件
//! - `trim`: 批量截取
//! - `merge`: 拼接
//! - `list`: 查看已处理文件
//! - `join`: 剪贴板文本转换
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: session, trim, merge, join

pub mod join;
pub mod merge;
pub mod session;
pub mod trim;

use clap::{Parser, Subcommand};

/// audiocut - 音频批量截取/拼接工具箱
#[derive(Parser)]
#[command(name = "audiocut")]
#[command(version)]
#[command(about = "Batch audio trimming and merging via ffmpeg", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub session: session::SessionArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default when no subcommand is given)
    Menu,

    /// List audio files found in the input directory
    Scan,

    /// Trim selected files to a time range
    Trim(trim::TrimArgs),

    /// Losslessly concatenate selected files in selection order
    Merge(merge::MergeArgs),

    /// List files in the output directory
    List,

    /// Join clipboard lines into a comma-separated string
    Join(join::JoinArgs),
}
