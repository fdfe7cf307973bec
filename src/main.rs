//! # audiocut - 音频批量截取/拼接工具箱
//!
//! 将零散的音频处理与剪贴板脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `menu`  - 交互式菜单（默认）
//! - `scan`  - 扫描输入目录中的音频文件
//! - `trim`  - 按时间段批量截取音频
//! - `merge` - 按选择顺序无损拼接音频
//! - `list`  - 查看输出目录中的文件
//! - `join`  - 剪贴板多行文本转逗号分隔
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (扫描与批量执行)
//!   │     ├── media/     (ffmpeg 调用: 截取/拼接)
//!   │     ├── parsers/   (选择/时间段/文本解析)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod media;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
