//! # 进度显示
//!
//! 批量截取使用计数进度条（当前文件名作为消息），拼接只有一次 ffmpeg 调用，
//! 使用 spinner。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/merge.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 批量进度条，`visible` 为 false 时返回隐藏的进度条（测试与静默模式）
pub fn batch_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:32.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}

/// ffmpeg 运行期间的 spinner
pub fn tool_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed} {msg}")
            .unwrap()
            .tick_chars("|/-\\ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
