//! # 批量处理模块
//!
//! 提供音频文件扫描与顺序批量处理能力。
//!
//! ## 功能
//! - 收集输入目录中的音频文件
//! - 逐个处理，失败不中断
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `media/` 和 `commands/` 使用
//! - 使用 `walkdir` 扫描目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, JobResult};
