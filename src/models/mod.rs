//! # 数据模型模块
//!
//! 定义音频文件、时间段和会话状态。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `media/` 和 `commands/` 使用
//! - 子模块: audio, session

pub mod audio;
pub mod session;

pub use audio::{AudioFile, AudioFormat, TimeRange};
pub use session::Session;
