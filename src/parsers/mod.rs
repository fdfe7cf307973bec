//! # 解析器模块
//!
//! 将交互输入解析为强类型结果，出错时返回 `Err` 而非循环重试，
//! 交互层据此决定是否重新提示。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: selection, time_range, lines

pub mod lines;
pub mod selection;
pub mod time_range;

pub use lines::join_lines;
pub use selection::{parse_selection, select};
pub use time_range::parse_time_range;
