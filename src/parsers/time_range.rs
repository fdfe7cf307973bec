//! # 时间段解析器
//!
//! 校验并拆分 `HH:MM[:SS]-HH:MM[:SS]` 形式的截取时间段。
//! 仅做格式校验，不检查分钟/秒是否越界。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/audio.rs`

use crate::error::{AudiocutError, Result};
use crate::models::TimeRange;

use regex::Regex;
use std::sync::LazyLock;

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}:\d{2}(?::\d{2})?)-(\d{2}:\d{2}(?::\d{2})?)$").unwrap()
});

/// 解析时间段
pub fn parse_time_range(text: &str) -> Result<TimeRange> {
    let caps = TIME_RANGE
        .captures(text)
        .ok_or_else(|| AudiocutError::InvalidTimeFormat(text.to_string()))?;

    Ok(TimeRange {
        start: caps[1].to_string(),
        end: caps[2].to_string(),
    })
}
