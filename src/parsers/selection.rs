//! # 文件选择表达式解析器
//!
//! 将用户输入的编号表达式映射为文件列表中的下标。
//!
//! ## 语法
//! ```text
//! 0        全部文件（保持列表顺序）
//! 2-5      连续范围，包含两端
//! 1,3,5    逐个列出，保持输入顺序（拼接顺序）
//! 3        单个文件
//! ```
//! 编号从 1 开始，返回值为从 0 开始的下标。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 无外部模块依赖

use crate::error::{AudiocutError, Result};

/// 解析选择表达式，返回从 0 开始的下标（按选择顺序）
pub fn parse_selection(token: &str, len: usize) -> Result<Vec<usize>> {
    if len == 0 {
        return Err(AudiocutError::InvalidSelection(
            "there are no files to select".to_string(),
        ));
    }

    let token = token.trim();

    if token == "0" {
        return Ok((0..len).collect());
    }

    // 范围，如 "2-5"
    if token.contains('-') {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() != 2 {
            return Err(AudiocutError::InvalidSelection(token.to_string()));
        }
        let start = parse_index(parts[0])?;
        let end = parse_index(parts[1])?;
        check_bounds(start, len)?;
        check_bounds(end, len)?;
        if start > end {
            return Err(AudiocutError::InvalidSelection(format!(
                "range start {} is after range end {}",
                start, end
            )));
        }
        return Ok((start - 1..end).collect());
    }

    // 多选，如 "1,3,5"
    if token.contains(',') {
        return token
            .split(',')
            .map(|part| {
                let idx = parse_index(part)?;
                check_bounds(idx, len)?;
                Ok(idx - 1)
            })
            .collect();
    }

    let idx = parse_index(token)?;
    check_bounds(idx, len)?;
    Ok(vec![idx - 1])
}

/// 按下标取出元素，保持下标顺序
pub fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}

fn parse_index(part: &str) -> Result<usize> {
    let part = part.trim();
    part.parse()
        .map_err(|_| AudiocutError::InvalidSelection(format!("'{}' is not a number", part)))
}

fn check_bounds(idx: usize, len: usize) -> Result<()> {
    if (1..=len).contains(&idx) {
        Ok(())
    } else {
        Err(AudiocutError::InvalidSelection(format!(
            "{} is outside 1-{}",
            idx, len
        )))
    }
}
