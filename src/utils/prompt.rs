//! # 交互输入工具
//!
//! 封装 `console::Term` 的行读取。重试逻辑只负责循环，
//! 校验交给传入的纯函数，便于单独测试。
//!
//! ## 依赖关系
//! - 被 `commands/menu.rs` 使用
//! - 使用 `console` crate

use crate::error::{AudiocutError, Result};
use crate::utils::output;

use colored::Colorize;
use console::Term;
use std::io;

/// 显示提示并读取一行（去除首尾空白）
///
/// 非终端输入（管道/重定向）时改用标准输入，读到 EOF 返回错误以结束交互循环。
pub fn read_line(prompt: &str) -> Result<String> {
    let term = Term::stdout();
    term.write_str(&format!("{} ", prompt.bold()))
        .map_err(AudiocutError::Terminal)?;

    if term.is_term() {
        let line = term.read_line().map_err(AudiocutError::Terminal)?;
        return Ok(line.trim().to_string());
    }

    term.flush().map_err(AudiocutError::Terminal)?;
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(AudiocutError::Terminal)?;
    if read == 0 {
        return Err(AudiocutError::Terminal(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(line.trim().to_string())
}

/// 反复提示直到 `parse` 成功，失败时打印原因
pub fn read_until_valid<T, F>(prompt: &str, mut parse: F) -> Result<T>
where
    F: FnMut(&str) -> Result<T>,
{
    loop {
        let line = read_line(prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => output::print_warning(&e.to_string()),
        }
    }
}

/// y/n 确认，只有 `y`/`Y` 视为确认
pub fn confirm(prompt: &str) -> Result<bool> {
    let answer = read_line(&format!("{} (y/n):", prompt))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("Y"));
        assert!(!is_yes("yes"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
