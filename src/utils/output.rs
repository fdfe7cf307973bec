//! # 终端输出
//!
//! 所有状态消息都以带颜色的标签开头（`[OK]`, `[ERR]`, `[WARN]`, `[*]`），
//! 错误写入 stderr，其余写入 stdout。外部工具的诊断信息缩进并变暗显示。
//!
//! ## 依赖关系
//! - 被 `commands/`, `utils/prompt.rs` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

/// 消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Ok,
    Err,
    Warn,
    Info,
}

impl Tag {
    fn label(self) -> ColoredString {
        match self {
            Tag::Ok => "[OK]".green().bold(),
            Tag::Err => "[ERR]".red().bold(),
            Tag::Warn => "[WARN]".yellow().bold(),
            Tag::Info => "[*]".blue().bold(),
        }
    }
}

fn tagged(tag: Tag, msg: &str) -> String {
    format!("{} {}", tag.label(), msg)
}

pub fn print_success(msg: &str) {
    println!("{}", tagged(Tag::Ok, msg));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", tagged(Tag::Err, msg));
}

pub fn print_warning(msg: &str) {
    println!("{}", tagged(Tag::Warn, msg));
}

pub fn print_info(msg: &str) {
    println!("{}", tagged(Tag::Info, msg));
}

/// 外部工具的诊断输出，跳过空行
pub fn print_diagnostic(text: &str) {
    for line in diagnostic_lines(text) {
        eprintln!("    {}", line.dimmed());
    }
}

fn diagnostic_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim_end).filter(|l| !l.trim().is_empty())
}

/// `源文件 -> 输出路径`
pub fn print_export(from: &str, to: &str) {
    let msg = format!("{} {} {}", from.dimmed(), "->".cyan(), to);
    println!("{}", tagged(Tag::Ok, &msg));
}

/// 从 1 开始编号的列表，编号与选择表达式一致
pub fn print_numbered<S: AsRef<str>>(items: &[S]) {
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", format!("{:>3}", i + 1).cyan(), item.as_ref());
    }
}

/// 标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(60).dimmed();
    println!("\n{}\n  {}\n{}\n", rule, title.bold(), rule);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_prefix() {
        colored::control::set_override(false);
        assert_eq!(tagged(Tag::Warn, "careful"), "[WARN] careful");
        assert_eq!(tagged(Tag::Info, "note"), "[*] note");
    }

    #[test]
    fn test_diagnostic_lines_skip_blank() {
        let lines: Vec<&str> = diagnostic_lines("first  \n\n   \nsecond\r\n").collect();
        assert_eq!(lines, vec!["first", "second"]);
    }
}
