//! # 多行文本合并
//!
//! 将剪贴板中按行分隔的条目合并为逗号分隔的一行（带尾随逗号）。
//!
//! ## 依赖关系
//! - 被 `commands/join.rs` 使用
//! - 无外部模块依赖

/// 去除每行首尾空白、丢弃空行，用 `,` 连接并追加尾随逗号
pub fn join_lines(text: &str) -> String {
    let lines: Vec<&str> = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    let mut joined = lines.join(",");
    joined.push(',');
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("a\nb\nc"), "a,b,c,");
        assert_eq!(join_lines("  a  \n\n b\t\n"), "a,b,");
    }

    #[test]
    fn test_join_mixed_line_endings() {
        assert_eq!(join_lines("x\r\ny\rz\n"), "x,y,z,");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_lines(""), "");
        assert_eq!(join_lines(" \n \r\n\t"), "");
    }

    #[test]
    fn test_join_single_line() {
        assert_eq!(join_lines("only"), "only,");
    }
}
