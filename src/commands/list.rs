//! # list 命令实现
//!
//! 列出输出目录中的文件（截取/拼接结果）。
//!
//! ## 依赖关系
//! - 使用 `utils/output.rs`
//! - `show_processed` 也被 `commands/menu.rs` 使用

use crate::error::{AudiocutError, Result};
use crate::models::Session;
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行 list 命令
pub fn execute(session: &Session) -> Result<()> {
    output::print_header("Processed Files");
    show_processed(&session.output_dir)
}

/// 打印输出目录内容
pub fn show_processed(dir: &Path) -> Result<()> {
    output::print_info(&format!("Files in {}:", dir.display()));
    match processed_files(dir)? {
        None => output::print_warning("Output directory does not exist"),
        Some(names) if names.is_empty() => output::print_warning("Output directory is empty"),
        Some(names) => output::print_numbered(&names),
    }
    Ok(())
}

/// 输出目录中的条目名（排序），目录不存在时返回 `None`
pub fn processed_files(dir: &Path) -> Result<Option<Vec<String>>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(|e| AudiocutError::FileReadError {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    Ok(Some(names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(processed_files(&dir.path().join("missing")).unwrap(), None);
        assert_eq!(processed_files(dir.path()).unwrap(), Some(vec![]));

        fs::write(dir.path().join("b_merge.mp3"), b"").unwrap();
        fs::write(dir.path().join("a+00_00-00_10.mp3"), b"").unwrap();
        assert_eq!(
            processed_files(dir.path()).unwrap(),
            Some(vec!["a+00_00-00_10.mp3".to_string(), "b_merge.mp3".to_string()])
        );
    }
}
