//! # scan 命令实现
//!
//! 扫描输入目录并以表格列出音频文件，编号即选择编号。
//!
//! ## 依赖关系
//! - 使用 `batch/collector.rs`
//! - 使用 `utils/output.rs`
//! - `inventory` 也被 trim/merge/menu 使用

use crate::batch::FileCollector;
use crate::error::{AudiocutError, Result};
use crate::models::{AudioFile, Session};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 文件列表行
#[derive(Debug, Clone, Tabled)]
struct FileRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    name: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// 执行 scan 命令
pub fn execute(session: &Session) -> Result<()> {
    output::print_header("Scanning Audio Files");
    show_inventory(&session.input_dir);
    Ok(())
}

/// 扫描并打印，找不到文件时给出提示
pub fn show_inventory(dir: &Path) {
    let files = inventory(dir);
    if files.is_empty() {
        output::print_warning(&format!("No audio files found in {}", dir.display()));
        if let Ok(cwd) = std::env::current_dir() {
            output::print_info(&format!("Current working directory: {}", cwd.display()));
        }
        output::print_info("Use --input (or menu option 1) to point at the right directory.");
        return;
    }

    output::print_info(&format!(
        "Found {} audio files in {}:",
        files.len(),
        dir.display()
    ));
    print_file_table(&files);
}

/// 收集音频文件，目录不存在时警告并返回空列表
pub fn inventory(dir: &Path) -> Vec<AudioFile> {
    let collector = FileCollector::new(dir);
    if !collector.is_directory() {
        output::print_warning(&format!("Directory not found: {}", collector.input().display()));
    }
    collector.collect()
}

/// 同 `inventory`，但目录不存在或没有音频文件时返回错误
pub fn require_inventory(dir: &Path) -> Result<Vec<AudioFile>> {
    let collector = FileCollector::new(dir);
    if !collector.is_directory() {
        return Err(AudiocutError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let files = collector.collect();
    if files.is_empty() {
        return Err(AudiocutError::NoAudioFiles {
            path: dir.display().to_string(),
        });
    }
    Ok(files)
}

/// 打印文件表格
pub fn print_file_table(files: &[AudioFile]) {
    let rows: Vec<FileRow> = files
        .iter()
        .enumerate()
        .map(|(i, f)| FileRow {
            index: i + 1,
            name: f.name.clone(),
            format: f.format.to_string(),
            size: format_size(f.size),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
}

/// 人类可读的文件大小
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn test_require_inventory_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"x").unwrap();
        assert!(matches!(
            require_inventory(dir.path()),
            Err(AudiocutError::NoAudioFiles { .. })
        ));
    }

    #[test]
    fn test_require_inventory_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            require_inventory(&dir.path().join("missing")),
            Err(AudiocutError::DirectoryNotFound { .. })
        ));
    }
}
