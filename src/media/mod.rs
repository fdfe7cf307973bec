//! # 媒体处理模块
//!
//! 通过外部 ffmpeg 完成截取与拼接。
//!
//! ## 功能
//! - `runner`: 外部命令执行接口及子进程实现
//! - `trimmer`: 按时间段批量截取
//! - `concat`: 按选择顺序无损拼接
//!
//! 每次调用的状态: `Idle → Invoking → {Succeeded, Failed}`，两种结果均为终态，
//! 由调用方汇总。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `batch/`, `models/`

pub mod concat;
pub mod runner;
pub mod trimmer;

pub use concat::Concatenator;
pub use runner::{CommandRunner, FfmpegRunner};
pub use trimmer::Trimmer;

use crate::error::{AudiocutError, Result};
use std::fs;
use std::path::Path;

/// 确保输出目录存在，返回是否新建
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|e| AudiocutError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;
    Ok(true)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        assert!(ensure_output_dir(&out).unwrap());
        assert!(out.is_dir());
        assert!(!ensure_output_dir(&out).unwrap());
    }

    #[test]
    fn test_ensure_output_dir_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("out");
        fs::write(&blocker, b"").unwrap();
        assert!(matches!(
            ensure_output_dir(&blocker),
            Err(AudiocutError::FileWriteError { .. })
        ));
    }
}
