//! # 音频文件收集器
//!
//! 扫描输入目录，收集扩展名属于支持格式的音频文件。
//!
//! ## 功能
//! - 仅扫描目录第一层，忽略子目录
//! - 扩展名大小写不敏感
//! - 按文件名排序，保证列表编号与选择编号一致
//! - 跟随符号链接，失效的链接被忽略
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录

use crate::models::{AudioFile, AudioFormat};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 音频文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// 检查输入是否为目录
    pub fn is_directory(&self) -> bool {
        self.input.is_dir()
    }

    /// 输入目录
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// 收集所有音频文件，目录不存在时返回空列表
    pub fn collect(&self) -> Vec<AudioFile> {
        if !self.is_directory() {
            return vec![];
        }

        WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|entry| {
                // 文件名仅用于显示和命名输出，调用 ffmpeg 时使用原始路径
                let name = entry.file_name().to_string_lossy().to_string();
                let format = AudioFormat::from_path(entry.path())?;
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                Some(AudioFile {
                    name,
                    path: entry.path().to_path_buf(),
                    format,
                    size,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let names = [
            "b.mp3", "a.WAV", "c.flac", "d.aac", "e.ogg", "f.M4A", "notes.txt", "cover.jpg",
        ];
        for name in names {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let files = FileCollector::new(dir.path()).collect();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["a.WAV", "b.mp3", "c.flac", "d.aac", "e.ogg", "f.M4A"]);
        assert_eq!(files[0].format, AudioFormat::Wav);
        assert_eq!(files[0].size, 1);
        assert_eq!(files[0].path, dir.path().join("a.WAV"));
    }

    #[test]
    fn test_collect_skips_directories_and_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("album.mp3")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.mp3"), b"x").unwrap();
        fs::write(dir.path().join("top.mp3"), b"x").unwrap();

        let files = FileCollector::new(dir.path()).collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "top.mp3");
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_includes_symlinked_audio() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let target = elsewhere.path().join("real.mp3");
        fs::write(&target, b"xyz").unwrap();
        fs::write(dir.path().join("plain.mp3"), b"x").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.mp3")).unwrap();
        let dangling = elsewhere.path().join("gone.mp3");
        std::os::unix::fs::symlink(&dangling, dir.path().join("dead.mp3")).unwrap();

        let files = FileCollector::new(dir.path()).collect();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["link.mp3", "plain.mp3"]);
        assert_eq!(files[0].path, dir.path().join("link.mp3"));
        assert_eq!(files[0].size, 3);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_collect_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9.mp3");
        fs::write(dir.path().join(raw), b"x").unwrap();

        let files = FileCollector::new(dir.path()).collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "caf\u{FFFD}.mp3");
        assert_eq!(files[0].path, dir.path().join(raw));
        assert_eq!(files[0].format, AudioFormat::Mp3);
    }

    #[test]
    fn test_collect_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let collector = FileCollector::new(dir.path().join("missing"));
        assert!(!collector.is_directory());
        assert!(collector.collect().is_empty());
    }
}
