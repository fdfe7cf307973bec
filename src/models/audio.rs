//! # 音频文件数据模型
//!
//! 描述输入目录中发现的音频文件、截取时间段，以及输出文件命名规则。
//!
//! ## 依赖关系
//! - 被 `batch/`, `media/`, `parsers/` 使用
//! - 无外部模块依赖

use std::fmt;
use std::path::{Path, PathBuf};

/// 支持的音频格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Flac,
    Aac,
    Ogg,
    M4a,
}

impl AudioFormat {
    /// 根据扩展名识别格式（大小写不敏感，不含点）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "wav" => Some(AudioFormat::Wav),
            "flac" => Some(AudioFormat::Flac),
            "aac" => Some(AudioFormat::Aac),
            "ogg" => Some(AudioFormat::Ogg),
            "m4a" => Some(AudioFormat::M4a),
            _ => None,
        }
    }

    /// 根据文件名识别格式
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Mp3 => write!(f, "mp3"),
            AudioFormat::Wav => write!(f, "wav"),
            AudioFormat::Flac => write!(f, "flac"),
            AudioFormat::Aac => write!(f, "aac"),
            AudioFormat::Ogg => write!(f, "ogg"),
            AudioFormat::M4a => write!(f, "m4a"),
        }
    }
}

/// 输入目录中的一个音频文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// 文件名（不含目录）
    pub name: String,
    /// 完整路径
    pub path: PathBuf,
    /// 音频格式
    pub format: AudioFormat,
    /// 文件大小（字节）
    pub size: u64,
}

impl AudioFile {
    /// 拆分文件名为 (主干, 扩展名)，扩展名包含前导点；无扩展名时为空串
    pub fn split_name(&self) -> (&str, &str) {
        split_extension(&self.name)
    }

    /// 截取输出文件名: `原文件名+00_00-03_14_59.ext`
    pub fn trimmed_name(&self, range: &TimeRange) -> String {
        let (stem, ext) = self.split_name();
        format!("{}+{}{}", stem, range.sanitized(), ext)
    }

    /// 拼接输出文件名: `原文件名_merge.ext`
    pub fn merged_name(&self) -> String {
        let (stem, ext) = self.split_name();
        format!("{}_merge{}", stem, ext)
    }
}

/// 按最后一个点拆分文件名，以点开头的隐藏文件名视为无扩展名
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].trim_start_matches('.').is_empty() => (name, ""),
        Some(idx) => (&name[..idx], &name[idx..]),
        None => (name, ""),
    }
}

/// 截取时间段，两端均为 `HH:MM` 或 `HH:MM:SS`
///
/// 只做语法层面的约束，`start < end` 交由 ffmpeg 判断。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// 用于文件名的形式，所有 `:` 替换为 `_`
    pub fn sanitized(&self) -> String {
        self.to_string().replace(':', "_")
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
