//! # 音频拼接
//!
//! 按选择顺序将多个文件无损拼接为一个文件：
//! ```text
//! ffmpeg -f concat -safe 0 -i temp_file_list.txt -c copy -y <first>_merge.ext
//! ```
//! 清单文件在调用结束后总会被删除（无论成功与否）。
//! 不检查编码/容器是否兼容，不兼容时由 ffmpeg 报错。
//!
//! ## 依赖关系
//! - 被 `commands/merge.rs`, `commands/menu.rs` 使用
//! - 使用 `media/runner.rs` 调用外部命令

use super::ensure_output_dir;
use super::runner::CommandRunner;
use crate::error::{AudiocutError, Result};
use crate::models::AudioFile;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 清单文件名（固定，位于输出目录下；同时运行多个实例会冲突）
pub const MANIFEST_NAME: &str = "temp_file_list.txt";

/// 拼接器
pub struct Concatenator<'a, R: CommandRunner> {
    runner: &'a R,
    output_dir: &'a Path,
}

impl<'a, R: CommandRunner> Concatenator<'a, R> {
    pub fn new(runner: &'a R, output_dir: &'a Path) -> Self {
        Self { runner, output_dir }
    }

    /// 清单文件路径
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_NAME)
    }

    /// 输出文件路径（由第一个文件命名）
    pub fn output_path(&self, first: &AudioFile) -> PathBuf {
        self.output_dir.join(first.merged_name())
    }

    /// 拼接文件，返回输出路径
    ///
    /// 少于两个文件时直接拒绝，不产生任何副作用。
    pub fn concat(&self, files: &[AudioFile]) -> Result<PathBuf> {
        let first = match files {
            [first, _, ..] => first,
            _ => return Err(AudiocutError::NotEnoughFiles { count: files.len() }),
        };

        ensure_output_dir(self.output_dir)?;

        let output = self.output_path(first);
        let manifest = Manifest::write(self.manifest_path(), files)?;

        let args = concat_args(manifest.path(), &output);
        let out = self.runner.run(&args)?;

        if out.success {
            Ok(output)
        } else {
            Err(AudiocutError::ExternalToolFailure {
                command: self.runner.describe(&args),
                stderr: out.stderr,
            })
        }
    }
}

/// 构造拼接命令参数
pub fn concat_args(manifest: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-f".into(),
        "concat".into(),
        "-safe".into(),
        "0".into(),
        "-i".into(),
        manifest.into(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.into(),
    ]
}

/// concat 清单中的一行，单引号按 ffmpeg 规则转义
pub fn manifest_line(path: &Path) -> String {
    let escaped = path.to_string_lossy().replace('\'', r"'\''");
    format!("file '{}'", escaped)
}

/// 临时清单文件，离开作用域时删除
struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// 按顺序写入每个文件的绝对路径
    fn write(path: PathBuf, files: &[AudioFile]) -> Result<Self> {
        let write_err = |e| AudiocutError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        };

        let mut lines = String::new();
        for file in files {
            let absolute = fs::canonicalize(&file.path).map_err(|e| AudiocutError::FileReadError {
                path: file.path.display().to_string(),
                source: e,
            })?;
            lines.push_str(&manifest_line(&absolute));
            lines.push('\n');
        }

        let mut handle = File::create(&path).map_err(write_err)?;
        let manifest = Manifest { path: path.clone() };
        handle.write_all(lines.as_bytes()).map_err(write_err)?;

        Ok(manifest)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Manifest {
    fn drop(&mut self) {
        fs::remove_file(&self.path).ok();
    }
}
