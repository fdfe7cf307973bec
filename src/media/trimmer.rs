//! # 音频截取
//!
//! 对每个选中文件调用一次 ffmpeg，截取 `[start, end)` 区间写入新文件：
//! ```text
//! ffmpeg -i <input> -ss <start> -to <end> -y <output>
//! ```
//! 输出文件名为 `原文件名+00_00-03_14_59.ext`，原文件不会被修改。
//!
//! ## 依赖关系
//! - 被 `commands/trim.rs`, `commands/menu.rs` 使用
//! - 使用 `batch/runner.rs` 顺序执行并汇总
//! - 使用 `media/runner.rs` 调用外部命令

use super::ensure_output_dir;
use super::runner::CommandRunner;
use crate::batch::{BatchResult, BatchRunner, JobResult};
use crate::models::{AudioFile, TimeRange};

use indicatif::ProgressBar;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 批量截取器
pub struct Trimmer<'a, R: CommandRunner> {
    runner: &'a R,
    output_dir: &'a Path,
}

impl<'a, R: CommandRunner> Trimmer<'a, R> {
    pub fn new(runner: &'a R, output_dir: &'a Path) -> Self {
        Self { runner, output_dir }
    }

    /// 输出文件路径
    pub fn output_path(&self, file: &AudioFile, range: &TimeRange) -> PathBuf {
        self.output_dir.join(file.trimmed_name(range))
    }

    /// 截取单个文件
    pub fn trim_one(&self, file: &AudioFile, range: &TimeRange) -> JobResult {
        let output = self.output_path(file, range);

        // 输出目录可能在批次中途被删除
        if let Err(e) = ensure_output_dir(self.output_dir) {
            return JobResult::Failed {
                file: file.name.clone(),
                message: e.to_string(),
            };
        }

        let args = trim_args(&file.path, &output, range);
        match self.runner.run(&args) {
            Ok(out) if out.success => JobResult::Succeeded {
                file: file.name.clone(),
                output,
            },
            Ok(out) => JobResult::Failed {
                file: file.name.clone(),
                message: out.stderr,
            },
            Err(e) => JobResult::Failed {
                file: file.name.clone(),
                message: e.to_string(),
            },
        }
    }

    /// 按选择顺序截取所有文件，单个失败不会中断批次
    ///
    /// `report` 在每个文件完成后被调用，用于输出逐个结果。
    pub fn trim_all<F>(
        &self,
        files: &[AudioFile],
        range: &TimeRange,
        batch: &BatchRunner,
        mut report: F,
    ) -> BatchResult
    where
        F: FnMut(&JobResult, &ProgressBar),
    {
        batch.run(files, |file, pb| {
            let result = self.trim_one(file, range);
            report(&result, pb);
            result
        })
    }
}

/// 构造截取命令参数
pub fn trim_args(input: &Path, output: &Path, range: &TimeRange) -> Vec<OsString> {
    vec![
        "-i".into(),
        input.into(),
        "-ss".into(),
        range.start.as_str().into(),
        "-to".into(),
        range.end.as_str().into(),
        "-y".into(),
        output.into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::testing::{audio_in, FakeRunner};
    use crate::parsers::parse_time_range;

    #[test]
    fn test_trim_args() {
        let range = parse_time_range("00:00-03:14:59").unwrap();
        let args = trim_args(Path::new("raw/song.mp3"), Path::new("out/x.mp3"), &range);
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(
            args,
            vec!["-i", "raw/song.mp3", "-ss", "00:00", "-to", "03:14:59", "-y", "out/x.mp3"]
        );
    }

    #[test]
    fn test_trim_one_names_output() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("output");
        let runner = FakeRunner::default();
        let range = parse_time_range("00:00-03:14:59").unwrap();
        let file = audio_in(dir.path(), "song.mp3");

        let result = Trimmer::new(&runner, &out_dir).trim_one(&file, &range);

        let expected = out_dir.join("song+00_00-03_14_59.mp3");
        assert_eq!(
            result,
            JobResult::Succeeded {
                file: "song.mp3".to_string(),
                output: expected.clone(),
            }
        );
        // 输出目录被自动创建
        assert!(out_dir.is_dir());

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].last().unwrap(), &expected.display().to_string());
    }

    #[test]
    fn test_partial_failure_attempts_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::failing_on(&[1]);
        let range = parse_time_range("00:10-00:20").unwrap();
        let files = vec![
            audio_in(dir.path(), "a.mp3"),
            audio_in(dir.path(), "b.mp3"),
            audio_in(dir.path(), "c.mp3"),
        ];

        let out_dir = dir.path().join("out");
        let mut reported = Vec::new();
        let result = Trimmer::new(&runner, &out_dir).trim_all(
            &files,
            &range,
            &BatchRunner::new(false),
            |r, _| reported.push(r.clone()),
        );

        assert_eq!(result.success, 2);
        assert_eq!(result.total(), 3);
        assert_eq!(runner.calls().len(), 3);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "b.mp3");
        assert!(result.failures[0].1.contains("simulated failure"));
        assert!(matches!(reported[2], JobResult::Succeeded { ref file, .. } if file == "c.mp3"));
    }

    #[test]
    fn test_runner_error_is_recorded_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let runner = FakeRunner::missing();
        let range = parse_time_range("00:00-00:01").unwrap();
        let files = vec![audio_in(dir.path(), "a.mp3"), audio_in(dir.path(), "b.mp3")];

        let out_dir = dir.path().join("out");
        let result = Trimmer::new(&runner, &out_dir).trim_all(
            &files,
            &range,
            &BatchRunner::new(false),
            |_, _| {},
        );

        assert_eq!(result.success, 0);
        assert_eq!(result.failed, 2);
        assert!(result.failures[0].1.contains("not found"));
    }
}
