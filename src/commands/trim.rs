//! # trim 命令实现
//!
//! 按时间段批量截取选中的音频文件。
//!
//! ## 功能
//! - 校验时间段与选择表达式
//! - 逐个调用 ffmpeg，失败不中断
//! - 汇总成功数量，输出失败诊断
//!
//! ## 依赖关系
//! - 使用 `cli/trim.rs` 定义的参数
//! - 使用 `media/trimmer.rs`, `batch/runner.rs`
//! - `run_trim` 也被 `commands/menu.rs` 使用

use super::{prepare_output_dir, scan};
use crate::batch::{BatchResult, BatchRunner, JobResult};
use crate::cli::trim::TrimArgs;
use crate::error::Result;
use crate::media::{CommandRunner, FfmpegRunner, Trimmer};
use crate::models::{AudioFile, Session, TimeRange};
use crate::parsers::{parse_selection, parse_time_range, select};
use crate::utils::output;

use std::path::Path;

/// 执行 trim 命令
pub fn execute(session: &Session, args: TrimArgs) -> Result<()> {
    output::print_header("Trimming Audio");

    let runner = FfmpegRunner::new(session.tool.as_str());
    runner.check()?;

    let range = parse_time_range(&args.range)?;
    let files = scan::require_inventory(&session.input_dir)?;
    let indices = parse_selection(&args.select, files.len())?;
    let selected = select(&files, &indices);

    run_trim(session, &runner, &selected, &range)?;
    Ok(())
}

/// 截取选中文件并打印逐个结果与汇总
pub fn run_trim<R: CommandRunner>(
    session: &Session,
    runner: &R,
    selected: &[AudioFile],
    range: &TimeRange,
) -> Result<BatchResult> {
    prepare_output_dir(&session.output_dir)?;

    output::print_info(&format!(
        "Trimming {} audio files to {}...",
        selected.len(),
        range
    ));

    let trimmer = Trimmer::new(runner, &session.output_dir);
    let result = trimmer.trim_all(selected, range, &BatchRunner::new(true), |job, pb| {
        pb.suspend(|| report_job(job, &session.output_dir));
    });

    println!();
    output::print_success(&format!(
        "Finished: {}/{} files trimmed successfully",
        result.success,
        result.total()
    ));
    if !result.failures.is_empty() {
        let failed: Vec<&str> = result.failures.iter().map(|(f, _)| f.as_str()).collect();
        output::print_warning(&format!("Failed: {}", failed.join(", ")));
    }

    Ok(result)
}

/// 打印单个文件的处理结果
fn report_job(job: &JobResult, output_dir: &Path) {
    match job {
        JobResult::Succeeded { file, output: path } => {
            output::print_export(file, &path.display().to_string());
        }
        JobResult::Failed { file, message } => {
            output::print_error(&format!("Failed to process {}", file));
            output::print_diagnostic(message);

            if mentions_missing_path(message) {
                output::print_warning(&format!(
                    "Make sure the output directory '{}' exists and is writable",
                    output_dir.display()
                ));
                if let Ok(cwd) = std::env::current_dir() {
                    output::print_info(&format!("Current working directory: {}", cwd.display()));
                }
            }
        }
    }
}

fn mentions_missing_path(message: &str) -> bool {
    message.contains("No such file or directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::testing::{audio_in, FakeRunner};

    #[test]
    fn test_run_trim_creates_output_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session {
            input_dir: dir.path().to_path_buf(),
            output_dir: dir.path().join("output"),
            tool: "ffmpeg".to_string(),
        };
        let files = vec![audio_in(dir.path(), "a.mp3"), audio_in(dir.path(), "b.wav")];
        let range = parse_time_range("00:00-00:30").unwrap();
        let runner = FakeRunner::failing_on(&[0]);

        let result = run_trim(&session, &runner, &files, &range).unwrap();

        assert!(session.output_dir.is_dir());
        assert_eq!(result.success, 1);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_mentions_missing_path() {
        assert!(mentions_missing_path(
            "out/x.mp3: No such file or directory"
        ));
        assert!(!mentions_missing_path("Invalid duration specification"));
    }
}
