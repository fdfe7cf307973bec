//! # merge 命令实现
//!
//! 按选择顺序无损拼接音频文件（ffmpeg concat demuxer + stream copy）。
//!
//! ## 依赖关系
//! - 使用 `cli/merge.rs` 定义的参数
//! - 使用 `media/concat.rs`
//! - `run_merge` 也被 `commands/menu.rs` 使用

use super::{prepare_output_dir, scan};
use crate::cli::merge::MergeArgs;
use crate::error::{AudiocutError, Result};
use crate::media::{CommandRunner, Concatenator, FfmpegRunner};
use crate::models::{AudioFile, Session};
use crate::parsers::{parse_selection, select};
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 执行 merge 命令
pub fn execute(session: &Session, args: MergeArgs) -> Result<()> {
    output::print_header("Merging Audio");

    let runner = FfmpegRunner::new(session.tool.as_str());
    runner.check()?;

    let files = scan::require_inventory(&session.input_dir)?;
    let indices = parse_selection(&args.select, files.len())?;
    let selected = select(&files, &indices);

    run_merge(session, &runner, &selected)?;
    Ok(())
}

/// 拼接选中文件，返回输出路径
pub fn run_merge<R: CommandRunner>(
    session: &Session,
    runner: &R,
    selected: &[AudioFile],
) -> Result<PathBuf> {
    if selected.len() < 2 {
        return Err(AudiocutError::NotEnoughFiles {
            count: selected.len(),
        });
    }

    prepare_output_dir(&session.output_dir)?;

    output::print_info(&format!(
        "Concatenating {} audio files in this order:",
        selected.len()
    ));
    let names: Vec<&str> = selected.iter().map(|f| f.name.as_str()).collect();
    output::print_numbered(&names);

    let spinner = progress::tool_spinner("Running ffmpeg concat");
    let result = Concatenator::new(runner, &session.output_dir).concat(selected);
    spinner.finish_and_clear();

    let merged = result?;
    output::print_success(&format!("Merged into {}", merged.display()));
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::testing::{audio_in, FakeRunner};

    fn session_in(dir: &std::path::Path) -> Session {
        Session {
            input_dir: dir.to_path_buf(),
            output_dir: dir.join("output"),
            tool: "ffmpeg".to_string(),
        }
    }

    #[test]
    fn test_run_merge_refuses_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        let runner = FakeRunner::default();
        let files = vec![audio_in(dir.path(), "a.mp3")];

        assert!(matches!(
            run_merge(&session, &runner, &files),
            Err(AudiocutError::NotEnoughFiles { count: 1 })
        ));
        assert!(!session.output_dir.exists());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_run_merge_output_name() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        let runner = FakeRunner::default();
        let files = vec![audio_in(dir.path(), "b.mp3"), audio_in(dir.path(), "a.mp3")];

        let merged = run_merge(&session, &runner, &files).unwrap();
        assert_eq!(merged, session.output_dir.join("b_merge.mp3"));
    }
}
