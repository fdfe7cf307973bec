//! # 批量执行器
//!
//! 逐个处理选中的文件，单个文件失败不会中断整个批次。
//!
//! ## 功能
//! - 严格顺序执行（一次只运行一个外部进程）
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `media/trimmer.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::models::AudioFile;
use crate::utils::progress;

use indicatif::ProgressBar;
use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobResult {
    /// 处理成功
    Succeeded { file: String, output: PathBuf },
    /// 处理失败
    Failed { file: String, message: String },
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (文件名, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: JobResult) {
        match result {
            JobResult::Succeeded { .. } => self.success += 1,
            JobResult::Failed { file, message } => {
                self.failed += 1;
                self.failures.push((file, message));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// 顺序处理文件列表
    ///
    /// `processor` 收到当前进度条，输出消息时应通过 `pb.suspend` 避免打断进度条。
    pub fn run<F>(&self, files: &[AudioFile], mut processor: F) -> BatchResult
    where
        F: FnMut(&AudioFile, &ProgressBar) -> JobResult,
    {
        let pb = progress::batch_bar(files.len() as u64, self.show_progress);

        let mut batch_result = BatchResult::default();
        for file in files {
            pb.set_message(file.name.clone());
            let result = processor(file, &pb);
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AudioFormat;

    fn audio(name: &str) -> AudioFile {
        AudioFile {
            name: name.to_string(),
            path: PathBuf::from(name),
            format: AudioFormat::Mp3,
            size: 0,
        }
    }

    #[test]
    fn test_run_continues_after_failure() {
        let files = vec![audio("1.mp3"), audio("2.mp3"), audio("3.mp3")];
        let mut seen = Vec::new();

        let result = BatchRunner::new(false).run(&files, |file, _| {
            seen.push(file.name.clone());
            if file.name == "2.mp3" {
                JobResult::Failed {
                    file: file.name.clone(),
                    message: "boom".to_string(),
                }
            } else {
                JobResult::Succeeded {
                    file: file.name.clone(),
                    output: PathBuf::from("out").join(&file.name),
                }
            }
        });

        assert_eq!(seen, vec!["1.mp3", "2.mp3", "3.mp3"]);
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.failures, vec![("2.mp3".to_string(), "boom".to_string())]);
    }

    #[test]
    fn test_run_empty() {
        let result = BatchRunner::new(false).run(&[], |_, _| unreachable!());
        assert_eq!(result.total(), 0);
    }
}
