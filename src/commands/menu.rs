//! # 交互式菜单
//!
//! 未给出子命令时的默认入口。菜单循环只负责读取输入与重试，
//! 校验与处理逻辑全部复用其他命令模块中的纯函数。
//!
//! ## 菜单
//! ```text
//! 1 设置输入目录    2 设置输出目录    3 扫描音频文件
//! 4 截取音频        5 拼接音频        6 查看已处理文件
//! 7 帮助            0 退出
//! ```
//!
//! ## 依赖关系
//! - 使用 `commands/{scan,trim,merge,list}.rs`
//! - 使用 `utils/prompt.rs`, `utils/output.rs`

use super::{list, merge, scan, trim};
use crate::error::{AudiocutError, Result};
use crate::media::{CommandRunner, FfmpegRunner};
use crate::models::{AudioFile, Session};
use crate::parsers::{parse_selection, parse_time_range, select};
use crate::utils::{output, prompt};

use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 菜单循环的下一步
enum Flow {
    Continue,
    Exit,
}

/// 进入交互菜单
pub fn execute(mut session: Session) -> Result<()> {
    let runner = FfmpegRunner::new(session.tool.as_str());
    runner.check()?;

    loop {
        print_menu(&session);

        match handle_choice(&mut session, &runner) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(AudiocutError::Terminal(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e @ AudiocutError::Terminal(_)) => return Err(e),
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    output::print_success("Thanks for using audiocut, bye!");
    Ok(())
}

fn print_menu(session: &Session) {
    output::print_header("audiocut - Main Menu");
    println!("  Input directory:  {}", session.input_dir.display().to_string().cyan());
    println!("  Output directory: {}", session.output_dir.display().to_string().cyan());
    println!();
    println!("  1. Set input directory");
    println!("  2. Set output directory");
    println!("  3. Scan audio files");
    println!("  4. Trim audio");
    println!("  5. Merge audio");
    println!("  6. Show processed files");
    println!("  7. Help");
    println!("  0. Exit");
    println!();
}

fn handle_choice<R: CommandRunner>(session: &mut Session, runner: &R) -> Result<Flow> {
    let choice = prompt::read_line("Choose an option:")?;

    match choice.as_str() {
        "1" => {
            session.input_dir = ask_directory("Audio source directory", &session.input_dir)?;
        }
        "2" => {
            session.output_dir = ask_directory("Output directory", &session.output_dir)?;
        }
        "3" => scan::show_inventory(&session.input_dir),
        "4" => trim_interactive(session, runner)?,
        "5" => merge_interactive(session, runner)?,
        "6" => list::show_processed(&session.output_dir)?,
        "7" => print_help(),
        "0" => return Ok(Flow::Exit),
        _ => output::print_warning("Invalid choice, please try again"),
    }

    Ok(Flow::Continue)
}

/// 菜单 4: 选择文件、输入时间段、批量截取
fn trim_interactive<R: CommandRunner>(session: &Session, runner: &R) -> Result<()> {
    let files = scan::inventory(&session.input_dir);
    if files.is_empty() {
        output::print_warning(&format!(
            "No audio files found in {}",
            session.input_dir.display()
        ));
        return Ok(());
    }

    let selected = choose_files(&files, "Select files to trim")?;
    let range = prompt::read_until_valid(
        "Time range to keep (e.g. 00:00-03:14:59):",
        parse_time_range,
    )?;

    report_failure(trim::run_trim(session, runner, &selected, &range).map(|_| ()))?;
    offer_listing(&session.output_dir)
}

/// 菜单 5: 按选择顺序拼接
fn merge_interactive<R: CommandRunner>(session: &Session, runner: &R) -> Result<()> {
    let files = scan::inventory(&session.input_dir);
    if files.is_empty() {
        output::print_warning(&format!(
            "No audio files found in {}",
            session.input_dir.display()
        ));
        return Ok(());
    }

    output::print_info("Files are merged in the order you select them");
    let selected = choose_files(&files, "Select files to merge")?;
    if selected.len() < 2 {
        output::print_warning("At least two files are required for merging");
        return Ok(());
    }

    report_failure(merge::run_merge(session, runner, &selected).map(|_| ()))?;
    offer_listing(&session.output_dir)
}

/// 打印处理失败但继续菜单流程；终端错误仍向上传递
fn report_failure(result: Result<()>) -> Result<()> {
    match result {
        Err(e @ AudiocutError::Terminal(_)) => Err(e),
        Err(e) => {
            output::print_error(&e.to_string());
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

/// 列出文件并读取选择表达式，直到有效
fn choose_files(files: &[AudioFile], header: &str) -> Result<Vec<AudioFile>> {
    println!("\n{}:", header.bold());
    println!("  {}. All files", format!("{:>3}", 0).cyan());
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    output::print_numbered(&names);
    println!();
    output::print_info("Pick several files with commas, e.g. 1,3,5");
    output::print_info("Pick a run of files with a range, e.g. 2-5 selects 2,3,4,5");

    let indices = prompt::read_until_valid("File numbers (0 = all):", |token| {
        parse_selection(token, files.len())
    })?;
    Ok(select(files, &indices))
}

fn offer_listing(output_dir: &Path) -> Result<()> {
    if prompt::confirm("\nView the output directory?")? {
        list::show_processed(output_dir)?;
    }
    Ok(())
}

/// 菜单 1/2: 读取目录，不存在时询问是否创建
fn ask_directory(label: &str, current: &Path) -> Result<PathBuf> {
    loop {
        let input = prompt::read_line(&format!("{} [{}]:", label, current.display()))?;
        let dir = resolve_directory(&input, current);
        let absolute = std::path::absolute(&dir).unwrap_or_else(|_| dir.clone());

        if dir.is_relative() {
            output::print_info(&format!(
                "Relative path, resolves to {}",
                absolute.display()
            ));
        }

        if absolute.is_dir() {
            return Ok(dir);
        }
        if absolute.exists() {
            output::print_warning(&format!("{} is not a directory", absolute.display()));
            continue;
        }

        let question = format!("Directory {} does not exist, create it?", absolute.display());
        if !prompt::confirm(&question)? {
            output::print_warning("Please enter a valid directory path");
            continue;
        }

        match fs::create_dir_all(&absolute) {
            Ok(()) => {
                output::print_success(&format!("Created directory: {}", absolute.display()));
                return Ok(dir);
            }
            Err(e) => output::print_error(&format!("Failed to create directory: {}", e)),
        }
    }
}

/// 空输入沿用当前目录
fn resolve_directory(input: &str, current: &Path) -> PathBuf {
    let input = input.trim();
    if input.is_empty() {
        current.to_path_buf()
    } else {
        PathBuf::from(input)
    }
}

fn print_help() {
    output::print_header("audiocut - Help");
    println!("  1. Trims a time range out of many audio files in one go.");
    println!("  2. Time ranges look like HH:MM-HH:MM or HH:MM:SS-HH:MM:SS.");
    println!("  3. 00:00-03:14:59 keeps everything from 0h0m0s to 3h14m59s.");
    println!("  4. Trimmed files are named <name>+00_00-03_14_59.<ext>.");
    println!("  5. All processing is done by the ffmpeg installed on this system.");
    println!("  6. Merging joins the selected files in the order they were selected.");
    println!("  7. Merged files are named <first file name>_merge.<ext>.");
    println!();
    println!("  {}", "Notes:".bold());
    println!("  - Relative and absolute paths are both accepted.");
    println!("  - On Windows make sure paths use a valid format.");
    println!("  - ffmpeg is looked up on startup (override with --ffmpeg).");
    println!("  - Merging copies streams without re-encoding; the selected files");
    println!("    must share a compatible format or the result may fail or sound wrong.");
}
