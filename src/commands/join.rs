//! # join 命令实现
//!
//! 读取剪贴板，将多行文本合并为逗号分隔的一行后写回剪贴板。
//!
//! ## 依赖关系
//! - 使用 `cli/join.rs` 定义的参数
//! - 使用 `parsers/lines.rs`
//! - 使用 `arboard` 访问剪贴板

use crate::cli::join::JoinArgs;
use crate::error::{AudiocutError, Result};
use crate::parsers::join_lines;
use crate::utils::output;

use arboard::Clipboard;

/// 执行 join 命令
pub fn execute(args: JoinArgs) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(clipboard_err)?;
    let original = clipboard.get_text().map_err(clipboard_err)?;

    output::print_info("Original clipboard content:");
    println!("{}", original);

    let joined = join_lines(&original);
    output::print_info("Processed content:");
    println!("{}", joined);

    if args.dry_run {
        output::print_info("Dry run, clipboard left unchanged");
        return Ok(());
    }

    clipboard.set_text(joined).map_err(clipboard_err)?;
    output::print_success("Copied the processed content to the clipboard");
    Ok(())
}

fn clipboard_err(e: arboard::Error) -> AudiocutError {
    AudiocutError::Clipboard(e.to_string())
}
