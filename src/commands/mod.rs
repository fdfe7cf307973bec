//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `media/`, `parsers/`, `models/`, `utils/`
//! - 子模块: menu, scan, trim, merge, list, join

pub mod join;
pub mod list;
pub mod menu;
pub mod merge;
pub mod scan;
pub mod trim;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::media;
use crate::models::Session;
use crate::utils::output;

use std::path::Path;

/// 执行命令，未给出子命令时进入交互菜单
pub fn run(cli: Cli) -> Result<()> {
    let session = Session::from(cli.session);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::execute(session),
        Commands::Scan => scan::execute(&session),
        Commands::Trim(args) => trim::execute(&session, args),
        Commands::Merge(args) => merge::execute(&session, args),
        Commands::List => list::execute(&session),
        Commands::Join(args) => join::execute(args),
    }
}

/// 确保输出目录存在，新建时提示
fn prepare_output_dir(dir: &Path) -> Result<()> {
    if media::ensure_output_dir(dir)? {
        output::print_info(&format!("Created output directory: {}", dir.display()));
    }
    Ok(())
}
