//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/` 和 `latphys` 库
//! - 子模块: list, show, build, plot

pub mod build;
pub mod list;
pub mod plot;
pub mod show;

use crate::cli::Commands;
use latphys::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List(args) => list::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Plot(args) => plot::execute(args),
    }
}
