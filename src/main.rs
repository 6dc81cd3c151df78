//! # latphys - 晶格数据模型命令行工具
//!
//! ## 子命令
//! - `list`  - 列出预置晶胞
//! - `show`  - 显示晶胞详情
//! - `build` - 扩展晶格并导出 CSV
//! - `plot`  - 绘制晶格 (PNG/SVG)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── latphys (数据模型、晶胞目录、绘图、导出)
//!   ├── batch/      (并行批处理)
//!   └── utils/      (工具函数)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
