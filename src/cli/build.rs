//! # build 子命令 CLI 定义
//!
//! 将晶胞扩展为晶格，打印摘要并可导出 CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/build.rs`

use clap::Args;
use std::path::PathBuf;

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Unitcell name (see `latphys list`)
    pub name: String,

    /// Geometric variant of the unitcell (1 = primitive)
    #[arg(long, default_value_t = 1)]
    pub variant: u32,

    /// Number of unitcells along each Bravais vector (e.g. 4x4, 3x3x2, 6)
    #[arg(short, long, default_value = "4")]
    pub size: String,

    /// Use open instead of periodic boundary conditions
    #[arg(long, default_value_t = false)]
    pub open: bool,

    /// Directory for sites.csv and bonds.csv
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
