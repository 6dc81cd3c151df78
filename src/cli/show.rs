//! # show 子命令 CLI 定义
//!
//! 显示单个晶胞的详细信息
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use clap::Args;

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Unitcell name (see `latphys list`)
    pub name: String,

    /// Geometric variant of the unitcell (1 = primitive)
    #[arg(long, default_value_t = 1)]
    pub variant: u32,

    /// Hide the bond table
    #[arg(long, default_value_t = false)]
    pub no_bonds: bool,
}
