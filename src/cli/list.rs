//! # list 子命令 CLI 定义
//!
//! 列出预置晶胞目录
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Glob pattern for unitcell names
    #[arg(short, long, default_value = "*")]
    pub filter: String,

    /// Only show unitcells of this dimension
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=3))]
    pub dimension: Option<u8>,
}
