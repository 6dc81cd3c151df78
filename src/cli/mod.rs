//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `list`: 列出预置晶胞
//! - `show`: 显示晶胞的 Bravais 向量、格点和键
//! - `build`: 扩展晶格并导出
//! - `plot`: 绘制晶格（单个或全部目录条目）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: list, show, build, plot

pub mod build;
pub mod list;
pub mod plot;
pub mod show;

use clap::{Parser, Subcommand};

/// latphys - 晶格数据模型工具
#[derive(Parser)]
#[command(name = "latphys")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Build, inspect and plot unitcells and lattices", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List the pre-built unitcells
    List(list::ListArgs),

    /// Show Bravais vectors, sites and bonds of a unitcell
    Show(show::ShowArgs),

    /// Expand a unitcell into a lattice and export it
    Build(build::BuildArgs),

    /// Plot a lattice (PNG or SVG)
    Plot(plot::PlotArgs),
}
