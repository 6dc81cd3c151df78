//! # plot 子命令 CLI 定义
//!
//! 绘制单个晶格，或并行绘制全部目录条目
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::{Args, ValueEnum};
use latphys::plot::Projection;
use std::path::PathBuf;

/// 投影方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ProjectionArg {
    /// Drop the z coordinate
    Xy,
    /// Oblique projection of the z axis
    Oblique,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Xy => Projection::Xy,
            ProjectionArg::Oblique => Projection::Oblique,
        }
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Unitcell name (see `latphys list`); omit with --all
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    /// Geometric variant of the unitcell (1 = primitive)
    #[arg(long, default_value_t = 1)]
    pub variant: u32,

    /// Number of unitcells along each Bravais vector (e.g. 3x3, 2x2x2, 3)
    #[arg(short, long, default_value = "3")]
    pub size: String,

    /// Plot the unitcell only, without expansion
    #[arg(long, default_value_t = false, conflicts_with = "size")]
    pub unitcell: bool,

    /// Use open instead of periodic boundary conditions
    #[arg(long, default_value_t = false)]
    pub open: bool,

    /// Output image file (defaults to <name>.png / <name>.svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plot every catalog entry and variant into this directory
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Output directory for --all
    #[arg(long, default_value = "lattice_plots")]
    pub output_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Draw site labels
    #[arg(long, default_value_t = false)]
    pub site_labels: bool,

    /// Hide bonds that cross the boundary
    #[arg(long, default_value_t = false)]
    pub no_periodic: bool,

    /// Projection for 3D lattices
    #[arg(long, value_enum, default_value_t = ProjectionArg::Oblique)]
    pub projection: ProjectionArg,

    /// Write SVG instead of PNG
    #[arg(long, default_value_t = false)]
    pub svg: bool,

    /// Number of parallel jobs for --all (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "LATPHYS_JOBS")]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
