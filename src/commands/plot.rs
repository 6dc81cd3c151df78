//! # plot 命令实现
//!
//! 绘制目录晶胞扩展出的晶格。
//!
//! ## 功能
//! - 单个晶格：`plot <name>`
//! - 批量：`plot --all`，对每个目录条目和变体并行绘图（rayon）
//! - 输出 PNG/SVG
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `latphys::plot` 生成图像

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::plot::PlotArgs;
use crate::utils::output;
use crate::utils::size::{parse_size, to_extent};

use latphys::catalog::{Catalog, CatalogUnitcell};
use latphys::error::{LatticeError, Result};
use latphys::models::{Bond, Lattice, Site, Unitcell};
use latphys::plot::{self, ImageFormat, PlotOptions, Scene};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 单次绘图的配置
struct PlotJob {
    size: Vec<usize>,
    unitcell_only: bool,
    open: bool,
    options: PlotOptions,
}

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    if args.all {
        execute_all(&args)
    } else {
        execute_single(&args)
    }
}

fn plot_options(args: &PlotArgs) -> PlotOptions {
    PlotOptions {
        width: args.width,
        height: args.height,
        site_labels: args.site_labels,
        show_periodic_bonds: !args.no_periodic,
        projection: args.projection.into(),
        format: if args.svg {
            ImageFormat::Svg
        } else {
            ImageFormat::Png
        },
        ..PlotOptions::default()
    }
}

fn image_extension(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Svg => "svg",
    }
}

/// 单个晶格模式
fn execute_single(args: &PlotArgs) -> Result<()> {
    let name = args
        .name
        .as_deref()
        .ok_or_else(|| LatticeError::InvalidArgument("missing unitcell name".to_string()))?;
    let entry = Catalog::find(name)?;

    let mut options = plot_options(args);
    options.title = format!("{} (variant {})", entry.name, args.variant);

    let output_path = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}_{}.{}",
            entry.name,
            args.variant,
            image_extension(options.format)
        ))
    });

    if output_path.exists() && !args.overwrite {
        output::print_skip(&format!(
            "Output exists, skipping: {} (use --overwrite)",
            output_path.display()
        ));
        return Ok(());
    }

    let job = PlotJob {
        size: parse_size(&args.size)?,
        unitcell_only: args.unitcell,
        open: args.open,
        options,
    };

    let unitcell = entry.build(args.variant)?;
    render(&unitcell, &job, &output_path)?;

    output::print_written("plot", &output_path);
    Ok(())
}

/// 批量模式：所有目录条目与变体
fn execute_all(args: &PlotArgs) -> Result<()> {
    output::print_header("Plotting All Pre-built Lattices");

    fs::create_dir_all(&args.output_dir).map_err(|e| LatticeError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let tasks: Vec<(&'static str, u32)> = Catalog::entries()
        .iter()
        .flat_map(|e| e.variants.iter().map(move |(v, _)| (e.name, *v)))
        .collect();

    let job = Arc::new(PlotJob {
        size: parse_size(&args.size)?,
        unitcell_only: args.unitcell,
        open: args.open,
        options: plot_options(args),
    });

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Plotting {} lattice(s) with {} job(s)",
        tasks.len(),
        runner.jobs()
    ));

    let output_dir = args.output_dir.clone();
    let overwrite = args.overwrite;
    let result = runner.run(tasks, |&(name, variant)| {
        plot_catalog_entry(name, variant, &output_dir, overwrite, &job)
    })?;

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} plot(s), {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    for task in &result.skipped_tasks {
        output::print_skip(&format!("  {} (output exists)", task));
    }
    for (task, err) in &result.failures {
        output::print_error(&format!("  {}: {}", task, err));
    }

    Ok(())
}

fn plot_catalog_entry(
    name: &str,
    variant: u32,
    output_dir: &Path,
    overwrite: bool,
    job: &PlotJob,
) -> ProcessResult {
    let task = format!("{} variant {}", name, variant);
    let output_path = output_dir.join(format!(
        "{}_{}.{}",
        name,
        variant,
        image_extension(job.options.format)
    ));

    if output_path.exists() && !overwrite {
        return ProcessResult::Skipped(task);
    }

    let mut options = job.options.clone();
    options.title = task.clone();
    let job = PlotJob {
        size: job.size.clone(),
        unitcell_only: job.unitcell_only,
        open: job.open,
        options,
    };

    match Catalog::get(name, variant).and_then(|uc| render(&uc, &job, &output_path)) {
        Ok(()) => ProcessResult::Success(task),
        Err(e) => ProcessResult::Failed(task, e.to_string()),
    }
}

fn render(unitcell: &CatalogUnitcell, job: &PlotJob, output_path: &Path) -> Result<()> {
    let scene = match unitcell {
        CatalogUnitcell::Planar(uc) => scene_for(uc, job)?,
        CatalogUnitcell::Spatial(uc) => scene_for(uc, job)?,
    };
    plot::plot_scene(&scene, output_path, &job.options)
}

fn scene_for<const D: usize>(
    uc: &Unitcell<Site<i32, D>, Bond<i32, D>, D, D>,
    job: &PlotJob,
) -> Result<Scene> {
    if job.unitcell_only {
        return Ok(Scene::from_unitcell(uc, job.options.projection));
    }

    let extent = to_extent::<D>(&job.size)?;
    let lattice = if job.open {
        Lattice::open(uc, extent)?
    } else {
        Lattice::periodic(uc, extent)?
    };
    Ok(Scene::from_lattice(&lattice, job.options.projection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(size: Vec<usize>, unitcell_only: bool) -> PlotJob {
        PlotJob {
            size,
            unitcell_only,
            open: true,
            options: PlotOptions::default(),
        }
    }

    #[test]
    fn test_scene_for_unitcell_only() {
        let uc = latphys::catalog::planar::lieb(1).unwrap();
        let scene = scene_for(&uc, &job(vec![5], true)).unwrap();
        assert_eq!(scene.points.len(), 3);
        assert_eq!(scene.segments.len(), 8);
    }

    #[test]
    fn test_scene_for_expanded_lattice() {
        let uc = latphys::catalog::spatial::diamond(1).unwrap();
        let scene = scene_for(&uc, &job(vec![2], false)).unwrap();
        assert_eq!(scene.points.len(), 16);
    }

    #[test]
    fn test_scene_for_size_mismatch() {
        let uc = latphys::catalog::planar::square(1).unwrap();
        assert!(scene_for(&uc, &job(vec![2, 2, 2], false)).is_err());
    }

    #[test]
    fn test_plot_catalog_entry_skip_and_fail() {
        let dir = std::env::temp_dir().join("latphys_test_plot_all");
        fs::create_dir_all(&dir).unwrap();
        let mut plot_job = job(vec![2], false);
        plot_job.options.format = ImageFormat::Svg;

        fs::write(dir.join("triangular_1.svg"), "<svg/>").unwrap();
        let skipped = plot_catalog_entry("triangular", 1, &dir, false, &plot_job);
        assert!(matches!(skipped, ProcessResult::Skipped(_)));

        let failed = plot_catalog_entry("triangular", 9, &dir, true, &plot_job);
        match failed {
            ProcessResult::Failed(task, err) => {
                assert_eq!(task, "triangular variant 9");
                assert!(err.contains("no variant 9"));
            }
            other => panic!("expected failure, got {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }
}
