//! # 晶格图表生成
//!
//! 使用 `plotters` 库绘制格点与键。
//!
//! ## 功能
//! - 键画为线段，跨边界的键用浅色
//! - 可选格点标签
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `plot/mod.rs` 导出，被命令行 `plot` 调用
//! - 使用 `plotters` 渲染图表

use super::{ImageFormat, PlotOptions, Scene};
use crate::error::{LatticeError, Result};

use log::debug;
use plotters::prelude::*;
use std::path::Path;

/// 生成晶格图像
pub fn plot_scene(scene: &Scene, output_path: &Path, options: &PlotOptions) -> Result<()> {
    debug!(
        "Rendering {} site(s), {} segment(s) to {}",
        scene.points.len(),
        scene.segments.len(),
        output_path.display()
    );

    match options.format {
        ImageFormat::Svg => {
            let root =
                SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
            draw_scene(&root, scene, options)?;
            root.present()
                .map_err(|e| LatticeError::PlotError(e.to_string()))?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(output_path, (options.width, options.height))
                .into_drawing_area();
            draw_scene(&root, scene, options)?;
            root.present()
                .map_err(|e| LatticeError::PlotError(e.to_string()))?;
        }
    }
    Ok(())
}

/// 绘制场景的核心逻辑
fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scene: &Scene,
    options: &PlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| LatticeError::PlotError(format!("{:?}", e)))?;

    let ((x_min, x_max), (y_min, y_max)) = equal_aspect(scene.bounds(), options);

    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if !options.title.is_empty() {
        builder.caption(&options.title, ("sans-serif", 24).into_font());
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| LatticeError::PlotError(format!("{:?}", e)))?;

    let bond_color = RGBColor(60, 60, 60);
    let periodic_color = RGBColor(170, 170, 170);

    for segment in &scene.segments {
        if segment.periodic && !options.show_periodic_bonds {
            continue;
        }
        let style = if segment.periodic {
            periodic_color.stroke_width(1)
        } else {
            bond_color.stroke_width(2)
        };
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![segment.start, segment.end],
                style,
            )))
            .map_err(|e| LatticeError::PlotError(format!("{:?}", e)))?;
    }

    let site_color = RGBColor(0, 102, 204);
    chart
        .draw_series(
            scene
                .points
                .iter()
                .map(|p| Circle::new(p.position, options.site_radius, site_color.filled())),
        )
        .map_err(|e| LatticeError::PlotError(format!("{:?}", e)))?;

    if options.site_labels {
        let offset = 0.02 * (x_max - x_min);
        for point in &scene.points {
            let text_style = ("sans-serif", 12).into_font().color(&BLACK);
            chart
                .draw_series(std::iter::once(Text::new(
                    point.label.clone(),
                    (point.position.0 + offset, point.position.1 + offset),
                    text_style,
                )))
                .map_err(|e| LatticeError::PlotError(format!("{:?}", e)))?;
        }
    }

    Ok(())
}

/// 调整范围使 x/y 单位长度在像素上相等
fn equal_aspect(
    bounds: ((f64, f64), (f64, f64)),
    options: &PlotOptions,
) -> ((f64, f64), (f64, f64)) {
    let ((x_min, x_max), (y_min, y_max)) = bounds;
    let width = f64::from(options.width.max(1));
    let height = f64::from(options.height.max(1));

    let x_span = x_max - x_min;
    let y_span = y_max - y_min;
    let scale = (x_span / width).max(y_span / height);

    let x_center = 0.5 * (x_min + x_max);
    let y_center = 0.5 * (y_min + y_max);
    let half_w = 0.5 * scale * width;
    let half_h = 0.5 * scale * height;

    (
        (x_center - half_w, x_center + half_w),
        (y_center - half_h, y_center + half_h),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::planar;
    use crate::models::Lattice;
    use crate::plot::Projection;

    #[test]
    fn test_equal_aspect_keeps_bounds_inside() {
        let options = PlotOptions {
            width: 1000,
            height: 500,
            ..PlotOptions::default()
        };
        let ((x0, x1), (y0, y1)) = equal_aspect(((0.0, 1.0), (0.0, 4.0)), &options);
        assert!(x0 <= 0.0 && x1 >= 1.0);
        assert!(y0 <= 0.0 && y1 >= 4.0);
        assert!(((x1 - x0) / (y1 - y0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_plot_svg_writes_file() {
        let uc = planar::kagome(1).unwrap();
        let lattice = Lattice::periodic(&uc, [2, 2]).unwrap();
        let scene = Scene::from_lattice(&lattice, Projection::Xy);

        let path = std::env::temp_dir().join("latphys_test_kagome.svg");
        let options = PlotOptions {
            format: ImageFormat::Svg,
            ..PlotOptions::default()
        };
        plot_scene(&scene, &path, &options).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_plot_empty_scene() {
        let path = std::env::temp_dir().join("latphys_test_empty.svg");
        let options = PlotOptions {
            format: ImageFormat::Svg,
            ..PlotOptions::default()
        };
        assert!(plot_scene(&Scene::default(), &path, &options).is_ok());
        std::fs::remove_file(&path).ok();
    }
}
