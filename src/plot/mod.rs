//! # 晶格绘图模块
//!
//! 绘图协作者只需要格点、键和坐标的读访问：
//! `Scene` 从晶胞/晶格读取数据并投影到平面，`render` 用 `plotters` 输出图像。
//!
//! ## 子模块
//! - `render`: 图表生成
//!
//! ## 依赖关系
//! - 被命令行 `plot` 使用
//! - 使用 `models/`

pub mod render;

pub use render::plot_scene;

use crate::models::{Lattice, LatticeBond, LatticeSite, Unitcell};
use std::fmt::Display;

/// 投影方式（三维结构投影到平面）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// 直接丢弃 z 分量
    Xy,
    /// 斜投影：z 沿 30° 方向缩短一半
    #[default]
    Oblique,
}

impl Projection {
    /// 将任意维坐标投影到平面
    pub fn project(&self, point: &[f64]) -> (f64, f64) {
        let x = point.first().copied().unwrap_or(0.0);
        let y = point.get(1).copied().unwrap_or(0.0);
        let z = point.get(2).copied().unwrap_or(0.0);
        match self {
            Projection::Xy => (x, y),
            Projection::Oblique => {
                let (sin, cos) = 30f64.to_radians().sin_cos();
                (x + 0.5 * z * cos, y + 0.5 * z * sin)
            }
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

/// 绘图显示选项
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// 图像宽度 (px)
    pub width: u32,
    /// 图像高度 (px)
    pub height: u32,
    /// 是否显示格点标签
    pub site_labels: bool,
    /// 是否绘制跨越边界的键
    pub show_periodic_bonds: bool,
    /// 格点半径 (px)
    pub site_radius: u32,
    pub projection: Projection,
    pub format: ImageFormat,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            width: 800,
            height: 800,
            site_labels: false,
            show_periodic_bonds: true,
            site_radius: 5,
            projection: Projection::default(),
            format: ImageFormat::default(),
            title: String::new(),
        }
    }
}

/// 投影后的格点
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePoint {
    pub position: (f64, f64),
    pub label: String,
}

/// 投影后的键线段
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSegment {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub periodic: bool,
}

/// 待绘制的平面场景
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub points: Vec<ScenePoint>,
    pub segments: Vec<SceneSegment>,
}

impl Scene {
    pub fn from_unitcell<S, B, const D: usize, const N: usize>(
        unitcell: &Unitcell<S, B, D, N>,
        projection: Projection,
    ) -> Self
    where
        S: LatticeSite<D>,
        S::Label: Display,
        B: LatticeBond<N>,
    {
        Self::build(unitcell.sites(), unitcell.bonds(), projection, |b| {
            unitcell.bond_vector(b)
        })
    }

    pub fn from_lattice<S, B, const D: usize, const N: usize>(
        lattice: &Lattice<S, B, D, N>,
        projection: Projection,
    ) -> Self
    where
        S: LatticeSite<D>,
        S::Label: Display,
        B: LatticeBond<N>,
    {
        Self::build(lattice.sites(), lattice.bonds(), projection, |b| {
            lattice.bond_vector(b)
        })
    }

    /// 键从起点画到 起点 + 键向量，跨边界的键因此伸出绘图区域内的格点簇
    fn build<S, B, F, const D: usize, const N: usize>(
        sites: &[S],
        bonds: &[B],
        projection: Projection,
        bond_vector: F,
    ) -> Self
    where
        S: LatticeSite<D>,
        S::Label: Display,
        B: LatticeBond<N>,
        F: Fn(&B) -> Option<[f64; D]>,
    {
        let points = sites
            .iter()
            .map(|s| ScenePoint {
                position: projection.project(s.point()),
                label: s.label().to_string(),
            })
            .collect();

        let segments = bonds
            .iter()
            .filter_map(|b| {
                let from = sites.get(b.from())?.point();
                let vector = bond_vector(b)?;
                let mut end = *from;
                for (e, v) in end.iter_mut().zip(vector.iter()) {
                    *e += v;
                }
                Some(SceneSegment {
                    start: projection.project(from),
                    end: projection.project(&end),
                    periodic: b.is_periodic(),
                })
            })
            .collect();

        Scene { points, segments }
    }

    /// 绘图范围 ((x_min, x_max), (y_min, y_max))，留出 10% 边距
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let xs = self
            .points
            .iter()
            .map(|p| p.position.0)
            .chain(self.segments.iter().flat_map(|s| [s.start.0, s.end.0]));
        let ys = self
            .points
            .iter()
            .map(|p| p.position.1)
            .chain(self.segments.iter().flat_map(|s| [s.start.1, s.end.1]));

        let (x_min, x_max) = min_max(xs);
        let (y_min, y_max) = min_max(ys);
        (pad(x_min, x_max), pad(y_min, y_max))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn pad(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).max(1.0);
    (min - 0.1 * span, max + 0.1 * span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::planar;
    use crate::catalog::spatial;
    use crate::models::Lattice;

    #[test]
    fn test_projection() {
        assert_eq!(Projection::Xy.project(&[1.0, 2.0, 3.0]), (1.0, 2.0));
        assert_eq!(Projection::Oblique.project(&[1.0, 2.0]), (1.0, 2.0));
        assert_eq!(Projection::Xy.project(&[4.0]), (4.0, 0.0));

        let (x, y) = Projection::Oblique.project(&[0.0, 0.0, 2.0]);
        assert!((x - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scene_from_unitcell() {
        let uc = planar::honeycomb(1).unwrap();
        let scene = Scene::from_unitcell(&uc, Projection::Xy);
        assert_eq!(scene.points.len(), 2);
        assert_eq!(scene.segments.len(), 6);
        assert_eq!(scene.points[1].label, "2");
        // 原胞中 4 条键跨越边界
        assert_eq!(scene.segments.iter().filter(|s| s.periodic).count(), 4);
    }

    #[test]
    fn test_scene_from_open_lattice_has_no_periodic_segments() {
        let uc = spatial::cubic(1).unwrap();
        let lattice = Lattice::open(&uc, [2, 2, 2]).unwrap();
        let scene = Scene::from_lattice(&lattice, Projection::Oblique);
        assert_eq!(scene.points.len(), 8);
        assert_eq!(scene.segments.len(), 24);
        assert!(scene.segments.iter().all(|s| !s.periodic));
    }

    #[test]
    fn test_empty_scene_bounds() {
        let scene = Scene::default();
        let ((x0, x1), (y0, y1)) = scene.bounds();
        assert!(x0 < 0.0 && x1 > 1.0);
        assert!(y0 < 0.0 && y1 > 1.0);
    }

    #[test]
    fn test_bounds_cover_points() {
        let uc = planar::square(1).unwrap();
        let lattice = Lattice::open(&uc, [4, 2]).unwrap();
        let scene = Scene::from_lattice(&lattice, Projection::Xy);
        let ((x0, x1), (y0, y1)) = scene.bounds();
        assert!(x0 < 0.0 && x1 > 3.0);
        assert!(y0 < 0.0 && y1 > 1.0);
    }
}
