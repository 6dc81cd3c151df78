//! # 最近邻键生成
//!
//! 在 `[-2, 2]^N` 的平移范围内搜索所有格点对，取最短非零距离
//! （相对容差 `NEIGHBOR_TOLERANCE`）作为最近邻键，双向存储。
//!
//! ## 依赖关系
//! - 被 `catalog/planar.rs`, `catalog/spatial.rs` 使用
//! - 使用 `models/`

use crate::error::Result;
use crate::models::unitcell::translate;
use crate::models::{Bond, Site, Unitcell};

use log::debug;

/// 最近邻距离的相对容差
pub const NEIGHBOR_TOLERANCE: f64 = 1e-6;

/// 平移搜索范围
const WRAP_RANGE: i32 = 2;

/// 目录默认的键标签
pub const DEFAULT_BOND_LABEL: i32 = 1;

/// 由 Bravais 向量和格点坐标构造带最近邻键的晶胞。
/// 格点标签为 1 起始的编号。
pub fn nearest_neighbor_unitcell<const D: usize>(
    lattice_vectors: [[f64; D]; D],
    points: &[[f64; D]],
) -> Result<Unitcell<Site<i32, D>, Bond<i32, D>, D, D>> {
    let sites: Vec<Site<i32, D>> = points
        .iter()
        .enumerate()
        .map(|(i, p)| Site {
            label: i as i32 + 1,
            point: *p,
        })
        .collect();

    let wraps = all_wraps::<D>();

    let mut min_distance = f64::INFINITY;
    let mut candidates = Vec::new();
    for (i, from) in points.iter().enumerate() {
        for (j, to) in points.iter().enumerate() {
            for wrap in &wraps {
                let distance = norm(&translate(to, from, wrap, &lattice_vectors));
                if distance < NEIGHBOR_TOLERANCE {
                    continue;
                }
                if distance < min_distance {
                    min_distance = distance;
                }
                candidates.push((i, j, *wrap, distance));
            }
        }
    }

    let bonds: Vec<Bond<i32, D>> = candidates
        .into_iter()
        .filter(|(_, _, _, d)| (d - min_distance).abs() <= NEIGHBOR_TOLERANCE * min_distance)
        .map(|(from, to, wrap, _)| Bond {
            from,
            to,
            label: DEFAULT_BOND_LABEL,
            wrap,
        })
        .collect();

    debug!(
        "Nearest-neighbour distance {:.6}: {} bond(s) for {} site(s)",
        min_distance,
        bonds.len(),
        sites.len()
    );

    Unitcell::new(lattice_vectors, sites, bonds)
}

/// 按字典序枚举 `[-WRAP_RANGE, WRAP_RANGE]^D` 的全部平移
fn all_wraps<const D: usize>() -> Vec<[i32; D]> {
    let side = (2 * WRAP_RANGE + 1) as usize;
    let total = side.pow(D as u32);
    (0..total)
        .map(|mut n| {
            let mut wrap = [0i32; D];
            for w in wrap.iter_mut().rev() {
                *w = (n % side) as i32 - WRAP_RANGE;
                n /= side;
            }
            wrap
        })
        .collect()
}

fn norm<const D: usize>(v: &[f64; D]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
