//! # 晶格（晶胞的周期性扩展）
//!
//! 将晶胞沿每个 Bravais 方向复制 `extent[k]` 次。
//! - 周期性边界：越界的键折回超胞内，`wrap` 以超胞向量为单位
//! - 开放边界：越界的键直接丢弃
//!
//! 格点编号：`cell_index * num_sites + site_index`，第一个方向变化最快。
//!
//! ## 依赖关系
//! - 被 `plot/`, `export.rs`, 命令行 `build`/`plot` 使用
//! - 使用 `models/unitcell.rs`

use super::bond::LatticeBond;
use super::site::LatticeSite;
use super::unitcell::{translate, Unitcell};
use crate::error::{LatticeError, Result};

use log::debug;

/// 边界条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Periodic,
    Open,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Periodic => write!(f, "periodic"),
            Boundary::Open => write!(f, "open"),
        }
    }
}

/// 晶格
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<S, B, const D: usize, const N: usize> {
    lattice_vectors: [[f64; D]; N],
    sites: Vec<S>,
    bonds: Vec<B>,
    extent: [usize; N],
    boundary: Boundary,
    unitcell: Unitcell<S, B, D, N>,
}

impl<S, B, const D: usize, const N: usize> Lattice<S, B, D, N>
where
    S: LatticeSite<D>,
    B: LatticeBond<N>,
{
    /// 周期性边界条件下扩展晶胞
    pub fn periodic(unitcell: &Unitcell<S, B, D, N>, extent: [usize; N]) -> Result<Self> {
        Self::expand(unitcell, extent, Boundary::Periodic)
    }

    /// 开放边界条件下扩展晶胞
    pub fn open(unitcell: &Unitcell<S, B, D, N>, extent: [usize; N]) -> Result<Self> {
        Self::expand(unitcell, extent, Boundary::Open)
    }

    fn expand(
        unitcell: &Unitcell<S, B, D, N>,
        extent: [usize; N],
        boundary: Boundary,
    ) -> Result<Self> {
        if extent.iter().any(|&e| e == 0) {
            return Err(LatticeError::InvalidExtent {
                extent: extent.to_vec(),
            });
        }

        let vectors = unitcell.lattice_vectors();
        let too_large = |reason: &str| LatticeError::LatticeTooLarge {
            extent: extent.to_vec(),
            reason: reason.to_string(),
        };
        let num_cells = extent
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or_else(|| too_large("cell count overflows usize"))?;
        let num_sites = num_cells
            .checked_mul(unitcell.num_sites())
            .ok_or_else(|| too_large("site count overflows usize"))?;
        let num_bonds = num_cells
            .checked_mul(unitcell.num_bonds())
            .ok_or_else(|| too_large("bond count overflows usize"))?;
        let cell_sites = unitcell.num_sites();

        // 超胞向量
        let mut lattice_vectors = *vectors;
        for (k, vector) in lattice_vectors.iter_mut().enumerate() {
            for x in vector.iter_mut() {
                *x *= extent[k] as f64;
            }
        }

        let mut sites: Vec<S> = Vec::new();
        sites
            .try_reserve_exact(num_sites)
            .map_err(|e| too_large(&e.to_string()))?;
        for cell in 0..num_cells {
            let offset = cell_offset(&cell_coordinates(cell, &extent), vectors);
            for site in unitcell.sites() {
                let mut point = *site.point();
                for (x, dx) in point.iter_mut().zip(offset.iter()) {
                    *x += dx;
                }
                sites.push(S::new(point, site.label().clone()));
            }
        }

        let mut bonds: Vec<B> = Vec::new();
        bonds
            .try_reserve_exact(num_bonds)
            .map_err(|e| too_large(&e.to_string()))?;
        for cell in 0..num_cells {
            let coords = cell_coordinates(cell, &extent);
            for bond in unitcell.bonds() {
                let mut target = [0usize; N];
                let mut wrap = [0i32; N];
                let mut inside = true;

                for k in 0..N {
                    let raw = coords[k] as i64 + i64::from(bond.wrap()[k]);
                    let len = extent[k] as i64;
                    target[k] = raw.rem_euclid(len) as usize;
                    wrap[k] = raw.div_euclid(len) as i32;
                    if wrap[k] != 0 {
                        inside = false;
                    }
                }

                if boundary == Boundary::Open {
                    if !inside {
                        continue;
                    }
                    wrap = [0; N];
                }

                let from = cell * cell_sites + bond.from();
                let to = cell_index(&target, &extent) * cell_sites + bond.to();
                bonds.push(B::new(from, to, bond.label().clone(), wrap));
            }
        }

        debug!(
            "Expanded {:?} {} lattice: {} cell(s), {} site(s), {} bond(s)",
            extent,
            boundary,
            num_cells,
            sites.len(),
            bonds.len()
        );

        Ok(Lattice {
            lattice_vectors,
            sites,
            bonds,
            extent,
            boundary,
            unitcell: unitcell.clone(),
        })
    }

    /// 超胞向量（周期性边界的平移）
    pub fn lattice_vectors(&self) -> &[[f64; D]; N] {
        &self.lattice_vectors
    }

    pub fn sites(&self) -> &[S] {
        &self.sites
    }

    pub fn bonds(&self) -> &[B] {
        &self.bonds
    }

    pub fn site(&self, index: usize) -> Option<&S> {
        self.sites.get(index)
    }

    pub fn bond(&self, index: usize) -> Option<&B> {
        self.bonds.get(index)
    }

    pub fn site_mut(&mut self, index: usize) -> Option<&mut S> {
        self.sites.get_mut(index)
    }

    pub fn bond_mut(&mut self, index: usize) -> Option<&mut B> {
        self.bonds.get_mut(index)
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    pub fn extent(&self) -> &[usize; N] {
        &self.extent
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// 生成该晶格的晶胞
    pub fn unitcell(&self) -> &Unitcell<S, B, D, N> {
        &self.unitcell
    }

    pub fn bond_vector(&self, bond: &B) -> Option<[f64; D]> {
        let from = self.sites.get(bond.from())?.point();
        let to = self.sites.get(bond.to())?.point();
        Some(translate(to, from, bond.wrap(), &self.lattice_vectors))
    }

    pub fn bonds_from(&self, index: usize) -> impl Iterator<Item = &B> + '_ {
        self.bonds.iter().filter(move |b| b.from() == index)
    }

    pub fn coordination(&self, index: usize) -> usize {
        self.bonds_from(index).count()
    }

    /// 转换格点和键的标签类型
    pub fn map_labels<S2, B2, FS, FB>(&self, mut site_fn: FS, mut bond_fn: FB) -> Lattice<S2, B2, D, N>
    where
        S2: LatticeSite<D>,
        B2: LatticeBond<N>,
        FS: FnMut(&S::Label) -> S2::Label,
        FB: FnMut(&B::Label) -> B2::Label,
    {
        Lattice {
            lattice_vectors: self.lattice_vectors,
            sites: self
                .sites
                .iter()
                .map(|s| S2::new(*s.point(), site_fn(s.label())))
                .collect(),
            bonds: self
                .bonds
                .iter()
                .map(|b| B2::new(b.from(), b.to(), bond_fn(b.label()), *b.wrap()))
                .collect(),
            extent: self.extent,
            boundary: self.boundary,
            unitcell: self.unitcell.map_labels(site_fn, bond_fn),
        }
    }
}

/// 线性编号 -> 晶胞坐标（第一个方向最快）
fn cell_coordinates<const N: usize>(mut cell: usize, extent: &[usize; N]) -> [usize; N] {
    let mut coords = [0usize; N];
    for (c, &e) in coords.iter_mut().zip(extent.iter()) {
        *c = cell % e;
        cell /= e;
    }
    coords
}

/// 晶胞坐标 -> 线性编号
fn cell_index<const N: usize>(coords: &[usize; N], extent: &[usize; N]) -> usize {
    coords
        .iter()
        .zip(extent.iter())
        .rev()
        .fold(0, |acc, (&c, &e)| acc * e + c)
}

fn cell_offset<const D: usize, const N: usize>(
    coords: &[usize; N],
    vectors: &[[f64; D]; N],
) -> [f64; D] {
    let mut offset = [0.0; D];
    for (&c, vector) in coords.iter().zip(vectors.iter()) {
        for (o, v) in offset.iter_mut().zip(vector.iter()) {
            *o += c as f64 * v;
        }
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bond, Site};

    type Cell2 = Unitcell<Site<i32, 2>, Bond<i32, 2>, 2, 2>;

    /// 单格点正方晶胞，四条最近邻键（双向存储）
    fn square() -> Cell2 {
        let bonds = vec![
            Bond::new(0, 0, 1, [1, 0]),
            Bond::new(0, 0, 1, [-1, 0]),
            Bond::new(0, 0, 1, [0, 1]),
            Bond::new(0, 0, 1, [0, -1]),
        ];
        Unitcell::new(
            [[1.0, 0.0], [0.0, 1.0]],
            vec![Site::new([0.0, 0.0], 1)],
            bonds,
        )
        .unwrap()
    }

    #[test]
    fn test_cell_index_round_trip() {
        let extent = [3, 4, 2];
        for cell in 0..24 {
            assert_eq!(cell_index(&cell_coordinates(cell, &extent), &extent), cell);
        }
        assert_eq!(cell_coordinates(1, &extent), [1, 0, 0]);
        assert_eq!(cell_coordinates(3, &extent), [0, 1, 0]);
    }

    #[test]
    fn test_periodic_square_lattice() {
        let lattice = Lattice::periodic(&square(), [3, 2]).unwrap();
        assert_eq!(lattice.num_sites(), 6);
        assert_eq!(lattice.num_bonds(), 24);
        for i in 0..lattice.num_sites() {
            assert_eq!(lattice.coordination(i), 4);
        }
        assert_eq!(lattice.lattice_vectors(), &[[3.0, 0.0], [0.0, 2.0]]);
        assert_eq!(lattice.boundary(), Boundary::Periodic);

        // 格点 (2,1) 的坐标
        assert_eq!(lattice.site(5).unwrap().point(), &[2.0, 1.0]);
    }

    #[test]
    fn test_periodic_bond_vectors_match_unitcell() {
        let uc = square();
        let lattice = Lattice::periodic(&uc, [2, 2]).unwrap();
        for (i, bond) in lattice.bonds().iter().enumerate() {
            let expected = uc.bond_vector(&uc.bonds()[i % uc.num_bonds()]).unwrap();
            let actual = lattice.bond_vector(bond).unwrap();
            assert!((expected[0] - actual[0]).abs() < 1e-12);
            assert!((expected[1] - actual[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_open_square_lattice() {
        let lattice = Lattice::open(&square(), [3, 3]).unwrap();
        assert_eq!(lattice.num_sites(), 9);
        // 3x3 开放正方格子有 12 条无向边
        assert_eq!(lattice.num_bonds(), 24);
        assert!(lattice.bonds().iter().all(|b| !b.is_periodic()));
        // 中心格点配位 4，角格点配位 2
        assert_eq!(lattice.coordination(4), 4);
        assert_eq!(lattice.coordination(0), 2);
    }

    #[test]
    fn test_extent_one_keeps_wraps() {
        let lattice = Lattice::periodic(&square(), [1, 1]).unwrap();
        assert_eq!(lattice.num_bonds(), 4);
        assert_eq!(lattice.bond(0).unwrap().wrap(), &[1, 0]);
    }

    #[test]
    fn test_zero_extent_rejected() {
        let result = Lattice::periodic(&square(), [0, 2]);
        assert!(matches!(result, Err(LatticeError::InvalidExtent { .. })));
    }

    #[test]
    fn test_overflowing_extent_rejected() {
        let result = Lattice::periodic(&square(), [usize::MAX, 2]);
        match result {
            Err(LatticeError::LatticeTooLarge { extent, reason }) => {
                assert_eq!(extent, vec![usize::MAX, 2]);
                assert!(reason.contains("cell count"));
            }
            other => panic!("expected LatticeTooLarge, got {:?}", other.map(|l| l.num_sites())),
        }
    }

    #[test]
    fn test_unallocatable_extent_rejected() {
        // 格点数不溢出 usize，但字节数超过 isize::MAX
        let result = Lattice::open(&square(), [usize::MAX / 4, 1]);
        assert!(matches!(result, Err(LatticeError::LatticeTooLarge { .. })));
    }

    #[test]
    fn test_lattice_map_labels() {
        let lattice = Lattice::periodic(&square(), [2, 1]).unwrap();
        let named: Lattice<Site<String, 2>, Bond<f64, 2>, 2, 2> =
            lattice.map_labels(|l| format!("A{}", l), |l| f64::from(*l) * 0.5);
        assert_eq!(named.site(1).unwrap().label(), "A1");
        assert!((named.bond(0).unwrap().label() - 0.5).abs() < 1e-12);
        assert_eq!(named.unitcell().num_sites(), 1);
    }
}
