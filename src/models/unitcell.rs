//! # 晶胞数据模型
//!
//! 晶胞 = `N` 个 Bravais 向量 + 有序格点列表 + 有序键列表。
//! 构造时立即校验（键索引越界、`N > D`），失败返回错误。
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs`, `catalog/`, `plot/`, `export.rs` 使用
//! - 使用 `models/site.rs`, `models/bond.rs`

use super::bond::LatticeBond;
use super::site::LatticeSite;
use crate::error::{LatticeError, Result};

use log::{debug, warn};

/// 晶胞
#[derive(Debug, Clone, PartialEq)]
pub struct Unitcell<S, B, const D: usize, const N: usize> {
    lattice_vectors: [[f64; D]; N],
    sites: Vec<S>,
    bonds: Vec<B>,
}

impl<S, B, const D: usize, const N: usize> Unitcell<S, B, D, N>
where
    S: LatticeSite<D>,
    B: LatticeBond<N>,
{
    /// 从 Bravais 向量、格点和键构造晶胞
    pub fn new(lattice_vectors: [[f64; D]; N], sites: Vec<S>, bonds: Vec<B>) -> Result<Self> {
        if N > D {
            return Err(LatticeError::DimensionMismatch(format!(
                "{} Bravais vectors cannot span a {}-dimensional space",
                N, D
            )));
        }

        let unitcell = Unitcell {
            lattice_vectors,
            sites,
            bonds,
        };
        unitcell.validate()?;

        if unitcell
            .sites
            .iter()
            .any(|s| s.point().iter().any(|x| !x.is_finite()))
        {
            warn!("Unitcell contains non-finite site coordinates");
        }

        debug!(
            "Constructed unitcell: D={}, N={}, {} site(s), {} bond(s)",
            D,
            N,
            unitcell.sites.len(),
            unitcell.bonds.len()
        );
        Ok(unitcell)
    }

    /// 检查所有键端点是否引用有效格点
    pub fn validate(&self) -> Result<()> {
        let num_sites = self.sites.len();
        for (i, bond) in self.bonds.iter().enumerate() {
            for index in [bond.from(), bond.to()] {
                if index >= num_sites {
                    return Err(LatticeError::InvalidBondIndex {
                        bond: i,
                        index,
                        num_sites,
                    });
                }
            }
        }
        Ok(())
    }

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

    /// 可变访问格点（只改值，不改形状）
    pub fn site_mut(&mut self, index: usize) -> Option<&mut S> {
        self.sites.get_mut(index)
    }

    /// 可变访问键；修改端点后应重新调用 `validate`
    pub fn bond_mut(&mut self, index: usize) -> Option<&mut B> {
        self.bonds.get_mut(index)
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    /// 实空间维数 D
    pub fn dimension(&self) -> usize {
        D
    }

    /// 平移维数 N（等于 Bravais 向量个数）
    pub fn translational_dimension(&self) -> usize {
        self.lattice_vectors.len()
    }

    /// 键向量：终点坐标 + Σ wrap_k·a_k − 起点坐标
    pub fn bond_vector(&self, bond: &B) -> Option<[f64; D]> {
        let from = self.sites.get(bond.from())?.point();
        let to = self.sites.get(bond.to())?.point();
        Some(translate(to, from, bond.wrap(), &self.lattice_vectors))
    }

    /// 从格点 `index` 出发的所有键
    pub fn bonds_from(&self, index: usize) -> impl Iterator<Item = &B> + '_ {
        self.bonds.iter().filter(move |b| b.from() == index)
    }

    /// 指向格点 `index` 的所有键
    pub fn bonds_to(&self, index: usize) -> impl Iterator<Item = &B> + '_ {
        self.bonds.iter().filter(move |b| b.to() == index)
    }

    /// 配位数（出键数目）
    pub fn coordination(&self, index: usize) -> usize {
        self.bonds_from(index).count()
    }

    /// 每条键是否都有对应的反向键
    pub fn is_bidirectional(&self) -> bool {
        self.bonds.iter().all(|b| {
            let mirror = b.reversed();
            self.bonds.iter().any(|other| {
                other.from() == mirror.from()
                    && other.to() == mirror.to()
                    && other.wrap() == mirror.wrap()
            })
        })
    }

    /// 晶胞体积（N = D 时为 Bravais 矩阵行列式绝对值）
    pub fn volume(&self) -> Option<f64> {
        if N != D {
            return None;
        }
        let rows: Vec<&[f64]> = self.lattice_vectors.iter().map(|v| &v[..]).collect();
        Some(determinant(&rows).abs())
    }

    /// 转换格点和键的标签类型
    pub fn map_labels<S2, B2, FS, FB>(&self, mut site_fn: FS, mut bond_fn: FB) -> Unitcell<S2, B2, D, N>
    where
        S2: LatticeSite<D>,
        B2: LatticeBond<N>,
        FS: FnMut(&S::Label) -> S2::Label,
        FB: FnMut(&B::Label) -> B2::Label,
    {
        Unitcell {
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
        }
    }
}

/// `to + Σ wrap_k·vectors_k − from`
pub(crate) fn translate<const D: usize, const N: usize>(
    to: &[f64; D],
    from: &[f64; D],
    wrap: &[i32; N],
    vectors: &[[f64; D]; N],
) -> [f64; D] {
    let mut out = [0.0; D];
    for d in 0..D {
        out[d] = to[d] - from[d];
        for (k, vector) in vectors.iter().enumerate() {
            out[d] += f64::from(wrap[k]) * vector[d];
        }
    }
    out
}

/// 小矩阵行列式（按第一行展开）
fn determinant(rows: &[&[f64]]) -> f64 {
    match rows.len() {
        0 => 1.0,
        1 => rows[0][0],
        2 => rows[0][0] * rows[1][1] - rows[0][1] * rows[1][0],
        n => (0..n)
            .map(|col| {
                let minor: Vec<Vec<f64>> = rows[1..]
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .filter(|(c, _)| *c != col)
                            .map(|(_, x)| *x)
                            .collect()
                    })
                    .collect();
                let minor_rows: Vec<&[f64]> = minor.iter().map(|r| &r[..]).collect();
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                sign * rows[0][col] * determinant(&minor_rows)
            })
            .sum(),
    }
}
