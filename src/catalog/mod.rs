//! # 预置晶胞目录
//!
//! 单一静态注册表：名称 + 变体编号 -> 构造函数。
//! 不同条目维数不同，因此注册表返回按维数区分的 `CatalogUnitcell`。
//!
//! ## 子模块
//! - `neighbors`: 最近邻键生成
//! - `planar`: 二维晶胞
//! - `spatial`: 三维晶胞
//!
//! ## 依赖关系
//! - 被命令行 `list`/`show`/`build`/`plot` 使用
//! - 使用 `models/`

pub mod neighbors;
pub mod planar;
pub mod spatial;

use crate::error::{LatticeError, Result};
use crate::models::{Bond, DefaultLabel, Site, Unitcell2D, Unitcell3D};

use log::debug;

/// 按维数区分的构造函数
#[derive(Clone, Copy)]
pub enum Builder {
    Planar(fn(u32) -> Result<Unitcell2D>),
    Spatial(fn(u32) -> Result<Unitcell3D>),
}

/// 目录条目
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    /// 可用变体及说明，第一个为原胞
    pub variants: &'static [(u32, &'static str)],
    pub builder: Builder,
}

impl CatalogEntry {
    pub fn dimension(&self) -> usize {
        match self.builder {
            Builder::Planar(_) => 2,
            Builder::Spatial(_) => 3,
        }
    }

    pub fn variant_numbers(&self) -> Vec<u32> {
        self.variants.iter().map(|(v, _)| *v).collect()
    }

    pub fn has_variant(&self, variant: u32) -> bool {
        self.variants.iter().any(|(v, _)| *v == variant)
    }

    /// 构造 `i32` 标签的晶胞
    pub fn build(&self, variant: u32) -> Result<CatalogUnitcell> {
        if !self.has_variant(variant) {
            return Err(LatticeError::UnknownVariant {
                name: self.name.to_string(),
                variant,
                available: self.variant_numbers(),
            });
        }
        debug!("Building unitcell '{}' variant {}", self.name, variant);
        match self.builder {
            Builder::Planar(f) => f(variant).map(CatalogUnitcell::Planar),
            Builder::Spatial(f) => f(variant).map(CatalogUnitcell::Spatial),
        }
    }
}

/// 目录构造结果（按维数标记）
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogUnitcell<LS = i32, LB = i32> {
    Planar(Unitcell2D<LS, LB>),
    Spatial(Unitcell3D<LS, LB>),
}

impl<LS, LB> CatalogUnitcell<LS, LB>
where
    LS: DefaultLabel,
    LB: DefaultLabel,
{
    pub fn dimension(&self) -> usize {
        match self {
            CatalogUnitcell::Planar(_) => 2,
            CatalogUnitcell::Spatial(_) => 3,
        }
    }

    pub fn num_sites(&self) -> usize {
        match self {
            CatalogUnitcell::Planar(uc) => uc.num_sites(),
            CatalogUnitcell::Spatial(uc) => uc.num_sites(),
        }
    }

    pub fn num_bonds(&self) -> usize {
        match self {
            CatalogUnitcell::Planar(uc) => uc.num_bonds(),
            CatalogUnitcell::Spatial(uc) => uc.num_bonds(),
        }
    }

    pub fn num_lattice_vectors(&self) -> usize {
        match self {
            CatalogUnitcell::Planar(uc) => uc.lattice_vectors().len(),
            CatalogUnitcell::Spatial(uc) => uc.lattice_vectors().len(),
        }
    }

    pub fn as_planar(&self) -> Option<&Unitcell2D<LS, LB>> {
        match self {
            CatalogUnitcell::Planar(uc) => Some(uc),
            CatalogUnitcell::Spatial(_) => None,
        }
    }

    pub fn as_spatial(&self) -> Option<&Unitcell3D<LS, LB>> {
        match self {
            CatalogUnitcell::Spatial(uc) => Some(uc),
            CatalogUnitcell::Planar(_) => None,
        }
    }
}

impl CatalogUnitcell {
    /// 将默认整数标签转换为指定标签类型
    pub fn relabel<LS: DefaultLabel, LB: DefaultLabel>(&self) -> CatalogUnitcell<LS, LB> {
        match self {
            CatalogUnitcell::Planar(uc) => CatalogUnitcell::Planar(uc.map_labels::<
                Site<LS, 2>,
                Bond<LB, 2>,
                _,
                _,
            >(
                |l| LS::from_default(*l),
                |l| LB::from_default(*l),
            )),
            CatalogUnitcell::Spatial(uc) => CatalogUnitcell::Spatial(uc.map_labels::<
                Site<LS, 3>,
                Bond<LB, 3>,
                _,
                _,
            >(
                |l| LS::from_default(*l),
                |l| LB::from_default(*l),
            )),
        }
    }
}

static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "square",
        description: "Square lattice",
        variants: &[(1, "primitive"), (2, "rotated sqrt2 x sqrt2 cell")],
        builder: Builder::Planar(planar::square),
    },
    CatalogEntry {
        name: "triangular",
        description: "Triangular lattice",
        variants: &[(1, "primitive")],
        builder: Builder::Planar(planar::triangular),
    },
    CatalogEntry {
        name: "honeycomb",
        description: "Honeycomb lattice",
        variants: &[(1, "primitive"), (2, "rectangular four-site cell")],
        builder: Builder::Planar(planar::honeycomb),
    },
    CatalogEntry {
        name: "kagome",
        description: "Kagome lattice",
        variants: &[(1, "primitive")],
        builder: Builder::Planar(planar::kagome),
    },
    CatalogEntry {
        name: "lieb",
        description: "Lieb lattice",
        variants: &[(1, "primitive")],
        builder: Builder::Planar(planar::lieb),
    },
    CatalogEntry {
        name: "cubic",
        description: "Simple cubic lattice",
        variants: &[(1, "primitive")],
        builder: Builder::Spatial(spatial::cubic),
    },
    CatalogEntry {
        name: "bcc",
        description: "Body-centered cubic lattice",
        variants: &[(1, "primitive"), (2, "conventional")],
        builder: Builder::Spatial(spatial::bcc),
    },
    CatalogEntry {
        name: "fcc",
        description: "Face-centered cubic lattice",
        variants: &[(1, "primitive"), (2, "conventional")],
        builder: Builder::Spatial(spatial::fcc),
    },
    CatalogEntry {
        name: "diamond",
        description: "Diamond lattice",
        variants: &[(1, "primitive")],
        builder: Builder::Spatial(spatial::diamond),
    },
    CatalogEntry {
        name: "pyrochlore",
        description: "Pyrochlore lattice",
        variants: &[(1, "primitive")],
        builder: Builder::Spatial(spatial::pyrochlore),
    },
];

/// 晶胞目录
pub struct Catalog;

impl Catalog {
    /// 所有条目（注册顺序）
    pub fn entries() -> &'static [CatalogEntry] {
        ENTRIES
    }

    /// 按名称查找（大小写不敏感）
    pub fn find(name: &str) -> Result<&'static CatalogEntry> {
        let key = name.trim().to_lowercase();
        ENTRIES
            .iter()
            .find(|e| e.name == key)
            .ok_or_else(|| LatticeError::UnknownUnitcell {
                name: name.to_string(),
            })
    }

    /// 按名称和变体构造（`i32` 标签）
    pub fn get(name: &str, variant: u32) -> Result<CatalogUnitcell> {
        Self::find(name)?.build(variant)
    }

    /// 按名称和变体构造，并转换为指定标签类型
    pub fn build<LS: DefaultLabel, LB: DefaultLabel>(
        name: &str,
        variant: u32,
    ) -> Result<CatalogUnitcell<LS, LB>> {
        Ok(Self::get(name, variant)?.relabel())
    }

    /// 名称匹配 glob 模式的条目
    pub fn matching(pattern: &str) -> Result<Vec<&'static CatalogEntry>> {
        let glob_pattern = glob::Pattern::new(&pattern.to_lowercase()).map_err(|e| {
            LatticeError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
        })?;
        Ok(ENTRIES
            .iter()
            .filter(|e| glob_pattern.matches(e.name))
            .collect())
    }
}

pub(crate) fn unknown_variant(name: &str, variant: u32) -> LatticeError {
    let available = Catalog::find(name)
        .map(|e| e.variant_numbers())
        .unwrap_or_default();
    LatticeError::UnknownVariant {
        name: name.to_string(),
        variant,
        available,
    }
}
