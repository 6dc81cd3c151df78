//! # 数据模型模块
//!
//! 定义带标签的格点、键、晶胞和晶格。
//!
//! ## 依赖关系
//! - 被 `catalog/`, `plot/`, `export.rs` 和命令行使用
//! - 子模块: label, site, bond, unitcell, lattice

pub mod bond;
pub mod label;
pub mod lattice;
pub mod site;
pub mod unitcell;

pub use bond::{Bond, LatticeBond};
pub use label::{DefaultLabel, Label};
pub use lattice::{Boundary, Lattice};
pub use site::{LatticeSite, Site};
pub use unitcell::Unitcell;

/// 二维晶胞（默认格点/键类型）
pub type Unitcell2D<LS = i32, LB = i32> = Unitcell<Site<LS, 2>, Bond<LB, 2>, 2, 2>;

/// 三维晶胞（默认格点/键类型）
pub type Unitcell3D<LS = i32, LB = i32> = Unitcell<Site<LS, 3>, Bond<LB, 3>, 3, 3>;

pub type Lattice2D<LS = i32, LB = i32> = Lattice<Site<LS, 2>, Bond<LB, 2>, 2, 2>;

pub type Lattice3D<LS = i32, LB = i32> = Lattice<Site<LS, 3>, Bond<LB, 3>, 3, 3>;
