//! # latphys - 带标签的晶格数据模型
//!
//! 格点、键、晶胞与晶格的泛型数据模型，附带预置晶胞目录、
//! 周期性/开放边界的晶格扩展、CSV 导出和绘图。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── models/   (格点、键、晶胞、晶格)
//!   ├── catalog/  (预置晶胞目录)
//!   ├── plot/     (场景投影与绘图)
//!   ├── export.rs (CSV 导出)
//!   └── error.rs  (错误处理)
//! ```
//!
//! ## 示例
//! ```
//! use latphys::catalog::Catalog;
//! use latphys::models::Lattice;
//!
//! let honeycomb = Catalog::get("honeycomb", 1).unwrap();
//! let unitcell = honeycomb.as_planar().unwrap();
//! let lattice = Lattice::periodic(unitcell, [4, 4]).unwrap();
//! assert_eq!(lattice.num_sites(), 32);
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod models;
pub mod plot;

pub use catalog::{Catalog, CatalogUnitcell};
pub use error::{LatticeError, Result};
pub use models::{Bond, Boundary, Lattice, LatticeBond, LatticeSite, Site, Unitcell};
