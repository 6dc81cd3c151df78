//! # 三维晶胞目录
//!
//! 立方晶系及其衍生晶格，常规晶胞边长为 1。
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 注册
//! - 使用 `catalog/neighbors.rs`

use super::neighbors::nearest_neighbor_unitcell;
use super::unknown_variant;
use crate::error::Result;
use crate::models::Unitcell3D;

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// FCC 原胞向量
const FCC_PRIMITIVE: [[f64; 3]; 3] = [[0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]];

/// BCC 原胞向量
const BCC_PRIMITIVE: [[f64; 3]; 3] = [[-0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, -0.5]];

/// 简单立方
pub fn cubic(variant: u32) -> Result<Unitcell3D> {
    match variant {
        1 => nearest_neighbor_unitcell(IDENTITY, &[[0.0, 0.0, 0.0]]),
        _ => Err(unknown_variant("cubic", variant)),
    }
}

/// 体心立方
/// - 1: 原胞
/// - 2: 双格点常规晶胞
pub fn bcc(variant: u32) -> Result<Unitcell3D> {
    match variant {
        1 => nearest_neighbor_unitcell(BCC_PRIMITIVE, &[[0.0, 0.0, 0.0]]),
        2 => nearest_neighbor_unitcell(IDENTITY, &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]),
        _ => Err(unknown_variant("bcc", variant)),
    }
}

/// 面心立方
/// - 1: 原胞
/// - 2: 四格点常规晶胞
pub fn fcc(variant: u32) -> Result<Unitcell3D> {
    match variant {
        1 => nearest_neighbor_unitcell(FCC_PRIMITIVE, &[[0.0, 0.0, 0.0]]),
        2 => nearest_neighbor_unitcell(
            IDENTITY,
            &[
                [0.0, 0.0, 0.0],
                [0.0, 0.5, 0.5],
                [0.5, 0.0, 0.5],
                [0.5, 0.5, 0.0],
            ],
        ),
        _ => Err(unknown_variant("fcc", variant)),
    }
}

/// 金刚石（FCC + 双格点基元）
pub fn diamond(variant: u32) -> Result<Unitcell3D> {
    match variant {
        1 => nearest_neighbor_unitcell(FCC_PRIMITIVE, &[[0.0, 0.0, 0.0], [0.25, 0.25, 0.25]]),
        _ => Err(unknown_variant("diamond", variant)),
    }
}

/// 烧绿石（FCC + 四面体基元）
pub fn pyrochlore(variant: u32) -> Result<Unitcell3D> {
    match variant {
        1 => nearest_neighbor_unitcell(
            FCC_PRIMITIVE,
            &[
                [0.0, 0.0, 0.0],
                [0.0, 0.25, 0.25],
                [0.25, 0.0, 0.25],
                [0.25, 0.25, 0.0],
            ],
        ),
        _ => Err(unknown_variant("pyrochlore", variant)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinations(uc: &Unitcell3D) -> Vec<usize> {
        (0..uc.num_sites()).map(|i| uc.coordination(i)).collect()
    }

    #[test]
    fn test_cubic() {
        let uc = cubic(1).unwrap();
        assert_eq!(coordinations(&uc), vec![6]);
        assert!((uc.volume().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bcc_variants() {
        assert_eq!(coordinations(&bcc(1).unwrap()), vec![8]);
        assert_eq!(coordinations(&bcc(2).unwrap()), vec![8, 8]);
        assert!((bcc(1).unwrap().volume().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fcc_variants() {
        assert_eq!(coordinations(&fcc(1).unwrap()), vec![12]);
        let conventional = fcc(2).unwrap();
        assert_eq!(coordinations(&conventional), vec![12, 12, 12, 12]);
        assert_eq!(conventional.num_bonds(), 48);
    }

    #[test]
    fn test_diamond() {
        let uc = diamond(1).unwrap();
        assert_eq!(coordinations(&uc), vec![4, 4]);
        // 所有键连接不同子格
        assert!(uc.bonds().iter().all(|b| b.from != b.to));
    }

    #[test]
    fn test_pyrochlore() {
        let uc = pyrochlore(1).unwrap();
        assert_eq!(coordinations(&uc), vec![6, 6, 6, 6]);
        assert_eq!(uc.num_bonds(), 24);
        assert!(uc.is_bidirectional());
    }

    #[test]
    fn test_unknown_variant() {
        assert!(diamond(2).is_err());
        assert!(cubic(0).is_err());
    }
}
