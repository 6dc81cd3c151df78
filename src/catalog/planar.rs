//! # 二维晶胞目录
//!
//! 各晶胞的 Bravais 向量与格点坐标，最近邻键长均为 1（Lieb 为 1/2）。
//! 变体 1 始终是原胞。
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 注册
//! - 使用 `catalog/neighbors.rs`

use super::neighbors::nearest_neighbor_unitcell;
use super::unknown_variant;
use crate::error::Result;
use crate::models::Unitcell2D;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// 正方晶格
/// - 1: 单格点原胞
/// - 2: 旋转 45° 的 √2×√2 双格点晶胞
pub fn square(variant: u32) -> Result<Unitcell2D> {
    match variant {
        1 => nearest_neighbor_unitcell([[1.0, 0.0], [0.0, 1.0]], &[[0.0, 0.0]]),
        2 => nearest_neighbor_unitcell([[1.0, 1.0], [1.0, -1.0]], &[[0.0, 0.0], [1.0, 0.0]]),
        _ => Err(unknown_variant("square", variant)),
    }
}

/// 三角晶格
pub fn triangular(variant: u32) -> Result<Unitcell2D> {
    match variant {
        1 => nearest_neighbor_unitcell([[1.0, 0.0], [0.5, 0.5 * SQRT3]], &[[0.0, 0.0]]),
        _ => Err(unknown_variant("triangular", variant)),
    }
}

/// 蜂窝晶格
/// - 1: 双格点原胞
/// - 2: 四格点矩形晶胞（扶手椅方向沿 x）
pub fn honeycomb(variant: u32) -> Result<Unitcell2D> {
    match variant {
        1 => nearest_neighbor_unitcell(
            [[1.5, 0.5 * SQRT3], [1.5, -0.5 * SQRT3]],
            &[[0.0, 0.0], [1.0, 0.0]],
        ),
        2 => nearest_neighbor_unitcell(
            [[SQRT3, 0.0], [0.0, 3.0]],
            &[
                [0.0, 0.0],
                [0.0, 1.0],
                [0.5 * SQRT3, 1.5],
                [0.5 * SQRT3, 2.5],
            ],
        ),
        _ => Err(unknown_variant("honeycomb", variant)),
    }
}

/// Kagome 晶格
pub fn kagome(variant: u32) -> Result<Unitcell2D> {
    match variant {
        1 => nearest_neighbor_unitcell(
            [[2.0, 0.0], [1.0, SQRT3]],
            &[[0.0, 0.0], [1.0, 0.0], [0.5, 0.5 * SQRT3]],
        ),
        _ => Err(unknown_variant("kagome", variant)),
    }
}

/// Lieb 晶格（CuO2 平面）
pub fn lieb(variant: u32) -> Result<Unitcell2D> {
    match variant {
        1 => nearest_neighbor_unitcell(
            [[1.0, 0.0], [0.0, 1.0]],
            &[[0.0, 0.0], [0.5, 0.0], [0.0, 0.5]],
        ),
        _ => Err(unknown_variant("lieb", variant)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LatticeError;

    fn coordinations(uc: &Unitcell2D) -> Vec<usize> {
        (0..uc.num_sites()).map(|i| uc.coordination(i)).collect()
    }

    #[test]
    fn test_square_variants() {
        let primitive = square(1).unwrap();
        assert_eq!(primitive.num_sites(), 1);
        assert_eq!(primitive.num_bonds(), 4);

        let rotated = square(2).unwrap();
        assert_eq!(coordinations(&rotated), vec![4, 4]);
        assert!((rotated.volume().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangular_coordination() {
        let uc = triangular(1).unwrap();
        assert_eq!(coordinations(&uc), vec![6]);
    }

    #[test]
    fn test_honeycomb_variants() {
        let primitive = honeycomb(1).unwrap();
        assert_eq!(coordinations(&primitive), vec![3, 3]);
        assert!(primitive.is_bidirectional());

        let rectangular = honeycomb(2).unwrap();
        assert_eq!(coordinations(&rectangular), vec![3, 3, 3, 3]);
        // 两种晶胞每格点面积相同
        let per_site_1 = primitive.volume().unwrap() / 2.0;
        let per_site_2 = rectangular.volume().unwrap() / 4.0;
        assert!((per_site_1 - per_site_2).abs() < 1e-9);
    }

    #[test]
    fn test_honeycomb_bond_lengths() {
        let uc = honeycomb(1).unwrap();
        for bond in uc.bonds() {
            let v = uc.bond_vector(bond).unwrap();
            let length = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!((length - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_kagome_coordination() {
        let uc = kagome(1).unwrap();
        assert_eq!(coordinations(&uc), vec![4, 4, 4]);
        assert_eq!(uc.num_bonds(), 12);
    }

    #[test]
    fn test_lieb_coordination() {
        let uc = lieb(1).unwrap();
        assert_eq!(coordinations(&uc), vec![4, 2, 2]);
    }

    #[test]
    fn test_unknown_variant() {
        match triangular(3) {
            Err(LatticeError::UnknownVariant { name, variant, .. }) => {
                assert_eq!(name, "triangular");
                assert_eq!(variant, 3);
            }
            other => panic!("expected UnknownVariant, got {:?}", other),
        }
    }
}
