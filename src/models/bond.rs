//! # 键数据模型
//!
//! 键是晶胞内两个格点索引之间的有向连接，终点平移 `wrap` 个 Bravais 向量。
//! `N` 是晶格的平移维数。
//!
//! ## 依赖关系
//! - 被 `models/unitcell.rs`, `models/lattice.rs` 使用
//! - 使用 `models/label.rs`

use super::label::Label;
use serde::{Deserialize, Serialize};

/// 键抽象
pub trait LatticeBond<const N: usize>: Clone {
    type Label: Label;

    fn new(from: usize, to: usize, label: Self::Label, wrap: [i32; N]) -> Self;

    fn from(&self) -> usize;

    fn set_from(&mut self, from: usize);

    fn to(&self) -> usize;

    fn set_to(&mut self, to: usize);

    fn label(&self) -> &Self::Label;

    fn set_label(&mut self, label: Self::Label);

    fn wrap(&self) -> &[i32; N];

    fn set_wrap(&mut self, wrap: [i32; N]);

    /// 是否跨越晶胞边界
    fn is_periodic(&self) -> bool {
        self.wrap().iter().any(|&w| w != 0)
    }

    /// 反向键：交换端点，平移取反，标签不变
    fn reversed(&self) -> Self {
        let mut wrap = *self.wrap();
        for w in wrap.iter_mut() {
            *w = -*w;
        }
        Self::new(self.to(), self.from(), self.label().clone(), wrap)
    }
}

/// 默认键实现
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond<L, const N: usize> {
    pub from: usize,
    pub to: usize,
    pub label: L,
    #[serde(with = "wrap_array")]
    pub wrap: [i32; N],
}

impl<L: Label, const N: usize> LatticeBond<N> for Bond<L, N> {
    type Label = L;

    fn new(from: usize, to: usize, label: L, wrap: [i32; N]) -> Self {
        Bond {
            from,
            to,
            label,
            wrap,
        }
    }

    fn from(&self) -> usize {
        self.from
    }

    fn set_from(&mut self, from: usize) {
        self.from = from;
    }

    fn to(&self) -> usize {
        self.to
    }

    fn set_to(&mut self, to: usize) {
        self.to = to;
    }

    fn label(&self) -> &L {
        &self.label
    }

    fn set_label(&mut self, label: L) {
        self.label = label;
    }

    fn wrap(&self) -> &[i32; N] {
        &self.wrap
    }

    fn set_wrap(&mut self, wrap: [i32; N]) {
        self.wrap = wrap;
    }
}

mod wrap_array {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        wrap: &[i32; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(wrap.iter())
    }

    pub fn deserialize<'de, De: Deserializer<'de>, const N: usize>(
        deserializer: De,
    ) -> Result<[i32; N], De::Error> {
        let values = Vec::<i32>::deserialize(deserializer)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| De::Error::custom(format!("expected {} wrap entries, got {}", N, len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_accessors() {
        let mut bond: Bond<i32, 2> = Bond::new(0, 1, 1, [1, 0]);
        assert_eq!(LatticeBond::from(&bond), 0);
        assert_eq!(bond.to(), 1);
        assert!(bond.is_periodic());

        bond.set_wrap([0, 0]);
        bond.set_label(5);
        assert!(!bond.is_periodic());
        assert_eq!(*bond.label(), 5);
    }

    #[test]
    fn test_bond_reversed() {
        let bond: Bond<&str, 3> = Bond::new(2, 0, "J1", [1, -1, 0]);
        let mirror = bond.reversed();
        assert_eq!(LatticeBond::from(&mirror), 0);
        assert_eq!(mirror.to(), 2);
        assert_eq!(mirror.wrap(), &[-1, 1, 0]);
        assert_eq!(*mirror.label(), "J1");
        assert_eq!(mirror.reversed(), bond);
    }

    #[test]
    fn test_bond_json_round_trip() {
        let bond: Bond<i32, 2> = Bond::new(0, 1, 2, [-1, 0]);
        let json = serde_json::to_string(&bond).unwrap();
        assert_eq!(json, r#"{"from":0,"to":1,"label":2,"wrap":[-1,0]}"#);
        let back: Bond<i32, 2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bond);
    }

    #[test]
    fn test_bond_json_wrong_wrap_length() {
        let json = r#"{"from":0,"to":0,"label":1,"wrap":[1,0,0]}"#;
        let err = serde_json::from_str::<Bond<i32, 2>>(json).unwrap_err();
        assert!(err.to_string().contains("expected 2 wrap entries, got 3"));
    }
}
