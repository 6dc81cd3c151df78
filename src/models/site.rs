//! # 格点数据模型
//!
//! 格点是带标签的实空间点，坐标长度 `D` 在编译期固定。
//!
//! ## 依赖关系
//! - 被 `models/unitcell.rs`, `models/lattice.rs` 使用
//! - 使用 `models/label.rs`

use super::label::Label;
use serde::{Deserialize, Serialize};

/// 格点抽象：从坐标与标签构造，读写标签和坐标
pub trait LatticeSite<const D: usize>: Clone {
    type Label: Label;

    fn new(point: [f64; D], label: Self::Label) -> Self;

    fn label(&self) -> &Self::Label;

    fn set_label(&mut self, label: Self::Label);

    fn point(&self) -> &[f64; D];

    fn set_point(&mut self, point: [f64; D]);
}

/// 默认格点实现
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site<L, const D: usize> {
    /// 标签
    pub label: L,

    /// 实空间坐标
    #[serde(with = "point_array")]
    pub point: [f64; D],
}

impl<L: Label, const D: usize> LatticeSite<D> for Site<L, D> {
    type Label = L;

    fn new(point: [f64; D], label: L) -> Self {
        Site { label, point }
    }

    fn label(&self) -> &L {
        &self.label
    }

    fn set_label(&mut self, label: L) {
        self.label = label;
    }

    fn point(&self) -> &[f64; D] {
        &self.point
    }

    fn set_point(&mut self, point: [f64; D]) {
        self.point = point;
    }
}

/// serde 对任意长度数组的支持有限，这里按序列读写
mod point_array {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const D: usize>(
        point: &[f64; D],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(point.iter())
    }

    pub fn deserialize<'de, De: Deserializer<'de>, const D: usize>(
        deserializer: De,
    ) -> Result<[f64; D], De::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| De::Error::custom(format!("expected {} coordinates, got {}", D, len)))
    }
}
