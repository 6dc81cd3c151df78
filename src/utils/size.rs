//! # 晶格尺寸解析
//!
//! 解析 `4x4`、`3x3x2`、`6`（各方向相同）形式的尺寸参数。
//!
//! ## 依赖关系
//! - 被 `commands/build.rs`, `commands/plot.rs` 使用
//! - 使用 `regex` crate

use latphys::error::{LatticeError, Result};
use regex::Regex;

/// 解析尺寸字符串为各方向的晶胞个数
pub fn parse_size(input: &str) -> Result<Vec<usize>> {
    let pattern = Regex::new(r"^\s*(\d+)(?:\s*[xX×]\s*(\d+))*\s*$")
        .map_err(|e| LatticeError::Other(e.to_string()))?;
    if !pattern.is_match(input) {
        return Err(LatticeError::InvalidSize(format!(
            "'{}' (expected e.g. 4x4 or 3x3x2)",
            input
        )));
    }

    let number = Regex::new(r"\d+").map_err(|e| LatticeError::Other(e.to_string()))?;
    number
        .find_iter(input)
        .map(|m| {
            m.as_str()
                .parse::<usize>()
                .map_err(|e| LatticeError::InvalidSize(format!("'{}': {}", input, e)))
        })
        .collect()
}

/// 将解析结果转换为 N 维尺寸；单个数字对所有方向生效
pub fn to_extent<const N: usize>(size: &[usize]) -> Result<[usize; N]> {
    match size.len() {
        1 => Ok([size[0]; N]),
        n if n == N => {
            let mut extent = [0usize; N];
            extent.copy_from_slice(size);
            Ok(extent)
        }
        n => Err(LatticeError::DimensionMismatch(format!(
            "size has {} entries, but the unitcell has {} Bravais vectors",
            n, N
        ))),
    }
}
