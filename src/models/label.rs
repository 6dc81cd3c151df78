//! # 标签类型
//!
//! 格点与键的标签可以是任意可比较类型。目录中的晶胞使用 `i32` 标签，
//! 通过 `DefaultLabel` 转换为用户选择的标签类型。
//!
//! ## 依赖关系
//! - 被 `models/site.rs`, `models/bond.rs`, `catalog/` 使用
//! - 无外部模块依赖

use std::fmt::Debug;

/// 标签约束：可克隆、可比较、可调试输出
pub trait Label: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Label for T {}

/// 可由目录默认整数标签构造的标签类型
///
/// 无符号类型无法表示负数标签，负值映射为 0。
pub trait DefaultLabel: Label {
    fn from_default(value: i32) -> Self;
}

impl DefaultLabel for i32 {
    fn from_default(value: i32) -> Self {
        value
    }
}

impl DefaultLabel for i64 {
    fn from_default(value: i32) -> Self {
        i64::from(value)
    }
}

impl DefaultLabel for u32 {
    fn from_default(value: i32) -> Self {
        u32::try_from(value).unwrap_or(0)
    }
}

impl DefaultLabel for usize {
    fn from_default(value: i32) -> Self {
        usize::try_from(value).unwrap_or(0)
    }
}

impl DefaultLabel for f64 {
    fn from_default(value: i32) -> Self {
        f64::from(value)
    }
}

impl DefaultLabel for String {
    fn from_default(value: i32) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_conversions() {
        assert_eq!(<i64 as DefaultLabel>::from_default(3), 3i64);
        assert_eq!(<u32 as DefaultLabel>::from_default(2), 2u32);
        assert_eq!(<String as DefaultLabel>::from_default(1), "1");
        assert!((<f64 as DefaultLabel>::from_default(4) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_label_to_unsigned_is_zero() {
        assert_eq!(<u32 as DefaultLabel>::from_default(-1), 0);
        assert_eq!(<usize as DefaultLabel>::from_default(-7), 0);
        assert_eq!(<usize as DefaultLabel>::from_default(12), 12);
    }
}
