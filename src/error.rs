//! # 统一错误处理模块
//!
//! 定义 latphys 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// latphys 统一错误类型
#[derive(Error, Debug)]
pub enum LatticeError {
    // ─────────────────────────────────────────────────────────────
    // 数据模型校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Bond {bond} references site {index}, but the unitcell has only {num_sites} site(s)")]
    InvalidBondIndex {
        bond: usize,
        index: usize,
        num_sites: usize,
    },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Invalid lattice extent {extent:?}: every direction needs at least one unitcell")]
    InvalidExtent { extent: Vec<usize> },

    #[error("Lattice with extent {extent:?} is too large: {reason}")]
    LatticeTooLarge { extent: Vec<usize>, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 晶胞目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown unitcell '{name}' (see `latphys list`)")]
    UnknownUnitcell { name: String },

    #[error("Unitcell '{name}' has no variant {variant} (available: {available:?})")]
    UnknownVariant {
        name: String,
        variant: u32,
        available: Vec<u32>,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid size format: {0}")]
    InvalidSize(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plotting failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LatticeError>;
