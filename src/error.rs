//! 错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// 文件读写错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 格式错误（缺列、数值无法解析等）
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date {0} not found in series")]
    DateNotFound(String),

    /// 下标越界，update 在写入之前检查
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// 查询窗口越界或者左右颠倒，query 在访问数组之前检查
    #[error("window [{left}, {right}] out of range for series of length {len}")]
    WindowOutOfRange { left: usize, right: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
