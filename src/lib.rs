//! 收盘价序列上的区间聚合查询
//!
//! [`tree::AggregationTree`] 在 O(logn) 时间内回答区间的和、最小值、最大值，
//! 支持单点修改；[`series::PriceSeries`] 和 [`frontend::StockScope`] 负责
//! 把按日期的查询翻译成下标。

pub mod aggregate;
pub mod error;
pub mod frontend;
pub mod series;
pub mod traits;
pub mod tree;

pub use aggregate::Aggregate;
pub use error::{Error, Result};
pub use tree::{AggregationTree, SegmentTree};
