use crate::traits::{Monoid, Semigroup};

/// 区间的 (和, 最小值, 最大值) 三元组
///
/// 三种聚合共享同一个合并结构，所以一次遍历同时得到三个结果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

impl Aggregate {
    /// 单个叶子的三元组
    pub fn of(value: f64) -> Self {
        Aggregate {
            sum: value,
            min: value,
            max: value,
        }
    }

    /// 是否为单位元 (0, +inf, -inf)，即“没有数据”
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Semigroup for Aggregate {
    fn combine(self, rhs: Self) -> Self {
        Aggregate {
            sum: self.sum + rhs.sum,
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
        }
    }
}

impl Monoid for Aggregate {
    fn identity() -> Self {
        Aggregate {
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl From<f64> for Aggregate {
    fn from(value: f64) -> Self {
        Aggregate::of(value)
    }
}
