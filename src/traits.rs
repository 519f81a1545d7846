pub trait Semigroup: Copy {
    /// 结合律的合并操作
    fn combine(self, rhs: Self) -> Self;
}

pub trait Monoid: Semigroup {
    // 返回单位元
    fn identity() -> Self;
}
