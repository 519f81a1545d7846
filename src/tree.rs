use crate::{
    aggregate::Aggregate,
    error::{Error, Result},
    traits::Monoid,
};
use log::{debug, trace};

/// 数组实现的线段树
///
/// 节点下标从 1 开始，节点 p 的孩子是 2p 和 2p+1，根是 1。
/// 叶子位于 [base, base + n)，[base + n, 2 * base) 是填充叶子，保存单位元。
/// 任何修改结束后，每个内部节点都等于两个孩子的合并。
#[derive(Debug, Clone)]
pub struct SegmentTree<V> {
    /// 节点数组，nodes[0] 不使用
    nodes: Vec<V>,

    /// 不小于 n 的最小的 2 的幂
    base: usize,

    /// 元素个数，建树之后不再改变
    n: usize,
}

/// (和, 最小值, 最大值) 线段树
pub type AggregationTree = SegmentTree<Aggregate>;

impl<V: Monoid> Default for SegmentTree<V> {
    /// 空树：只有一对保存单位元的节点
    fn default() -> Self {
        SegmentTree {
            nodes: vec![V::identity(); 2],
            base: 1,
            n: 0,
        }
    }
}

impl<V: Monoid> SegmentTree<V> {
    /// 自底向上建树，O(n)
    pub fn from_leaves<I: IntoIterator<Item = V>>(leaves: I) -> Self {
        let leaves: Vec<V> = leaves.into_iter().collect();
        let n = leaves.len();
        // 0 和 1 都对应 base = 1
        let base = n.next_power_of_two();

        let mut nodes = vec![V::identity(); 2 * base];
        nodes[base..base + n].copy_from_slice(&leaves);

        let mut tree = SegmentTree { nodes, base, n };
        for p in (1..base).rev() {
            tree.pull(p);
        }
        debug!("segment tree built: n = {}, base = {}", n, base);
        tree
    }

    /// 元素个数
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    fn pull(&mut self, p: usize) {
        self.nodes[p] = self.nodes[p << 1].combine(self.nodes[(p << 1) | 1]);
    }

    /// 查询 index 处的叶子
    pub fn get(&self, index: usize) -> Option<V> {
        if index < self.n {
            Some(self.nodes[self.base + index])
        } else {
            None
        }
    }

    /// 把 index 处的叶子设置为 value，然后沿着父节点一路向上重新合并
    /// O(logn)
    pub fn set(&mut self, index: usize, value: V) -> Result<()> {
        if index >= self.n {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.n,
            });
        }
        let mut p = self.base + index;
        self.nodes[p] = value;
        p >>= 1;
        while p > 0 {
            self.pull(p);
            p >>= 1;
        }
        trace!("segment tree: set leaf {}", index);
        Ok(())
    }

    /// 查询闭区间 [l, r] 的聚合值
    /// 要求 l <= r < n，左右颠倒不会自动交换
    /// O(logn)
    pub fn query(&self, l: usize, r: usize) -> Result<V> {
        if l > r || r >= self.n {
            return Err(Error::WindowOutOfRange {
                left: l,
                right: r,
                len: self.n,
            });
        }
        let mut left = self.base + l;
        let mut right = self.base + r;
        let mut result = V::identity();
        while left <= right {
            // left 是右孩子，它的父节点覆盖了区间外的部分
            if left & 1 == 1 {
                result = result.combine(self.nodes[left]);
                left += 1;
            }
            // right 是左孩子
            if right & 1 == 0 {
                result = result.combine(self.nodes[right]);
                right -= 1;
            }
            left >>= 1;
            right >>= 1;
        }
        Ok(result)
    }

    /// 整个序列的聚合值，O(1)
    /// 空树返回单位元
    pub fn query_all(&self) -> V {
        if self.n == 0 {
            V::identity()
        } else {
            self.nodes[1]
        }
    }
}

impl SegmentTree<Aggregate> {
    pub fn build(values: &[f64]) -> Self {
        Self::from_leaves(values.iter().copied().map(Aggregate::of))
    }

    /// 用新的序列重新建树，长度可以和之前不同
    pub fn rebuild(&mut self, values: &[f64]) {
        *self = Self::build(values);
    }

    pub fn update(&mut self, index: usize, value: f64) -> Result<()> {
        self.set(index, Aggregate::of(value))
    }

    /// index 处当前的数值
    pub fn value(&self, index: usize) -> Option<f64> {
        self.get(index).map(|agg| agg.sum)
    }

    pub fn query_sum(&self, l: usize, r: usize) -> Result<f64> {
        self.query(l, r).map(|agg| agg.sum)
    }

    pub fn query_min(&self, l: usize, r: usize) -> Result<f64> {
        self.query(l, r).map(|agg| agg.min)
    }

    pub fn query_max(&self, l: usize, r: usize) -> Result<f64> {
        self.query(l, r).map(|agg| agg.max)
    }
}
