use std::ops::Index;

use ndarray::Axis;

use super::Tensor;

impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f32;

    /// 单元素索引，如`t[[s, c, h, w]]`。索引维数须与张量阶数一致，否则panic
    fn index(&self, index: [usize; N]) -> &Self::Output {
        assert!(
            N == self.dimension(),
            "索引维数（{}）与张量阶数（{}）不一致",
            N,
            self.dimension()
        );
        &self.data[&index[..]]
    }
}

// 沿首个（样本）维度的拷贝式选取
impl Tensor {
    /// 按给定的样本索引（可乱序、可重复）拷贝出对应样本，顺序与`indices`一致。
    pub fn select_rows(&self, indices: &[usize]) -> Tensor {
        assert!(self.dimension() >= 1, "标量张量没有样本维度");
        Tensor {
            data: self.data.select(Axis(0), indices),
        }
    }
}
