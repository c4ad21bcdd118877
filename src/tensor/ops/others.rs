use crate::tensor::Tensor;
use std::cmp::PartialEq;
use std::ops::{Div, Mul, Sub};

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对张量中的所有元素求和
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// 逐元素映射
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// 对二阶张量`[N, M]`按行加上形状为`[M]`的向量（如线性层的偏置）
    pub fn add_row_vector(&self, row: &Tensor) -> Tensor {
        assert!(
            self.dimension() == 2 && row.dimension() == 1 && self.shape()[1] == row.shape()[0],
            "形状不兼容，无法按行相加：{:?}与{:?}",
            self.shape(),
            row.shape()
        );
        Tensor {
            data: &self.data + &row.data,
        }
    }

    /// 对二阶张量`[N, M]`沿样本维度求和，得到形状为`[M]`的张量
    pub fn sum_rows(&self) -> Tensor {
        assert!(self.dimension() == 2, "只接受2阶张量");
        Tensor {
            data: self.data.sum_axis(ndarray::Axis(0)),
        }
    }
}

// 张量与纯数的逐元素运算
impl Div<f32> for &Tensor {
    type Output = Tensor;
    fn div(self, rhs: f32) -> Tensor {
        Tensor {
            data: &self.data / rhs,
        }
    }
}

impl Mul<f32> for &Tensor {
    type Output = Tensor;
    fn mul(self, rhs: f32) -> Tensor {
        Tensor {
            data: &self.data * rhs,
        }
    }
}

// 形状一致的两个张量逐元素运算，形状不一致时panic
impl Sub<&Tensor> for &Tensor {
    type Output = Tensor;
    fn sub(self, rhs: &Tensor) -> Tensor {
        assert!(
            self.is_same_shape(rhs),
            "形状不一致，故无法相减：第一个张量的形状为{:?}，第二个张量的形状为{:?}",
            self.shape(),
            rhs.shape()
        );
        Tensor {
            data: &self.data - &rhs.data,
        }
    }
}

impl Mul<&Tensor> for &Tensor {
    type Output = Tensor;
    fn mul(self, rhs: &Tensor) -> Tensor {
        assert!(
            self.is_same_shape(rhs),
            "形状不一致，故无法相乘：第一个张量的形状为{:?}，第二个张量的形状为{:?}",
            self.shape(),
            rhs.shape()
        );
        Tensor {
            data: &self.data * &rhs.data,
        }
    }
}
