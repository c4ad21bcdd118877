use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 重塑形状，元素总数不一致时panic
    pub fn reshape(&self, shape: &[usize]) -> Self {
        match self.try_reshape(shape) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }

    /// 重塑形状：仅重新解释元素的排布，不改变任何元素的值和（行优先）顺序。
    /// 元素总数不一致时返回`TensorError::IncompatibleShape`。
    pub fn try_reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        self.clone().into_reshape(shape)
    }

    /// 同`try_reshape`，但消耗自身：底层数据已是行优先连续布局时不做任何拷贝
    pub fn into_reshape(self, shape: &[usize]) -> Result<Self, TensorError> {
        let incompatible = |from: &[usize]| TensorError::IncompatibleShape {
            from: from.to_vec(),
            to: shape.to_vec(),
        };
        // 目标元素总数溢出`usize`时必然与现有元素数不符
        if checked_size(shape) != Some(self.data.len()) {
            return Err(incompatible(self.shape()));
        }
        let from = self.shape().to_vec();
        let data = if self.data.is_standard_layout() {
            self.data
        } else {
            self.data.as_standard_layout().into_owned()
        };
        let data = data.into_shape(shape).map_err(|_| incompatible(&from))?;
        Ok(Self { data })
    }

    /// 保留首个（样本）维度，其余维度展平：[N, d1, d2, ...] -> [N, d1*d2*...]
    pub fn flatten_samples(&self) -> Self {
        let shape = self.shape();
        if shape.is_empty() {
            return self.reshape(&[1, 1]);
        }
        let n = shape[0];
        let rest: usize = shape[1..].iter().product();
        self.reshape(&[n, rest])
    }
}

/// 形状中所有维度的乘积，溢出时返回`None`
pub(crate) fn checked_size(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}
