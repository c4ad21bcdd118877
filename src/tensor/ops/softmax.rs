use ndarray::Axis;

use crate::errors::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// 对二阶张量`[N, K]`逐行做 softmax，先减去每行最大值以保证数值稳定
    pub fn softmax_rows(&self) -> Result<Tensor, TensorError> {
        if self.dimension() != 2 {
            return Err(TensorError::RankMismatch {
                expected: 2,
                got: self.dimension(),
            });
        }
        let mut data = self.data.clone();
        for mut row in data.axis_iter_mut(Axis(0)) {
            let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            row.mapv_inplace(|x| (x - max).exp());
            let sum = row.sum();
            row.mapv_inplace(|x| x / sum);
        }
        Ok(Tensor { data })
    }
}
