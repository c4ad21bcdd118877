use ndarray::Axis;

use crate::errors::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// 沿`axis`求最大值所在的索引，结果张量去掉该维度，索引以`f32`存储。
    /// 若有多个相同的最大值，取索引最小（最先出现）的那个。
    /// NaN 不会被选为最大值（除非该方向上全是 NaN，此时返回 0）。
    pub fn argmax(&self, axis: usize) -> Result<Tensor, TensorError> {
        if axis >= self.dimension() {
            return Err(TensorError::AxisOutOfRange {
                axis,
                dimension: self.dimension(),
            });
        }
        if self.shape()[axis] == 0 {
            return Err(TensorError::EmptyAxis { axis });
        }
        let data = self
            .data
            .map_axis(Axis(axis), |lane| first_max_index(lane.iter().copied()) as f32);
        Ok(Tensor { data })
    }

    /// 对二阶得分张量`[样本, 类别]`逐样本求 argmax，直接返回类别索引
    pub fn argmax_rows(&self) -> Result<Vec<usize>, TensorError> {
        if self.dimension() != 2 {
            return Err(TensorError::RankMismatch {
                expected: 2,
                got: self.dimension(),
            });
        }
        Ok(self
            .argmax(1)?
            .data
            .iter()
            .map(|&index| index as usize)
            .collect())
    }
}

/// 严格大于才更新，所以并列时保留最先出现的索引
fn first_max_index(values: impl Iterator<Item = f32>) -> usize {
    let mut best_index = 0;
    let mut best_value = f32::NEG_INFINITY;
    let mut seen_number = false;
    for (i, v) in values.enumerate() {
        if v.is_nan() {
            continue;
        }
        if !seen_number || v > best_value {
            best_index = i;
            best_value = v;
            seen_number = true;
        }
    }
    best_index
}
