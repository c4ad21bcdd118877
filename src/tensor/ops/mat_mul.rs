use ndarray::Ix2;

use crate::errors::TensorError;
use crate::tensor::Tensor;

impl Tensor {
    /// 实现矩阵乘法。只接受2阶张量，
    /// 且前一个张量的列数（col）须等于后一个张量的行数（row），否则返回错误。
    pub fn mat_mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        let lhs = self.as_matrix()?;
        let rhs = other.as_matrix()?;
        if lhs.ncols() != rhs.nrows() {
            return Err(TensorError::MatMulShape {
                lhs: self.shape().to_vec(),
                rhs: other.shape().to_vec(),
            });
        }
        Ok(Tensor {
            data: lhs.dot(&rhs).into_dyn(),
        })
    }

    /// 矩阵转置，只接受2阶张量
    pub fn transpose(&self) -> Result<Tensor, TensorError> {
        let m = self.as_matrix()?;
        Ok(Tensor {
            data: m.t().as_standard_layout().into_owned().into_dyn(),
        })
    }

    fn as_matrix(&self) -> Result<ndarray::ArrayView2<'_, f32>, TensorError> {
        self.data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::RankMismatch {
                expected: 2,
                got: self.dimension(),
            })
    }
}
