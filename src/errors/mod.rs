use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    #[error("张量形状不兼容：无法将形状{from:?}重塑为{to:?}")]
    IncompatibleShape { from: Vec<usize>, to: Vec<usize> },
    #[error("维度{axis}超出范围：张量阶数为{dimension}")]
    AxisOutOfRange { axis: usize, dimension: usize },
    #[error("维度{axis}的长度为0")]
    EmptyAxis { axis: usize },
    #[error("张量阶数不符：期望{expected}阶，实际{got}阶")]
    RankMismatch { expected: usize, got: usize },
    #[error(
        "形状不一致，故无法矩阵相乘：第一个张量的形状为{lhs:?}，第二个张量的形状为{rhs:?}"
    )]
    MatMulShape { lhs: Vec<usize>, rhs: Vec<usize> },
}
