use thiserror::Error;

use crate::errors::TensorError;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("参数非法: {0}")]
    InvalidArgument(String),

    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}, {message}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },

    #[error("标签 {label} 超出类别范围 [0, {num_classes})")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("第 {epoch} 轮训练的损失值不是有限数（{loss}），训练已发散")]
    NonFiniteLoss { epoch: usize, loss: f32 },

    #[error(transparent)]
    Tensor(#[from] TensorError),
}
