//! 评估流程的错误类型定义

use thiserror::Error;

use crate::data::DataError;

/// 外部模型实现返回的错误，原样保留（含`source`链）
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 评估流程相关错误。所有错误对本次运行都是致命的，不做重试或部分恢复。
#[derive(Debug, Error)]
pub enum HarnessError {
    /// 重塑时元素总数不符，或得分张量的阶数不符
    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// 得分张量是二阶的，但类别维度为 0，无从取 argmax
    #[error("得分张量没有任何类别: 形状 [{samples}, 0]，类别数至少为 1")]
    EmptyClasses { samples: usize },

    /// 预测向量与标签向量长度不一致
    #[error("长度不匹配: 预测 {predictions} 个, 标签 {labels} 个")]
    LengthMismatch { predictions: usize, labels: usize },

    /// 数据加载阶段的错误
    #[error(transparent)]
    Data(#[from] DataError),

    /// 外部模型实现（构建数据集、构建模型、训练、推理）的错误
    #[error("模型实现出错: {0}")]
    Collaborator(#[source] CollaboratorError),
}
