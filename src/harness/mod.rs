//! 评估流程
//!
//! 单趟流水线：重塑 → 构建数据集 → 构建模型 → 训练 → 推理 → argmax → 计算准确率。
//! 不重试、不保存中间状态，任何一步失败即整体失败。

mod collaborator;
mod error;


use tracing::{debug, info};

use crate::errors::TensorError;
use crate::tensor::Tensor;

pub use collaborator::ModelCollaborator;
pub use error::{CollaboratorError, HarnessError};

/// 将逐样本展平的图像`[N, ...]`重新解释为`[N, C, H, W]`
///
/// 只改变排布，不改变任何像素值，也不拷贝数据：结果中`[s, c, h, w]`处的值等于
/// 输入平铺后`s*C*H*W + c*H*W + h*W + w`处的值。
/// 样本数取`flat_images`的首个维度，`N*C*H*W`与元素总数不符时返回
/// [`HarnessError::ShapeMismatch`]。
pub fn reshape(
    flat_images: Tensor,
    channel_count: usize,
    height: usize,
    width: usize,
) -> Result<Tensor, HarnessError> {
    let sample_count = flat_images.shape().first().copied().unwrap_or(1);
    let target = [sample_count, channel_count, height, width];
    let got = flat_images.shape().to_vec();
    flat_images
        .into_reshape(&target)
        .map_err(|_| HarnessError::ShapeMismatch {
            expected: target.to_vec(),
            got,
        })
}

/// 对`[样本, 类别]`得分逐样本取最大值所在的类别；并列时取最小的类别索引
///
/// 非二阶返回[`HarnessError::ShapeMismatch`]，类别数为 0 返回[`HarnessError::EmptyClasses`]。
pub fn argmax_predictions(raw_scores: &Tensor) -> Result<Vec<usize>, HarnessError> {
    let shape = raw_scores.shape();
    if shape.len() != 2 {
        // 期望的二阶形状：保留样本维度，其余维度合并为类别维度
        let samples = shape.first().copied().unwrap_or(1);
        let classes = shape.iter().skip(1).product();
        return Err(HarnessError::ShapeMismatch {
            expected: vec![samples, classes],
            got: shape.to_vec(),
        });
    }
    raw_scores.argmax_rows().map_err(|e| match e {
        TensorError::EmptyAxis { .. } => HarnessError::EmptyClasses { samples: shape[0] },
        _ => HarnessError::ShapeMismatch {
            expected: vec![shape[0], shape[1]],
            got: shape.to_vec(),
        },
    })
}

/// 准确率 = 预测正确的样本数 / 样本总数，取值范围 [0.0, 1.0]
///
/// 两者长度不一致时返回[`HarnessError::LengthMismatch`]；空集合的准确率为 0.0。
pub fn accuracy(predictions: &[usize], labels: &[usize]) -> Result<f64, HarnessError> {
    if predictions.len() != labels.len() {
        return Err(HarnessError::LengthMismatch {
            predictions: predictions.len(),
            labels: labels.len(),
        });
    }
    if labels.is_empty() {
        return Ok(0.0);
    }
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, l)| p == l)
        .count();
    Ok(correct as f64 / labels.len() as f64)
}

/// 完整跑一次实验，返回测试集准确率
///
/// 图像须已是模型期望的`[N, C, H, W]`排布（见[`reshape`]）。
/// 外部实现的错误以[`HarnessError::Collaborator`]原样向上传递。
pub fn run_experiment<M: ModelCollaborator>(
    collaborator: &M,
    train_images: &Tensor,
    train_labels: &[usize],
    test_images: &Tensor,
    test_labels: &[usize],
    epoch_count: usize,
) -> Result<f64, HarnessError> {
    let dataset = collaborator
        .construct_dataset(train_images, train_labels)
        .map_err(collaborator_error)?;
    debug!(samples = train_labels.len(), "训练数据集已构建");

    let mut model = collaborator.construct_model().map_err(collaborator_error)?;

    info!(epochs = epoch_count, "开始训练");
    collaborator
        .train(&mut model, &dataset, epoch_count)
        .map_err(collaborator_error)?;

    let raw_scores = collaborator
        .forward(&model, test_images)
        .map_err(collaborator_error)?;
    debug!(shape = ?raw_scores.shape(), "推理完成");

    let predictions = argmax_predictions(&raw_scores)?;
    let acc = accuracy(&predictions, test_labels)?;
    info!(accuracy = acc, samples = test_labels.len(), "测试集评估完成");
    Ok(acc)
}

fn collaborator_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> HarnessError {
    HarnessError::Collaborator(Box::new(e))
}
