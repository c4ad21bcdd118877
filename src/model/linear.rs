/*
 * @Description  : Softmax 线性分类器，评估流程自带的参考模型实现
 *
 * logits = x · Wᵀ + b，W 形状为 [类别数, 特征数]
 * 损失为 softmax 交叉熵，梯度 ∂L/∂logits = softmax(logits) - y，按 batch 求平均后做 SGD
 */

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ModelError;
use crate::data::transforms::{flatten_images, normalize_pixels, one_hot};
use crate::data::{DataLoader, TensorDataset};
use crate::harness::ModelCollaborator;
use crate::tensor::Tensor;

/// 防止 ln(0)
const LOG_EPSILON: f32 = 1e-12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearClassifierConfig {
    /// 每个样本展平后的特征数（C×H×W）
    pub input_size: usize,
    pub num_classes: usize,
    pub learning_rate: f32,
    pub batch_size: usize,
    /// 权重初始化与每轮打乱顺序所用的随机种子
    pub seed: u64,
    /// 权重初始化的正态分布标准差
    pub init_std: f32,
}

impl Default for LinearClassifierConfig {
    fn default() -> Self {
        Self {
            input_size: 3 * 32 * 32,
            num_classes: 10,
            learning_rate: 0.01,
            batch_size: 64,
            seed: 42,
            init_std: 0.01,
        }
    }
}

/// 已训练（或未训练）的线性模型参数
#[derive(Debug, Clone)]
pub struct LinearModel {
    /// [num_classes, input_size]
    weights: Tensor,
    /// [num_classes]
    bias: Tensor,
}

impl LinearModel {
    pub fn weights(&self) -> &Tensor {
        &self.weights
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    /// 对已展平、已归一化的特征`[N, input_size]`计算 logits `[N, num_classes]`
    fn logits(&self, features: &Tensor) -> Result<Tensor, ModelError> {
        let z = features.mat_mul(&self.weights.transpose()?)?;
        Ok(z.add_row_vector(&self.bias))
    }
}

/// Softmax 线性分类器，实现[`ModelCollaborator`]
#[derive(Debug, Clone, Default)]
pub struct LinearClassifier {
    config: LinearClassifierConfig,
}

impl LinearClassifier {
    pub fn new(config: LinearClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinearClassifierConfig {
        &self.config
    }

    /// 图像 → 展平 → 归一化，并检查特征数
    fn prepare(&self, images: &Tensor) -> Result<Tensor, ModelError> {
        if images.dimension() < 2 {
            return Err(ModelError::ShapeMismatch {
                expected: vec![images.size(), self.config.input_size],
                got: images.shape().to_vec(),
                message: "图像张量至少需要 2 阶（首维为样本）".to_string(),
            });
        }
        let features = flatten_images(images);
        if features.shape()[1] != self.config.input_size {
            return Err(ModelError::ShapeMismatch {
                expected: vec![features.shape()[0], self.config.input_size],
                got: images.shape().to_vec(),
                message: "每个样本的特征数与模型输入大小不一致".to_string(),
            });
        }
        Ok(normalize_pixels(&features))
    }

    /// 单个 batch 的前向 + 反向 + 参数更新，返回该 batch 的平均损失
    fn sgd_step(&self, model: &mut LinearModel, x: &Tensor, y: &Tensor) -> Result<f32, ModelError> {
        let batch = x.shape()[0] as f32;
        let probs = model.logits(x)?.softmax_rows()?;

        let log_probs = probs.map(|p| (p + LOG_EPSILON).ln());
        let loss = -(y * &log_probs).sum() / batch;

        // ∂L/∂logits = (softmax - y) / B
        let grad_logits = &(&probs - y) / batch;
        let grad_weights = grad_logits.transpose()?.mat_mul(x)?;
        let grad_bias = grad_logits.sum_rows();

        let lr = self.config.learning_rate;
        model.weights = &model.weights - &(&grad_weights * lr);
        model.bias = &model.bias - &(&grad_bias * lr);
        Ok(loss)
    }
}

impl ModelCollaborator for LinearClassifier {
    type Dataset = TensorDataset;
    type Model = LinearModel;
    type Error = ModelError;

    fn construct_dataset(
        &self,
        images: &Tensor,
        labels: &[usize],
    ) -> Result<Self::Dataset, Self::Error> {
        let features = self.prepare(images)?;
        if features.shape()[0] != labels.len() {
            return Err(ModelError::ShapeMismatch {
                expected: vec![labels.len()],
                got: vec![features.shape()[0]],
                message: "图像样本数与标签数不一致".to_string(),
            });
        }
        if let Some(&label) = labels.iter().find(|&&l| l >= self.config.num_classes) {
            return Err(ModelError::LabelOutOfRange {
                label,
                num_classes: self.config.num_classes,
            });
        }
        let targets = one_hot(labels, self.config.num_classes);
        Ok(TensorDataset::new(features, targets))
    }

    fn construct_model(&self) -> Result<Self::Model, Self::Error> {
        let LinearClassifierConfig {
            input_size,
            num_classes,
            init_std,
            seed,
            ..
        } = self.config;
        if input_size == 0 || num_classes == 0 {
            return Err(ModelError::InvalidArgument(format!(
                "input_size 与 num_classes 必须为正数，实际为 {input_size} 与 {num_classes}"
            )));
        }
        Ok(LinearModel {
            weights: Tensor::new_normal_seeded(0.0, init_std, &[num_classes, input_size], seed),
            bias: Tensor::zeros(&[num_classes]),
        })
    }

    fn train(
        &self,
        model: &mut Self::Model,
        dataset: &Self::Dataset,
        epoch_count: usize,
    ) -> Result<(), Self::Error> {
        if epoch_count == 0 {
            return Err(ModelError::InvalidArgument(
                "epoch_count 必须大于 0".to_string(),
            ));
        }
        if self.config.batch_size == 0 {
            return Err(ModelError::InvalidArgument(
                "batch_size 必须大于 0".to_string(),
            ));
        }
        if dataset.is_empty() {
            return Err(ModelError::InvalidArgument("训练集为空".to_string()));
        }

        for epoch in 1..=epoch_count {
            let loader = DataLoader::new(dataset, self.config.batch_size)
                .shuffle(true)
                .seed(self.config.seed.wrapping_add(epoch as u64));

            let batches = loader.num_batches();
            let mut loss_sum = 0.0;
            for (x, y) in loader.iter() {
                loss_sum += self.sgd_step(model, &x, &y)?;
            }
            let mean_loss = loss_sum / batches as f32;
            if !mean_loss.is_finite() {
                return Err(ModelError::NonFiniteLoss {
                    epoch,
                    loss: mean_loss,
                });
            }
            info!(epoch, epochs = epoch_count, loss = mean_loss, "训练");
            debug!(batches, "本轮 batch 数");
        }
        Ok(())
    }

    fn forward(&self, model: &Self::Model, images: &Tensor) -> Result<Tensor, Self::Error> {
        let features = self.prepare(images)?;
        model.logits(&features)
    }
}
