//! 外部模型实现的能力接口
//!
//! 评估流程只依赖这四个操作，不关心模型如何存放参数、采用何种网络结构或优化算法。
//! 任何实现（纯 Rust、FFI 绑定、远程调用……）只要实现[`ModelCollaborator`]即可接入。

use crate::tensor::Tensor;

pub trait ModelCollaborator {
    /// 由训练图像与标签构建的数据集句柄
    type Dataset;
    /// 模型句柄，`train`会修改其内部状态
    type Model;
    type Error: std::error::Error + Send + Sync + 'static;

    /// 由`[N, C, H, W]`图像张量和长度为 N 的标签构建数据集，形状不兼容时报错
    fn construct_dataset(
        &self,
        images: &Tensor,
        labels: &[usize],
    ) -> Result<Self::Dataset, Self::Error>;

    /// 构建一个未训练的模型
    fn construct_model(&self) -> Result<Self::Model, Self::Error>;

    /// 在`dataset`上训练`epoch_count`轮。`epoch_count`的合法性由实现自行检查
    fn train(
        &self,
        model: &mut Self::Model,
        dataset: &Self::Dataset,
        epoch_count: usize,
    ) -> Result<(), Self::Error>;

    /// 推理：返回`[样本, 类别]`的原始得分。不得修改`images`
    fn forward(&self, model: &Self::Model, images: &Tensor) -> Result<Tensor, Self::Error>;
}
