//! 数据加载模块
//!
//! 提供数据集加载、变换和批处理功能。
//!
//! # 主要组件
//!
//! - [`Cifar10Dataset`]: CIFAR-10 二进制分片数据集
//! - [`CifarConfig`]: 数据目录、分片文件名与图像尺寸配置
//! - [`DataLoader`]: `PyTorch` 风格的数据批量加载器
//! - [`TensorDataset`]: 持有特征和标签的数据集
//! - [`transforms`]: 数据变换函数（归一化、one-hot 等）
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use cifar_harness::data::{Cifar10Dataset, CifarConfig};
//!
//! let dataset = Cifar10Dataset::load(&CifarConfig::new("data/cifar-10-batches-bin"))?;
//! let (train_x, train_y, test_x, test_y) = dataset.into_parts();
//! ```

pub mod config;
mod dataloader;
pub mod datasets;
pub mod error;
pub mod transforms;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::CifarConfig;
pub use dataloader::{DataLoader, DataLoaderIterator, TensorDataset};
pub use datasets::{Cifar10Dataset, CifarSplit};
pub use error::DataError;
