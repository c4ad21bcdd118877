//! # cifar_harness
//!
//! 读取 CIFAR-10 二进制分片、重塑为`[N, C, H, W]`图像张量、驱动外部模型训练与推理，
//! 并计算测试集分类准确率。
//!
//! ```ignore
//! use cifar_harness::data::{Cifar10Dataset, CifarConfig};
//! use cifar_harness::harness::{reshape, run_experiment};
//! use cifar_harness::model::LinearClassifier;
//!
//! let config = CifarConfig::new("resources/cifar10/cifar-10-batches-bin");
//! let (train_x, train_y, test_x, test_y) = Cifar10Dataset::load(&config)?.into_parts();
//! let train_x = reshape(train_x, 3, 32, 32)?;
//! let test_x = reshape(test_x, 3, 32, 32)?;
//! let acc = run_experiment(&LinearClassifier::default(), &train_x, &train_y, &test_x, &test_y, 10)?;
//! ```

pub mod data;
pub mod errors;
pub mod harness;
pub mod model;
pub mod tensor;
pub mod utils;
