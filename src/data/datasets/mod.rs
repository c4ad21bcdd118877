//! 内置数据集
//!
//! - CIFAR-10：32x32 彩色图像 10 分类（二进制分片格式）

mod cifar10;

pub use cifar10::{
    CLASS_NAMES, Cifar10Dataset, CifarSplit, Shard, decode_shard, read_shard,
};
