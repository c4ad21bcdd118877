//! CIFAR-10 图像分类数据集
//!
//! 解析官方“二进制版本”的分片文件（<https://www.cs.toronto.edu/~kriz/cifar.html>）：
//! - 每个分片由若干条定长记录首尾相接组成，没有文件头
//! - 每条记录 = 1 字节标签 + C×H×W 字节像素（通道平面序：先全部 R，再全部 G，最后全部 B）
//! - 训练集分布在多个分片中，测试集为单个分片
//!
//! 加载结果中的图像保持原始像素值（0-255），且为逐样本展平的`[N, C*H*W]`，
//! 重塑为`[N, C, H, W]`由评估流程负责。

use std::path::Path;

use tracing::{debug, info, warn};

use crate::data::config::CifarConfig;
use crate::data::error::DataError;
use crate::tensor::Tensor;

/// CIFAR-10 的 10 个类别，下标即标签值
pub const CLASS_NAMES: [&str; 10] = [
    "airplane",
    "automobile",
    "bird",
    "cat",
    "deer",
    "dog",
    "frog",
    "horse",
    "ship",
    "truck",
];

/// 单个分片解码后的内容
#[derive(Debug, Clone, PartialEq)]
pub struct Shard {
    /// 逐样本拼接的像素，长度为 记录数×C×H×W
    pub pixels: Vec<f32>,
    pub labels: Vec<usize>,
}

impl Shard {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// 解码一个分片的完整字节内容
///
/// `path`仅用于错误信息。字节长度不是记录大小（1 + `image_size`）的整数倍时
/// 返回[`DataError::CorruptShard`]，不会截断或补齐。
pub fn decode_shard(path: &Path, bytes: &[u8], image_size: usize) -> Result<Shard, DataError> {
    let record_size = image_size + 1;
    if bytes.len() % record_size != 0 {
        return Err(DataError::CorruptShard {
            path: path.to_path_buf(),
            len: bytes.len(),
            record_size,
        });
    }

    let num_records = bytes.len() / record_size;
    let mut pixels = Vec::with_capacity(num_records * image_size);
    let mut labels = Vec::with_capacity(num_records);
    for record in bytes.chunks_exact(record_size) {
        labels.push(record[0] as usize);
        pixels.extend(record[1..].iter().map(|&p| p as f32));
    }

    Ok(Shard { pixels, labels })
}

/// 读取并解码单个分片文件
pub fn read_shard(path: &Path, image_size: usize) -> Result<Shard, DataError> {
    let bytes = std::fs::read(path).map_err(|source| DataError::DatasetNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let shard = decode_shard(path, &bytes, image_size)?;
    debug!(path = %path.display(), records = shard.len(), "已解码分片");
    Ok(shard)
}

/// 数据集的一个划分（训练或测试）：图像与标签一一对应
#[derive(Debug, Clone)]
pub struct CifarSplit {
    /// [N, C*H*W]，原始像素值
    images: Tensor,
    labels: Vec<usize>,
}

impl CifarSplit {
    /// 由若干分片按给定顺序拼接而成，样本顺序与分片内、分片间的原始顺序完全一致
    fn from_shards(shards: Vec<Shard>, image_size: usize) -> Self {
        let total: usize = shards.iter().map(Shard::len).sum();
        let mut pixels = Vec::with_capacity(total * image_size);
        let mut labels = Vec::with_capacity(total);
        for shard in shards {
            pixels.extend(shard.pixels);
            labels.extend(shard.labels);
        }
        Self {
            images: Tensor::from_vec(pixels, &[total, image_size]),
            labels,
        }
    }

    /// 样本数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 逐样本展平的图像 [N, C*H*W]
    pub fn images(&self) -> &Tensor {
        &self.images
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn into_parts(self) -> (Tensor, Vec<usize>) {
        (self.images, self.labels)
    }

    /// 各类别的样本数，下标为类别。超出`num_classes`的标签不计入
    pub fn label_histogram(&self, num_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; num_classes];
        for &label in &self.labels {
            if let Some(c) = counts.get_mut(label) {
                *c += 1;
            }
        }
        counts
    }
}

/// CIFAR-10 数据集：训练集 + 测试集
///
/// 标准数据包含 50,000 个训练样本（5 个分片）和 10,000 个测试样本。
/// 加载后不可变，不做任何持久化。
#[derive(Debug, Clone)]
pub struct Cifar10Dataset {
    train: CifarSplit,
    test: CifarSplit,
    config: CifarConfig,
}

impl Cifar10Dataset {
    /// 按配置加载全部分片
    ///
    /// 先确认所有分片都可访问，再逐个解码：任何一个文件缺失或不可读都返回
    /// [`DataError::DatasetNotFound`]，长度非法返回[`DataError::CorruptShard`]。
    /// 只读访问文件系统。
    pub fn load(config: &CifarConfig) -> Result<Self, DataError> {
        config.validate()?;
        let image_size = config.image_size();
        let train_paths = config.train_paths();
        let test_path = config.test_path();

        for path in train_paths.iter().chain(std::iter::once(&test_path)) {
            let not_found = |source| DataError::DatasetNotFound {
                path: path.clone(),
                source,
            };
            let metadata = std::fs::metadata(path).map_err(not_found)?;
            // 同名目录等非普通文件同样视为不可读
            if !metadata.is_file() {
                return Err(not_found(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "不是普通文件",
                )));
            }
        }

        info!(root = %config.root.display(), shards = train_paths.len(), "开始加载 CIFAR-10 训练集");
        let train_shards = train_paths
            .iter()
            .map(|p| read_shard(p, image_size))
            .collect::<Result<Vec<_>, _>>()?;
        let train = CifarSplit::from_shards(train_shards, image_size);

        let test = CifarSplit::from_shards(vec![read_shard(&test_path, image_size)?], image_size);

        for (name, split) in [("train", &train), ("test", &test)] {
            let histogram = split.label_histogram(config.num_classes);
            let in_range: usize = histogram.iter().sum();
            if in_range != split.len() {
                warn!(
                    split = name,
                    count = split.len() - in_range,
                    num_classes = config.num_classes,
                    "存在超出类别范围的标签"
                );
            }
            debug!(split = name, ?histogram, "各类别样本数");
        }
        info!(
            train = train.len(),
            test = test.len(),
            "CIFAR-10 加载完成"
        );

        Ok(Self {
            train,
            test,
            config: config.clone(),
        })
    }

    pub fn train(&self) -> &CifarSplit {
        &self.train
    }

    pub fn test(&self) -> &CifarSplit {
        &self.test
    }

    pub fn config(&self) -> &CifarConfig {
        &self.config
    }

    /// 单张图像的形状（不含样本维度）：[C, H, W]
    pub fn image_shape(&self) -> [usize; 3] {
        [self.config.channels, self.config.height, self.config.width]
    }

    /// 拆分为`(train_images, train_labels, test_images, test_labels)`
    pub fn into_parts(self) -> (Tensor, Vec<usize>, Tensor, Vec<usize>) {
        let (train_images, train_labels) = self.train.into_parts();
        let (test_images, test_labels) = self.test.into_parts();
        (train_images, train_labels, test_images, test_labels)
    }

    pub fn class_names() -> &'static [&'static str] {
        &CLASS_NAMES
    }
}
