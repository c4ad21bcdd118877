//! CIFAR-10 数据集配置
//!
//! 数据目录、分片文件名与图像几何参数都通过[`CifarConfig`]显式传入加载器，
//! 不依赖任何进程级的全局路径约定。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// 标准 CIFAR-10 二进制版本的训练分片，按此顺序拼接
pub const DEFAULT_TRAIN_FILES: [&str; 5] = [
    "data_batch_1.bin",
    "data_batch_2.bin",
    "data_batch_3.bin",
    "data_batch_4.bin",
    "data_batch_5.bin",
];
pub const DEFAULT_TEST_FILE: &str = "test_batch.bin";
pub const DEFAULT_ROOT: &str = "resources/cifar10/cifar-10-batches-bin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CifarConfig {
    /// 分片文件所在目录
    pub root: PathBuf,
    /// 训练分片文件名，加载时按列表顺序拼接
    pub train_files: Vec<String>,
    /// 测试分片文件名
    pub test_file: String,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
    pub num_classes: usize,
}

impl Default for CifarConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            train_files: DEFAULT_TRAIN_FILES.iter().map(|s| s.to_string()).collect(),
            test_file: DEFAULT_TEST_FILE.to_string(),
            channels: 3,
            height: 32,
            width: 32,
            num_classes: 10,
        }
    }
}

impl CifarConfig {
    /// 标准布局，仅替换数据目录
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::default().with_root(root)
    }

    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    pub fn with_train_files<S: Into<String>>(mut self, files: impl IntoIterator<Item = S>) -> Self {
        self.train_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_file<S: Into<String>>(mut self, file: S) -> Self {
        self.test_file = file.into();
        self
    }

    /// 设置图像几何参数（通道、高、宽）
    pub fn with_geometry(mut self, channels: usize, height: usize, width: usize) -> Self {
        self.channels = channels;
        self.height = height;
        self.width = width;
        self
    }

    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    /// 单张图像的像素字节数：C×H×W。调用前应先通过[`CifarConfig::validate`]
    pub fn image_size(&self) -> usize {
        self.channels * self.height * self.width
    }

    /// 单条记录的字节数：1（标签）+ C×H×W
    pub fn record_size(&self) -> usize {
        1 + self.image_size()
    }

    /// 训练分片的完整路径，顺序与`train_files`一致
    pub fn train_paths(&self) -> Vec<PathBuf> {
        self.train_files.iter().map(|f| self.root.join(f)).collect()
    }

    pub fn test_path(&self) -> PathBuf {
        self.root.join(&self.test_file)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.channels == 0 || self.height == 0 || self.width == 0 {
            return Err(DataError::Config(format!(
                "图像尺寸必须为正数，实际为 {}x{}x{}",
                self.channels, self.height, self.width
            )));
        }
        let record_size = self
            .channels
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.width))
            .and_then(|n| n.checked_add(1));
        if record_size.is_none() {
            return Err(DataError::Config(format!(
                "图像尺寸 {}x{}x{} 过大，记录字节数溢出",
                self.channels, self.height, self.width
            )));
        }
        if self.num_classes == 0 {
            return Err(DataError::Config("类别数必须为正数".to_string()));
        }
        // 标签只占 1 字节
        if self.num_classes > 256 {
            return Err(DataError::Config(format!(
                "类别数不能超过 256，实际为 {}",
                self.num_classes
            )));
        }
        if self.train_files.is_empty() {
            return Err(DataError::Config("训练分片文件列表为空".to_string()));
        }
        Ok(())
    }

    /// 从 JSON 文件读取配置，缺省字段取标准 CIFAR-10 的值
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DataError::Config(format!("无法读取配置文件 {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| DataError::Config(format!("无法解析配置文件 {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }
}
