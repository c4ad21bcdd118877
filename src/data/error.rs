//! 数据加载错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 数据加载相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 分片文件不存在或不可读（不区分暂时性与永久性故障）
    #[error("数据集文件未找到或不可读: {path}")]
    DatasetNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 分片文件长度不是记录大小的整数倍
    #[error("分片文件已损坏: {path}（长度 {len} 字节，不是记录大小 {record_size} 的整数倍）")]
    CorruptShard {
        path: PathBuf,
        len: usize,
        record_size: usize,
    },

    /// 配置非法（如尺寸为 0、训练文件列表为空、JSON 无法解析）
    #[error("配置错误: {0}")]
    Config(String),

    /// 形状不匹配
    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
}
