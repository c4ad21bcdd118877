//! 数据变换函数
//!
//! 提供常用的数据预处理操作，如归一化、one-hot 编码等。

use crate::tensor::Tensor;

/// 将 0-255 像素值归一化到 0-1
///
/// # 参数
/// - `tensor`: 输入 Tensor，值范围 [0, 255]
///
/// # 返回
/// 归一化后的 Tensor，值范围 [0, 1]
pub fn normalize_pixels(tensor: &Tensor) -> Tensor {
    tensor / 255.0
}

/// 将类别索引转换为 one-hot 编码
///
/// # 参数
/// - `labels`: 类别索引，值为 0..num_classes
/// - `num_classes`: 类别总数
///
/// # 返回
/// one-hot 编码 Tensor，形状 [N, num_classes]；越界的标签对应全零行
///
/// # 示例
/// ```ignore
/// let one_hot = one_hot(&[0, 2, 1], 3);
/// // 结果: [[1,0,0], [0,0,1], [0,1,0]]
/// ```
pub fn one_hot(labels: &[usize], num_classes: usize) -> Tensor {
    let n = labels.len();
    let mut data = vec![0.0; n * num_classes];
    for (i, &class_idx) in labels.iter().enumerate() {
        if class_idx < num_classes {
            data[i * num_classes + class_idx] = 1.0;
        }
    }
    Tensor::from_vec(data, &[n, num_classes])
}

/// 展平图像，保留样本维度
///
/// - 形状 [N, C, H, W] → [N, C*H*W]
/// - 形状 [N, D] 保持不变
pub fn flatten_images(tensor: &Tensor) -> Tensor {
    if tensor.dimension() == 2 {
        tensor.clone()
    } else {
        tensor.flatten_samples()
    }
}
