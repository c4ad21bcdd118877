/*
 * @Description  : CIFAR-10 端到端集成测试
 *                 合成标准尺寸（3x32x32）的分片文件，验证：加载 → 重塑 → 训练 → 推理 → 评分
 */

use std::path::Path;

use approx::assert_abs_diff_eq;
use tempfile::tempdir;

use cifar_harness::data::{Cifar10Dataset, CifarConfig, DataError};
use cifar_harness::harness::{HarnessError, ModelCollaborator, reshape, run_experiment};
use cifar_harness::model::{LinearClassifier, LinearClassifierConfig};
use cifar_harness::tensor::Tensor;

const IMAGE_SIZE: usize = 3 * 32 * 32;

fn record(label: u8, pixel: impl Fn(usize) -> u8) -> Vec<u8> {
    let mut bytes = vec![label];
    bytes.extend((0..IMAGE_SIZE).map(pixel));
    bytes
}

/// 按标准文件名写出 5 个训练分片和 1 个测试分片
fn write_cifar_dir(dir: &Path, train: &[Vec<Vec<u8>>; 5], test: &[Vec<u8>]) -> CifarConfig {
    let config = CifarConfig::new(dir);
    for (name, records) in config.train_files.iter().zip(train) {
        std::fs::write(dir.join(name), records.concat()).unwrap();
    }
    std::fs::write(dir.join(&config.test_file), test.concat()).unwrap();
    config
}

/// 推理时总是偏向某个类别的模拟模型
struct AlwaysClass(usize);

#[derive(Debug, thiserror::Error)]
#[error("不会发生")]
struct Never;

impl ModelCollaborator for AlwaysClass {
    type Dataset = usize;
    type Model = ();
    type Error = Never;

    fn construct_dataset(&self, images: &Tensor, labels: &[usize]) -> Result<usize, Never> {
        assert_eq!(images.shape()[0], labels.len());
        assert_eq!(&images.shape()[1..], &[3, 32, 32]);
        Ok(labels.len())
    }

    fn construct_model(&self) -> Result<(), Never> {
        Ok(())
    }

    fn train(&self, _model: &mut (), _dataset: &usize, _epoch_count: usize) -> Result<(), Never> {
        Ok(())
    }

    fn forward(&self, _model: &(), images: &Tensor) -> Result<Tensor, Never> {
        let n = images.shape()[0];
        let mut scores = vec![0.1; n * 10];
        for s in 0..n {
            scores[s * 10 + self.0] = 0.9;
        }
        Ok(Tensor::new(&scores, &[n, 10]))
    }
}

#[test]
fn test_end_to_end_quarter_accuracy() {
    let dir = tempdir().unwrap();
    let train: [Vec<Vec<u8>>; 5] =
        std::array::from_fn(|i| vec![record(i as u8, |p| (p % 251) as u8)]);
    let test: Vec<Vec<u8>> = [3u8, 3, 7, 1]
        .iter()
        .map(|&l| record(l, |_| l * 10))
        .collect();
    let config = write_cifar_dir(dir.path(), &train, &test);

    let (train_x, train_y, test_x, test_y) = Cifar10Dataset::load(&config).unwrap().into_parts();
    assert_eq!(train_y, vec![0, 1, 2, 3, 4]);
    assert_eq!(test_y, vec![3, 3, 7, 1]);

    let train_x = reshape(train_x, 3, 32, 32).unwrap();
    let test_x = reshape(test_x, 3, 32, 32).unwrap();
    // 通道平面序：绿色通道的 (0, 0) 像素位于平铺索引 1024
    assert_eq!(train_x[[0, 1, 0, 0]], (1024 % 251) as f32);
    assert_eq!(test_x[[2, 2, 31, 31]], 70.0);

    let acc = run_experiment(&AlwaysClass(3), &train_x, &train_y, &test_x, &test_y, 10).unwrap();
    assert_abs_diff_eq!(acc, 0.25);
}

#[test]
fn test_missing_shard_is_fatal() {
    let dir = tempdir().unwrap();
    let train: [Vec<Vec<u8>>; 5] = std::array::from_fn(|_| vec![record(0, |_| 0)]);
    let config = write_cifar_dir(dir.path(), &train, &[record(0, |_| 0)]);
    std::fs::remove_file(dir.path().join("data_batch_4.bin")).unwrap();

    let err: HarnessError = Cifar10Dataset::load(&config).unwrap_err().into();
    match err {
        HarnessError::Data(DataError::DatasetNotFound { path, .. }) => {
            assert!(path.ends_with("data_batch_4.bin"));
        }
        other => panic!("应当报 DatasetNotFound，实际为 {other:?}"),
    }
}

#[test]
fn test_truncated_test_shard_is_fatal() {
    let dir = tempdir().unwrap();
    let train: [Vec<Vec<u8>>; 5] = std::array::from_fn(|_| vec![record(0, |_| 0)]);
    let mut test = record(1, |_| 1);
    test.truncate(3000);
    let config = write_cifar_dir(dir.path(), &train, &[test]);

    assert!(matches!(
        Cifar10Dataset::load(&config),
        Err(DataError::CorruptShard {
            len: 3000,
            record_size: 3073,
            ..
        })
    ));
}

#[test]
fn test_linear_classifier_on_synthetic_cifar() {
    // 类别由图像亮度决定：红色通道亮 → 0，蓝色通道亮 → 1
    let bright = |channel: usize| move |p: usize| if p / 1024 == channel { 250 } else { 5 };
    let dir = tempdir().unwrap();
    let train: [Vec<Vec<u8>>; 5] = std::array::from_fn(|_| {
        (0..8)
            .map(|i| {
                let class = i % 2;
                record(class as u8, bright(class * 2))
            })
            .collect()
    });
    let test: Vec<Vec<u8>> = [0u8, 1, 1, 0]
        .iter()
        .map(|&c| record(c, bright(c as usize * 2)))
        .collect();
    let config = write_cifar_dir(dir.path(), &train, &test);

    let (train_x, train_y, test_x, test_y) = Cifar10Dataset::load(&config).unwrap().into_parts();
    let classifier = LinearClassifier::new(LinearClassifierConfig {
        learning_rate: 0.05,
        batch_size: 8,
        ..Default::default()
    });
    let acc = run_experiment(
        &classifier,
        &reshape(train_x, 3, 32, 32).unwrap(),
        &train_y,
        &reshape(test_x, 3, 32, 32).unwrap(),
        &test_y,
        5,
    )
    .unwrap();
    assert_abs_diff_eq!(acc, 1.0);
}
