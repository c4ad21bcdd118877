//! CIFAR-10 训练 + 评估命令行程序
//!
//! ```bash
//! cargo run --release -- resources/cifar10/cifar-10-batches-bin 10
//! ```
//! 准确率（浮点数）是标准输出上唯一的内容，日志写到标准错误，级别由`RUST_LOG`控制。

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cifar_harness::data::{Cifar10Dataset, CifarConfig, DataError};
use cifar_harness::harness::{reshape, run_experiment};
use cifar_harness::model::{LinearClassifier, LinearClassifierConfig};

#[derive(Parser, Debug)]
#[command(about = "在 CIFAR-10 上训练参考线性分类器并输出测试集准确率")]
struct Args {
    /// CIFAR-10 二进制分片所在目录；缺省时取配置文件中的 root，
    /// 没有配置文件时为 resources/cifar10/cifar-10-batches-bin
    data_dir: Option<PathBuf>,

    /// 训练轮数
    #[arg(default_value_t = 10)]
    epochs: usize,

    /// JSON 格式的数据集配置（目录、文件名、图像尺寸等），显式给出 DATA_DIR 时覆盖其中的 root
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    learning_rate: Option<f32>,

    #[arg(long)]
    batch_size: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// 配置文件（缺省为标准布局）+ 命令行给出的数据目录
fn resolve_config(
    config_path: Option<&Path>,
    data_dir: Option<&Path>,
) -> Result<CifarConfig, DataError> {
    let config = match config_path {
        Some(path) => CifarConfig::from_json_file(path)?,
        None => CifarConfig::default(),
    };
    Ok(match data_dir {
        Some(dir) => config.with_root(dir),
        None => config,
    })
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.data_dir.as_deref())?;

    let dataset = Cifar10Dataset::load(&config)?;
    let [channels, height, width] = dataset.image_shape();
    let (train_images, train_labels, test_images, test_labels) = dataset.into_parts();
    info!("train-images: {:?}", train_images.shape());
    info!("test-images: {:?}", test_images.shape());

    let train_images = reshape(train_images, channels, height, width)?;
    let test_images = reshape(test_images, channels, height, width)?;

    let defaults = LinearClassifierConfig::default();
    let classifier = LinearClassifier::new(LinearClassifierConfig {
        input_size: channels * height * width,
        num_classes: config.num_classes,
        learning_rate: args.learning_rate.unwrap_or(defaults.learning_rate),
        batch_size: args.batch_size.unwrap_or(defaults.batch_size),
        seed: args.seed.unwrap_or(defaults.seed),
        ..defaults
    });

    let accuracy = run_experiment(
        &classifier,
        &train_images,
        &train_labels,
        &test_images,
        &test_labels,
        args.epochs,
    )?;
    info!("test accuracy: {:.2}%", accuracy * 100.0);
    println!("{accuracy}");
    Ok(())
}
