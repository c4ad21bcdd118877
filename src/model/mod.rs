//! 参考模型实现
//!
//! 评估流程本身只依赖[`ModelCollaborator`](crate::harness::ModelCollaborator)；
//! 这里提供一个可直接使用的 softmax 线性分类器，供命令行程序与测试使用。

mod error;
mod linear;

#[cfg(test)]
mod tests;

pub use error::ModelError;
pub use linear::{LinearClassifier, LinearClassifierConfig, LinearModel};
