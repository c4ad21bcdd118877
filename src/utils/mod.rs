//! # 常用接口模块
//!
//! 目前仅包含单元测试用的宏
