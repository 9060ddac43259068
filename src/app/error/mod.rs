//! 统一错误处理

/// 错误类型定义
pub mod types;
