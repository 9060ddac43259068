//! 通用工具函数

/// 校验与辅助函数
pub mod helpers;
