//! 配置管理模块
//!
//! 提供抽选配置的内置值、加载、保存和验证功能

pub mod manager;
pub mod paths;
pub mod store;
/// 配置类型定义
pub mod types;
pub mod validator;
