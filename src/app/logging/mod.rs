//! 日志系统

pub mod setup;
