//! 错误类型定义

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum LotteryError {
    /// 文件读写错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// 配置文件解析错误
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 验证错误
    #[error("Validation failed: {field} - {message}")]
    Validation { field: String, message: String },
}

impl From<anyhow::Error> for LotteryError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_error) =
            err.downcast_ref::<std::io::Error>()
        {
            return LotteryError::Io(std::io::Error::new(
                io_error.kind(),
                err.to_string(),
            ));
        }
        LotteryError::config(err.to_string())
    }
}

impl LotteryError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 创建解析错误
    pub fn parse(
        path: impl Into<PathBuf>,
        source: toml::de::Error,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// 创建验证错误
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 验证错误对应的字段名
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, LotteryError>;
