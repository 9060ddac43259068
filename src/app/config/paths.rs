//! 配置路径管理模块
//! 负责定位抽选配置文件

use crate::app::error::types::{LotteryError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "lottery.toml";

/// 用户配置目录下的子目录名
const APP_DIR_NAME: &str = "parking-lottery";

/// 配置路径管理器
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    config_file: PathBuf,
}

impl ConfigPaths {
    /// 按默认顺序查找配置文件
    ///
    /// 依次查找工作目录、可执行文件目录和用户配置目录，
    /// 都不存在时使用工作目录下的路径。
    ///
    /// # 示例
    /// ```
    /// use parking_lottery::app::config::paths::ConfigPaths;
    /// let paths = ConfigPaths::new().unwrap();
    /// assert!(paths.config_file().to_string_lossy().contains("lottery.toml"));
    /// ```
    pub fn new() -> Result<Self> {
        let config_file = Self::find_config_file()?;
        Ok(Self { config_file })
    }

    /// 使用指定的配置文件路径，相对路径按工作目录展开
    pub fn with_file(path: impl AsRef<Path>) -> Result<Self> {
        let config_file = path
            .as_ref()
            .absolutize()
            .map_err(|e| {
                LotteryError::config(format!(
                    "Failed to resolve config path {:?}: {}",
                    path.as_ref(),
                    e
                ))
            })?
            .into_owned();

        tracing::debug!("Using explicit config path: {:?}", config_file);
        Ok(Self { config_file })
    }

    /// 获取配置文件路径
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// 确保配置文件所在目录存在
    pub fn ensure_config_dir_exists(&self) -> Result<()> {
        if let Some(dir) = self.config_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
                tracing::debug!("Created config directory: {:?}", dir);
            }
        }
        Ok(())
    }

    fn find_config_file() -> Result<PathBuf> {
        let current_dir = std::env::current_dir()
            .map_err(|e| {
                LotteryError::config(format!(
                    "Failed to get current directory: {}",
                    e
                ))
            })?;

        let fallbacks = [
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)),
        ];

        Ok(Self::locate(&current_dir, &fallbacks))
    }

    /// 在工作目录和备选目录中查找配置文件
    ///
    /// 工作目录优先，其次按顺序查找备选目录，都不存在时返回工作目录下的路径。
    fn locate(current_dir: &Path, fallbacks: &[Option<PathBuf>]) -> PathBuf {
        let default_file = current_dir.join(CONFIG_FILE_NAME);

        if default_file.exists() {
            tracing::info!("Using config file path: {:?}", default_file);
            return default_file;
        }

        for dir in fallbacks.iter().flatten() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::info!("Found config file: {:?}", candidate);
                return candidate;
            }
        }

        tracing::info!("Using config file path: {:?}", default_file);
        default_file
    }
}
