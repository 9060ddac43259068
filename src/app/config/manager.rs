//! 配置管理模块
//! 负责加载、保存和修改抽选配置

use anyhow::Context;
use std::fs;
use std::path::Path;

use super::paths::ConfigPaths;
use super::store::ConfigStore;
use super::types::LotteryConfig;
use super::validator::ConfigValidator;
use crate::app::error::types::{LotteryError, Result};

/// 配置管理器
pub struct ConfigManager {
    config_paths: ConfigPaths,
    config: LotteryConfig,
}

impl ConfigManager {
    /// 使用默认查找顺序创建配置管理器
    pub fn new() -> Result<Self> {
        Ok(Self::from_paths(ConfigPaths::new()?))
    }

    /// 使用指定的配置文件创建配置管理器
    pub fn with_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_paths(ConfigPaths::with_file(path)?))
    }

    fn from_paths(config_paths: ConfigPaths) -> Self {
        Self {
            config_paths,
            config: ConfigStore::get().clone(),
        }
    }

    /// 配置文件路径
    pub fn config_file(&self) -> &Path {
        self.config_paths.config_file()
    }

    /// 加载配置文件
    ///
    /// 文件不存在时保留内置配置并写出默认文件。
    pub fn load(&mut self) -> Result<()> {
        let config_file = self.config_paths.config_file();

        if !config_file.exists() {
            tracing::info!(
                "Config file not found, using built-in config: {:?}",
                config_file
            );
            self.config = ConfigStore::get().clone();
            return self.save();
        }

        let content = fs::read_to_string(config_file)
            .with_context(|| {
                format!("Failed to read config file: {:?}", config_file)
            })?;

        let config: LotteryConfig = toml::from_str(&content)
            .map_err(|e| LotteryError::parse(config_file, e))?;
        ConfigValidator::validate(&config)?;

        tracing::info!(
            "Loaded config {:?}: {} spaces, {} + {} candidates",
            config_file,
            config.total_spaces,
            config.candidates.len(),
            config.second_candidates.len()
        );
        self.config = config;
        Ok(())
    }

    /// 保存配置文件
    pub fn save(&self) -> Result<()> {
        self.config_paths.ensure_config_dir_exists()?;

        let content = toml::to_string_pretty(&self.config)
            .map_err(|e| {
                LotteryError::config(format!(
                    "Failed to serialize config: {e}"
                ))
            })?;

        let config_file = self.config_paths.config_file();
        fs::write(config_file, content).with_context(|| {
            format!("Failed to write config file: {:?}", config_file)
        })?;

        tracing::info!("Saved config file: {:?}", config_file);
        Ok(())
    }

    /// 获取配置
    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    /// 更新标题
    pub fn update_title(&mut self, title: String) -> Result<()> {
        ConfigValidator::validate_title(&title)?;
        self.config.title = title;
        Ok(())
    }

    /// 更新车位数量
    pub fn update_spaces(
        &mut self,
        total_spaces: u32,
        big_spaces_count: u32,
    ) -> Result<()> {
        ConfigValidator::validate_spaces(
            total_spaces,
            big_spaces_count,
        )?;
        self.config.total_spaces = total_spaces;
        self.config.big_spaces_count = big_spaces_count;
        Ok(())
    }

    /// 更新第一轮名单
    pub fn update_candidates(
        &mut self,
        candidates: Vec<String>,
    ) -> Result<()> {
        ConfigValidator::validate_candidates(
            "candidates",
            &candidates,
        )?;
        self.config.candidates = candidates;
        Ok(())
    }

    /// 更新第二轮名单
    pub fn update_second_candidates(
        &mut self,
        second_candidates: Vec<String>,
    ) -> Result<()> {
        ConfigValidator::validate_candidates(
            "second_candidates",
            &second_candidates,
        )?;
        self.config.second_candidates = second_candidates;
        Ok(())
    }

    /// 更新主题色
    pub fn update_theme_color(
        &mut self,
        theme_color: String,
    ) -> Result<()> {
        ConfigValidator::validate_theme_color(&theme_color)?;
        self.config.theme_color = theme_color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejected_update_keeps_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::with_path(
            temp_dir.path().join("lottery.toml"),
        )
        .unwrap();

        assert!(manager.update_spaces(2, 3).is_err());
        assert_eq!(manager.config().total_spaces, 12);
        assert_eq!(manager.config().big_spaces_count, 4);

        assert!(manager.update_theme_color("red".into()).is_err());
        assert_eq!(manager.config().theme_color, "#2c3e50");

        assert!(manager.update_candidates(Vec::new()).is_err());
        assert_eq!(manager.config().candidates.len(), 10);
    }

    #[test]
    fn test_accepted_updates() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::with_path(
            temp_dir.path().join("lottery.toml"),
        )
        .unwrap();

        manager.update_title("B棟車位".into()).unwrap();
        manager.update_spaces(6, 6).unwrap();
        manager
            .update_second_candidates(vec!["90-1F".into()])
            .unwrap();
        manager.update_theme_color("#fff".into()).unwrap();

        let config = manager.config();
        assert_eq!(config.title, "B棟車位");
        assert_eq!(config.standard_spaces_count(), 0);
        assert_eq!(config.second_candidates, vec!["90-1F"]);
        assert!(config.repeat_candidates().is_empty());
    }

    #[test]
    fn test_load_missing_file_restores_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::with_path(
            temp_dir.path().join("lottery.toml"),
        )
        .unwrap();
        manager.update_spaces(30, 10).unwrap();

        manager.load().unwrap();
        assert_eq!(manager.config(), ConfigStore::get());

        let written =
            std::fs::read_to_string(manager.config_file()).unwrap();
        assert!(written.contains("total_spaces = 12"));
    }
}
