//! 配置验证模块
//!
//! 负责验证抽选配置的各项参数

use crate::app::config::types::{LotteryConfig, ThemeColor};
use crate::app::error::types::{LotteryError, Result};
use crate::utils::helpers::find_duplicates;

/// 配置验证器
pub struct ConfigValidator;

impl ConfigValidator {
    /// 验证整份配置，返回遇到的第一个错误
    pub fn validate(config: &LotteryConfig) -> Result<()> {
        Self::validate_title(&config.title)?;
        Self::validate_spaces(
            config.total_spaces,
            config.big_spaces_count,
        )?;
        Self::validate_candidates(
            "candidates",
            &config.candidates,
        )?;
        Self::validate_candidates(
            "second_candidates",
            &config.second_candidates,
        )?;
        Self::validate_theme_color(&config.theme_color)?;
        Ok(())
    }

    /// 验证标题
    pub fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(LotteryError::validation(
                "title",
                "Title cannot be empty",
            ));
        }
        Ok(())
    }

    /// 验证车位数量
    pub fn validate_spaces(
        total_spaces: u32,
        big_spaces_count: u32,
    ) -> Result<()> {
        if big_spaces_count > total_spaces {
            return Err(LotteryError::validation(
                "big_spaces_count",
                format!(
                    "Big spaces ({big_spaces_count}) exceed total spaces ({total_spaces})"
                ),
            ));
        }
        Ok(())
    }

    /// 验证候选名单，重复条目只记录警告
    pub fn validate_candidates(
        field: &str,
        candidates: &[String],
    ) -> Result<()> {
        if candidates.is_empty() {
            return Err(LotteryError::validation(
                field,
                "Candidate list cannot be empty",
            ));
        }

        if let Some(index) =
            candidates.iter().position(|c| c.trim().is_empty())
        {
            return Err(LotteryError::validation(
                field,
                format!("Entry #{} is blank", index + 1),
            ));
        }

        let duplicates = find_duplicates(candidates);
        if !duplicates.is_empty() {
            tracing::warn!(
                "{} contains duplicate entries: {:?}",
                field,
                duplicates
            );
        }
        Ok(())
    }

    /// 验证主题色
    pub fn validate_theme_color(color: &str) -> Result<()> {
        ThemeColor::parse(color).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(config: &LotteryConfig) -> Option<String> {
        ConfigValidator::validate(config)
            .err()
            .and_then(|e| e.field().map(str::to_string))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&LotteryConfig::default())
            .is_ok());
    }

    #[test]
    fn test_blank_title() {
        let config = LotteryConfig {
            title: "   ".to_string(),
            ..LotteryConfig::default()
        };
        assert_eq!(field_of(&config).as_deref(), Some("title"));
    }

    #[test]
    fn test_big_spaces_exceed_total() {
        let config = LotteryConfig {
            total_spaces: 3,
            big_spaces_count: 4,
            ..LotteryConfig::default()
        };
        assert_eq!(
            field_of(&config).as_deref(),
            Some("big_spaces_count")
        );
    }

    #[test]
    fn test_boundary_space_counts() {
        assert!(ConfigValidator::validate_spaces(0, 0).is_ok());
        assert!(ConfigValidator::validate_spaces(12, 12).is_ok());
        assert!(ConfigValidator::validate_spaces(12, 0).is_ok());
    }

    #[test]
    fn test_empty_candidate_lists() {
        let config = LotteryConfig {
            candidates: Vec::new(),
            ..LotteryConfig::default()
        };
        assert_eq!(field_of(&config).as_deref(), Some("candidates"));

        let config = LotteryConfig {
            second_candidates: Vec::new(),
            ..LotteryConfig::default()
        };
        assert_eq!(
            field_of(&config).as_deref(),
            Some("second_candidates")
        );
    }

    #[test]
    fn test_blank_candidate_entry() {
        let candidates =
            vec!["70-2F".to_string(), " ".to_string()];
        let err = ConfigValidator::validate_candidates(
            "candidates",
            &candidates,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Entry #2 is blank"));
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let candidates =
            vec!["70-2F".to_string(), "70-2F".to_string()];
        assert!(ConfigValidator::validate_candidates(
            "candidates",
            &candidates
        )
        .is_ok());
    }

    #[test]
    fn test_invalid_theme_color() {
        let config = LotteryConfig {
            theme_color: "#12345".to_string(),
            ..LotteryConfig::default()
        };
        assert_eq!(
            field_of(&config).as_deref(),
            Some("theme_color")
        );
    }
}
