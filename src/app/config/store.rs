//! 内置配置
//!
//! 进程内只构建一次，之后以只读方式共享。

use std::sync::LazyLock;

use super::types::LotteryConfig;

static BUILTIN: LazyLock<LotteryConfig> =
    LazyLock::new(LotteryConfig::default);

/// 内置配置的访问入口
pub struct ConfigStore;

impl ConfigStore {
    /// 获取内置配置
    pub fn get() -> &'static LotteryConfig {
        &BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_values() {
        let config = ConfigStore::get();
        assert_eq!(config.title, "社區車位抽選系統");
        assert_eq!(config.total_spaces, 12);
        assert_eq!(config.big_spaces_count, 4);
        assert!(config.big_spaces_count <= config.total_spaces);
        assert_eq!(config.candidates.len(), 10);
        assert_eq!(config.second_candidates.len(), 6);
        assert_eq!(config.theme_color, "#2c3e50");
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let first = ConfigStore::get();
        let second = ConfigStore::get();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, LotteryConfig::default());
    }

    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| ConfigStore::get().clone())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), *ConfigStore::get());
        }
    }
}
