//! 社区车位抽选配置库
//!
//! 保存、加载并验证车位抽选所需的参数：标题、车位数量、
//! 两轮候选名单以及主题色。
//!
//! ## 使用示例
//!
//! ```no_run
//! use parking_lottery::app::config::manager::ConfigManager;
//!
//! let mut config_manager = ConfigManager::new()?;
//! config_manager.load()?;
//!
//! let config = config_manager.config();
//! println!("{}: {} spaces", config.title, config.total_spaces);
//! # Ok::<(), parking_lottery::LotteryError>(())
//! ```

pub mod app;
pub mod cli;
pub mod utils;

// 重新导出主要功能
pub use app::config::manager::ConfigManager;
pub use app::config::store::ConfigStore;
pub use app::config::types::{
    LotteryConfig, ParkingSpace, SpaceKind, ThemeColor,
};
pub use app::config::validator::ConfigValidator;
pub use app::error::types::{LotteryError, Result};
