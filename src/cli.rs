//! 命令行接口

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::app::config::manager::ConfigManager;
use crate::app::config::types::{LotteryConfig, SpaceKind};
use crate::app::error::types::{LotteryError, Result};

/// 社区车位抽选配置工具
#[derive(Parser, Debug)]
#[command(name = "parking-lottery")]
#[command(about = "查看、验证和生成车位抽选配置")]
#[command(version)]
pub struct Args {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 显示配置和车位分布
    Show {
        /// 配置文件路径（默认自动查找 lottery.toml）
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// 验证配置文件
    Validate {
        /// 配置文件路径（默认自动查找 lottery.toml）
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// 写出内置配置
    Init {
        /// 配置文件路径（默认自动查找 lottery.toml）
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// 覆盖已存在的文件
        #[arg(short, long)]
        force: bool,
    },
}

fn open_manager(config: Option<PathBuf>) -> Result<ConfigManager> {
    match config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    }
}

/// 执行子命令
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Show { config } => {
            let mut manager = open_manager(config)?;
            manager.load()?;
            print!("{}", render_summary(manager.config()));
        }
        Commands::Validate { config } => {
            let mut manager = open_manager(config)?;
            if !manager.config_file().exists() {
                return Err(LotteryError::config(format!(
                    "Config file not found: {:?}",
                    manager.config_file()
                )));
            }
            manager.load()?;
            println!("OK: {}", manager.config_file().display());
        }
        Commands::Init { config, force } => {
            let manager = open_manager(config)?;
            if manager.config_file().exists() && !force {
                return Err(LotteryError::config(format!(
                    "{:?} already exists, use --force to overwrite",
                    manager.config_file()
                )));
            }
            manager.save()?;
            println!("Wrote {}", manager.config_file().display());
        }
    }
    Ok(())
}

/// 生成配置摘要文本
pub fn render_summary(config: &LotteryConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", config.title);
    let _ = writeln!(
        out,
        "Spaces: {} total, {} big, {} standard",
        config.total_spaces,
        config.big_spaces_count,
        config.standard_spaces_count()
    );

    let layout: Vec<String> = config
        .spaces()
        .map(|space| match space.kind {
            SpaceKind::Big => format!("{}*", space.number),
            SpaceKind::Standard => space.number.to_string(),
        })
        .collect();
    let _ = writeln!(out, "Layout: {}", layout.join(" "));

    let _ = writeln!(
        out,
        "Round 1 ({}): {}",
        config.candidates.len(),
        config.candidates.join(", ")
    );
    let _ = writeln!(
        out,
        "Round 2 ({}): {}",
        config.second_candidates.len(),
        config.second_candidates.join(", ")
    );

    let repeats = config.repeat_candidates();
    if !repeats.is_empty() {
        let _ = writeln!(out, "In both rounds: {}", repeats.join(", "));
    }
    let _ = writeln!(out, "Theme: {}", config.theme_color);
    out
}
