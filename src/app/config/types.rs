use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app::error::types::{LotteryError, Result};
use crate::utils::helpers::parse_hex_color;

/// 车位抽选配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryConfig {
    /// 显示标题
    pub title: String,
    /// 车位总数
    pub total_spaces: u32,
    /// 大车位数量，编号最前面的这些车位为大车位
    pub big_spaces_count: u32,
    /// 第一轮参与抽选的住户
    pub candidates: Vec<String>,
    /// 第二轮参与抽选的住户，可与第一轮重叠
    pub second_candidates: Vec<String>,
    /// 主题色
    pub theme_color: String,
}

/// 车位类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    /// 大车位
    Big,
    /// 普通车位
    Standard,
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceKind::Big => write!(f, "big"),
            SpaceKind::Standard => write!(f, "standard"),
        }
    }
}

/// 单个车位，编号从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingSpace {
    /// 车位编号
    pub number: u32,
    /// 车位类型
    pub kind: SpaceKind,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            title: "社區車位抽選系統".to_string(),
            total_spaces: 12,
            big_spaces_count: 4,
            candidates: to_owned_list(&[
                "70-2F", "70-3F", "70-4F", "72-5F", "72-6F",
                "74-8F", "74-9F", "76-10F", "76-11F", "78-12F",
            ]),
            second_candidates: to_owned_list(&[
                "70-2F", "72-5F", "74-8F", "80-2F", "80-5F",
                "82-7F",
            ]),
            theme_color: "#2c3e50".to_string(),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl LotteryConfig {
    /// 普通车位数量
    pub fn standard_spaces_count(&self) -> u32 {
        self.total_spaces
            .saturating_sub(self.big_spaces_count)
    }

    /// 查询指定编号车位的类型，超出范围返回 `None`
    pub fn space_kind(&self, number: u32) -> Option<SpaceKind> {
        if number == 0 || number > self.total_spaces {
            return None;
        }
        if number <= self.big_spaces_count {
            Some(SpaceKind::Big)
        } else {
            Some(SpaceKind::Standard)
        }
    }

    /// 按编号顺序列出全部车位
    pub fn spaces(
        &self,
    ) -> impl Iterator<Item = ParkingSpace> + '_ {
        (1..=self.total_spaces).filter_map(move |number| {
            self.space_kind(number)
                .map(|kind| ParkingSpace { number, kind })
        })
    }

    /// 两轮都参与的住户，按第二轮顺序
    pub fn repeat_candidates(&self) -> Vec<&str> {
        self.second_candidates
            .iter()
            .filter(|c| self.candidates.contains(c))
            .map(String::as_str)
            .collect()
    }

    /// 解析主题色
    pub fn theme(&self) -> Result<ThemeColor> {
        ThemeColor::parse(&self.theme_color)
    }
}

/// 解析后的主题色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor {
    rgb: [u8; 3],
}

impl ThemeColor {
    /// 从 `#rgb` 或 `#rrggbb` 解析
    pub fn parse(value: &str) -> Result<Self> {
        let rgb = parse_hex_color(value).map_err(|e| {
            LotteryError::validation("theme_color", e.to_string())
        })?;
        Ok(Self { rgb })
    }

    /// 红、绿、蓝三个通道
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
