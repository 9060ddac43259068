//! 通用校验与列表辅助函数

use anyhow::{Context, Result};
use std::collections::HashSet;

/// 解析十六进制颜色，支持 `#rgb` 与 `#rrggbb`
pub fn parse_hex_color(value: &str) -> Result<[u8; 3]> {
    let digits = value.strip_prefix('#').with_context(|| {
        format!("Color must start with '#': {value}")
    })?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Color contains non-hex digits: {value}");
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => anyhow::bail!(
            "Color must have 3 or 6 hex digits: {value}"
        ),
    };

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let pair = &expanded[i * 2..i * 2 + 2];
        *channel = u8::from_str_radix(pair, 16)
            .with_context(|| {
                format!("Invalid color channel '{pair}' in {value}")
            })?;
    }
    Ok(rgb)
}

/// 找出列表中重复出现的条目（按首次重复的顺序）
pub fn find_duplicates(items: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    items
        .iter()
        .map(String::as_str)
        .filter(|item| {
            !seen.insert(*item) && reported.insert(*item)
        })
        .collect()
}
