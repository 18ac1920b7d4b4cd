use serde::Serialize;
use subs_logging::subs_warn;

use crate::Platform;

/// Shown in a widget whose markup could not be read.
pub const LOAD_ERROR_TEXT: &str = "Ошибка загрузки данных";

const GROUP_SEPARATOR: char = '\u{a0}';

/// Russian digit grouping: `1234567` -> `1 234 567` with non-breaking spaces.
pub fn format_number(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3 * 2);
    for (index, ch) in raw.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Share of `value` in `total` as a percentage with one decimal place.
pub fn calculate_percentage(value: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", value as f64 / total as f64 * 100.0)
}

/// Reads a follower count as the page prints it.
///
/// Thousands commas and surrounding whitespace are ignored and parsing stops
/// at the first non-digit, so `"1,204 followers"` is 1204. Anything without
/// leading digits reads as 0, and negative values are clamped to 0.
pub fn parse_count(text: &str) -> u64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let digits: String = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    if negative {
        subs_warn!("negative count {:?} clamped to 0", text);
        return 0;
    }
    match digits.parse::<u64>() {
        Ok(value) => value,
        Err(_) => {
            subs_warn!("count {:?} does not fit, clamped to {}", text, u64::MAX);
            u64::MAX
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformShare {
    pub platform: Platform,
    pub count: u64,
    pub formatted_count: String,
    pub percentage: String,
}

/// Each platform's share of the combined audience, in input order.
pub fn platform_shares(counts: &[(Platform, u64)]) -> Vec<PlatformShare> {
    let total = counts
        .iter()
        .fold(0u64, |acc, (_, count)| acc.saturating_add(*count));
    counts
        .iter()
        .map(|(platform, count)| PlatformShare {
            platform: *platform,
            count: *count,
            formatted_count: format_number(*count),
            percentage: calculate_percentage(*count, total),
        })
        .collect()
}
