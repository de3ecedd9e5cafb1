//! Small presentation helpers shared by the card fragments and the dashboards.

use crate::constants::{AMBER, EVENT_GREEN, EVENT_RED};

const SECTOR_ICONS: &[(&str, &str)] = &[
    ("电子", "💻"),
    ("科技", "🚀"),
    ("新能源", "🔋"),
    ("半导体", "💾"),
    ("白酒", "🍶"),
    ("消费", "🛒"),
    ("医疗", "🏥"),
    ("医药", "💊"),
    ("金融", "🏦"),
    ("银行", "🪙"),
    ("保险", "🛡️"),
    ("地产", "🏢"),
    ("军工", "🔫"),
    ("煤炭", "🪵"),
    ("钢铁", "⛓️"),
    ("有色", "⛏️"),
    ("农业", "🚜"),
    ("传媒", "📺"),
    ("教育", "📚"),
    ("环保", "♻️"),
];

const DEFAULT_SECTOR_ICON: &str = "📍";

/// CSS class for a fund grade such as `"A+"` or `"B"`.
///
/// Only the first character counts. A missing grade is treated as average.
pub fn score_class(grade: Option<&str>) -> &'static str {
    match grade.and_then(|g| g.chars().next()) {
        None => "score-C",
        Some('A') => "score-A",
        Some('B') => "score-B",
        Some('C') => "score-C",
        Some(_) => "score-D",
    }
}

/// Fear/greed wording for a 0-100 sentiment index.
pub fn sentiment_label(value: f64) -> &'static str {
    if value < 20.0 {
        "极度恐慌"
    } else if value < 40.0 {
        "恐慌"
    } else if value < 60.0 {
        "中性"
    } else if value < 80.0 {
        "贪婪"
    } else {
        "极度贪婪"
    }
}

pub fn sentiment_color(value: f64) -> &'static str {
    if value < 40.0 {
        EVENT_RED
    } else if value < 60.0 {
        AMBER
    } else {
        EVENT_GREEN
    }
}

/// Icon for an exact sector name, with a pin for anything unknown.
pub fn sector_icon(sector: &str) -> &'static str {
    SECTOR_ICONS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_SECTOR_ICON)
}
