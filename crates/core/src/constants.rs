//! Constants used throughout the FundLens core crate.
//!
//! Default vocabularies, icons and CSS class names live here so the renderer, the chart
//! helpers and the configuration defaults stay consistent.

/// Section keyword for the market overview card.
pub const SECTION_MARKET_OVERVIEW: &str = "行情综述";

/// Section keyword for the AI forecast card.
pub const SECTION_AI_FORECAST: &str = "AI 预判";

/// Section keyword for the recommendation card.
pub const SECTION_RECOMMEND: &str = "推荐关注";

/// Section keyword for the avoid-warning card.
pub const SECTION_AVOID: &str = "规避警告";

/// Section keyword for the strategy advice card.
pub const SECTION_STRATEGY: &str = "策略建议";

/// Icon for generic `### ` headers.
pub const H3_ICON: &str = "🚀";

/// Icon for generic `## ` headers.
pub const H2_ICON: &str = "🌎";

/// Macro terms highlighted wherever they appear.
pub const HOT_KEYWORDS: &[&str] = &["降准", "加息", "宽松", "紧缩", "回升", "风险", "反弹", "利好"];

/// Sector and theme names turned into clickable search tags.
pub const ENTITY_TERMS: &[&str] = &[
    "半导体", "新能源", "白酒", "人工智能", "AI", "红利", "医疗", "消费", "科技", "电子", "军工",
    "地产", "金融", "光伏", "储能", "电池", "量化", "通胀",
];

/// Global hook invoked with the clicked entity term.
pub const SEARCH_HOOK: &str = "window.appSearch";

/// Glyph shown in front of an entity tag.
pub const ENTITY_GLYPH: &str = "🏷️";

/// Upper bound on the size of a rendered fragment.
pub const MAX_OUTPUT_BYTES: usize = 4 * 1024 * 1024;

pub const CONTAINER_CLASS: &str = "strategy-container";
pub const CARD_CLASS: &str = "strategy-card";
pub const CARD_TITLE_CLASS: &str = "strategy-title";
pub const CARD_CONTENT_CLASS: &str = "strategy-content";
pub const HIGHLIGHT_CLASS: &str = "highlight-gold";
pub const ENTITY_CLASS: &str = "entity-link";

/// Series colour for adverse market events.
pub const EVENT_RED: &str = "#ef4444";

/// Series colour for market bottoms.
pub const EVENT_GREEN: &str = "#10b981";

/// Sentiment colour between fear and neutral.
pub const AMBER: &str = "#f59e0b";
