//! Renderer configuration.
//!
//! The vocabularies that drive sectioning, highlighting and entity tagging are explicit data
//! rather than module-level globals. A `RendererConfig` is resolved once at process startup
//! (defaults, or a YAML file) and then handed to a `CardRenderer`; nothing here reads the
//! environment during rendering.

use crate::constants::{
    ENTITY_GLYPH, ENTITY_TERMS, H2_ICON, H3_ICON, HOT_KEYWORDS, MAX_OUTPUT_BYTES, SEARCH_HOOK,
    SECTION_AI_FORECAST, SECTION_AVOID, SECTION_MARKET_OVERVIEW, SECTION_RECOMMEND,
    SECTION_STRATEGY,
};
use crate::render::CardStyle;
use crate::validation::{validate_search_hook, validate_term};
use crate::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One entry of the ordered section table: a keyword that opens a card, the icon shown in
/// the card title, and the style the keyword implies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRule {
    pub keyword: String,
    pub icon: String,
    #[serde(default)]
    pub style: CardStyle,
}

impl SectionRule {
    fn new(keyword: &str, icon: &str, style: CardStyle) -> Self {
        Self {
            keyword: keyword.to_owned(),
            icon: icon.to_owned(),
            style,
        }
    }
}

/// Renderer configuration resolved at startup.
///
/// Every field has a default, so a YAML file only needs to list what it overrides:
///
/// ```yaml
/// entities: ["半导体", "新能源"]
/// search_hook: app.search
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    sections: Vec<SectionRule>,
    h3_icon: String,
    h2_icon: String,
    hot_keywords: Vec<String>,
    entities: Vec<String>,
    search_hook: String,
    entity_glyph: String,
    max_output_bytes: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionRule::new(SECTION_MARKET_OVERVIEW, "🌏", CardStyle::Plain),
                SectionRule::new(SECTION_AI_FORECAST, "🤖", CardStyle::Highlight),
                SectionRule::new(SECTION_RECOMMEND, "✅", CardStyle::Recommend),
                SectionRule::new(SECTION_AVOID, "⚠️", CardStyle::Avoid),
                SectionRule::new(SECTION_STRATEGY, "💡", CardStyle::Plain),
            ],
            h3_icon: H3_ICON.to_owned(),
            h2_icon: H2_ICON.to_owned(),
            hot_keywords: HOT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            entities: ENTITY_TERMS.iter().map(|s| s.to_string()).collect(),
            search_hook: SEARCH_HOOK.to_owned(),
            entity_glyph: ENTITY_GLYPH.to_owned(),
            max_output_bytes: MAX_OUTPUT_BYTES,
        }
    }
}

impl RendererConfig {
    /// Parses and validates a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ConfigParse` for malformed YAML or unknown keys, and
    /// `RenderError::InvalidConfig` if the parsed values fail validation.
    pub fn from_yaml_str(yaml: &str) -> RenderResult<Self> {
        let cfg: Self = serde_yaml::from_str(yaml).map_err(RenderError::ConfigParse)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a YAML configuration file.
    pub fn load(path: &Path) -> RenderResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(RenderError::ConfigRead)?;
        Self::from_yaml_str(&yaml)
    }

    /// Replaces the output size limit.
    pub fn with_max_output_bytes(mut self, limit: usize) -> RenderResult<Self> {
        self.max_output_bytes = limit;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the entity vocabulary. Order is match precedence.
    pub fn with_entities(mut self, entities: Vec<String>) -> RenderResult<Self> {
        self.entities = entities;
        self.validate()?;
        Ok(self)
    }

    /// Checks every vocabulary term, the section table and the search hook.
    pub fn validate(&self) -> RenderResult<()> {
        let mut seen = HashSet::new();
        for rule in &self.sections {
            validate_term("section", &rule.keyword)?;
            validate_term("section icon", &rule.icon)?;
            if !seen.insert(rule.keyword.as_str()) {
                return Err(RenderError::InvalidConfig(format!(
                    "duplicate section keyword `{}`",
                    rule.keyword
                )));
            }
        }

        validate_term("header icon", &self.h3_icon)?;
        validate_term("header icon", &self.h2_icon)?;

        for term in &self.hot_keywords {
            validate_term("hot keyword", term)?;
        }
        for term in &self.entities {
            validate_term("entity", term)?;
        }

        if !self.entity_glyph.is_empty() {
            validate_term("entity glyph", &self.entity_glyph)?;
        }

        validate_search_hook(&self.search_hook)?;

        if self.max_output_bytes == 0 {
            return Err(RenderError::InvalidConfig(
                "max_output_bytes must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    pub fn sections(&self) -> &[SectionRule] {
        &self.sections
    }

    pub fn h3_icon(&self) -> &str {
        &self.h3_icon
    }

    pub fn h2_icon(&self) -> &str {
        &self.h2_icon
    }

    pub fn hot_keywords(&self) -> &[String] {
        &self.hot_keywords
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn search_hook(&self) -> &str {
        &self.search_hook
    }

    pub fn entity_glyph(&self) -> &str {
        &self.entity_glyph
    }

    pub fn max_output_bytes(&self) -> usize {
        self.max_output_bytes
    }

    /// Classifies a card title: the first style, in priority order Recommend, Avoid,
    /// Highlight, whose keyword occurs anywhere in the title; `Plain` otherwise.
    pub fn classify(&self, title: &str) -> CardStyle {
        [CardStyle::Recommend, CardStyle::Avoid, CardStyle::Highlight]
            .into_iter()
            .find(|style| {
                self.sections
                    .iter()
                    .any(|rule| rule.style == *style && title.contains(rule.keyword.as_str()))
            })
            .unwrap_or(CardStyle::Plain)
    }
}

/// Resolves the renderer configuration without reading environment variables.
///
/// `None` yields the built-in defaults; otherwise the file at `path` is loaded.
pub fn resolve_renderer_config(path: Option<PathBuf>) -> RenderResult<RendererConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading renderer configuration from {}", path.display());
            RendererConfig::load(&path)
        }
        None => Ok(RendererConfig::default()),
    }
}
