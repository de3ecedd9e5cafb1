//! Card rendering for AI-generated market commentary.
//!
//! `CardRenderer` turns loosely markdown-formatted text into an HTML fragment of "strategy
//! cards". The pipeline is:
//!
//! 1. segment the text into titled sections (see [`sections`]);
//! 2. run the inline passes over each card body, the lead block, or the unsectioned text:
//!    bold spans, hot-keyword highlights, entity tags, then bullets and line breaks;
//! 3. wrap each section in a card and the whole fragment in one container.
//!
//! The output is meant to be produced exactly once per raw text. Rendering already-rendered
//! HTML again wraps it again. The renderer does not escape HTML found in its input; callers
//! embedding the fragment are responsible for sanitisation.

mod blocks;
mod inline;
mod sections;

pub use blocks::LineBlocks;
pub use inline::{BoldSpans, EntityTags, HotKeywords};

use crate::config::RendererConfig;
use crate::constants::{CARD_CLASS, CARD_CONTENT_CLASS, CARD_TITLE_CLASS, CONTAINER_CLASS};
use crate::{RenderError, RenderResult};
use sections::{Segments, SectionTitle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Visual classification of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Plain,
    Recommend,
    Avoid,
    Highlight,
}

impl CardStyle {
    /// CSS modifier class appended to the card class, if any.
    pub fn css_modifier(self) -> Option<&'static str> {
        match self {
            CardStyle::Plain => None,
            CardStyle::Recommend => Some("recommend"),
            CardStyle::Avoid => Some("avoid"),
            CardStyle::Highlight => Some("highlight"),
        }
    }
}

/// A transformation applied to a block of card content.
///
/// Passes run in order over each card body (or over the whole text when no section was
/// found). An error from any pass makes [`CardRenderer::render`] fall back to plain text.
pub trait InlinePass: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn apply(&self, html: &str, cfg: &RendererConfig) -> RenderResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Card<'a> {
    title: SectionTitle,
    icon: &'a str,
    style: CardStyle,
    body: String,
}

impl Card<'_> {
    fn write_html(&self, out: &mut String) {
        out.push_str("<div class=\"");
        out.push_str(CARD_CLASS);
        if let Some(modifier) = self.style.css_modifier() {
            out.push(' ');
            out.push_str(modifier);
        }
        out.push_str("\"><div class=\"");
        out.push_str(CARD_TITLE_CLASS);
        out.push_str("\">");
        out.push_str(self.icon);
        out.push(' ');
        out.push_str(self.title.as_str());
        out.push_str("</div><div class=\"");
        out.push_str(CARD_CONTENT_CLASS);
        out.push_str("\">");
        out.push_str(&self.body);
        out.push_str("</div></div>");
    }
}

/// Stateless text-to-HTML card renderer.
///
/// Holds only immutable configuration and the pass list, so one instance can be shared
/// across threads behind an `Arc`.
#[derive(Clone)]
pub struct CardRenderer {
    cfg: Arc<RendererConfig>,
    passes: Vec<Arc<dyn InlinePass>>,
}

impl std::fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRenderer")
            .field("cfg", &self.cfg)
            .field(
                "passes",
                &self.passes.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::from_validated(RendererConfig::default())
    }
}

impl CardRenderer {
    /// Creates a renderer with the built-in pass list.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidConfig` if the configuration fails validation.
    pub fn new(cfg: RendererConfig) -> RenderResult<Self> {
        cfg.validate()?;
        Ok(Self::from_validated(cfg))
    }

    fn from_validated(cfg: RendererConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            passes: vec![
                Arc::new(BoldSpans),
                Arc::new(HotKeywords),
                Arc::new(EntityTags),
                Arc::new(LineBlocks),
            ],
        }
    }

    /// Appends a pass that runs after the built-in ones.
    pub fn with_pass(mut self, pass: impl InlinePass + 'static) -> Self {
        self.passes.push(Arc::new(pass));
        self
    }

    pub fn config(&self) -> &RendererConfig {
        &self.cfg
    }

    /// Renders `text` into a card fragment.
    ///
    /// Absent or empty input yields an empty string. Never fails: on any internal error the
    /// error is logged and the original text is returned with each `\n` replaced by `<br>`.
    pub fn render(&self, text: Option<&str>) -> String {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return String::new();
        };

        match self.try_render(text) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("card rendering failed, falling back to plain text: {}", e);
                fallback(text)
            }
        }
    }

    /// Renders `text`, surfacing internal errors instead of falling back.
    ///
    /// # Errors
    ///
    /// Returns the first pass error, or `RenderError::OutputTooLarge` when the fragment
    /// exceeds the configured limit.
    pub fn try_render(&self, text: &str) -> RenderResult<String> {
        let text = text.trim();
        let mut html = String::new();

        match sections::segment(text, &self.cfg) {
            Segments::Unsectioned => {
                tracing::debug!("no sections found, rendering a single block");
                html.push_str(&self.decorate(text)?);
            }
            Segments::Sectioned { lead, sections } => {
                tracing::debug!("rendering {} card(s)", sections.len());
                if let Some(lead) = lead {
                    html.push_str(&self.decorate(lead.trim())?);
                }
                for section in sections {
                    let card = Card {
                        style: self.cfg.classify(section.title.as_str()),
                        body: self.decorate(section.body.trim())?,
                        title: section.title,
                        icon: section.icon,
                    };
                    card.write_html(&mut html);
                }
            }
        }

        let out = format!("<div class=\"{CONTAINER_CLASS}\">{html}</div>");
        if out.len() > self.cfg.max_output_bytes() {
            return Err(RenderError::OutputTooLarge {
                limit: self.cfg.max_output_bytes(),
                actual: out.len(),
            });
        }

        Ok(out)
    }

    fn decorate(&self, block: &str) -> RenderResult<String> {
        self.passes
            .iter()
            .try_fold(block.to_owned(), |acc, pass| pass.apply(&acc, &self.cfg))
    }
}

/// Degraded output: the text with each newline turned into a `<br>`.
pub fn fallback(text: &str) -> String {
    text.replace('\n', "<br>")
}
