//! Inline decoration passes: bold spans, hot-keyword highlights and entity tags.
//!
//! The vocabulary sweeps skip an occurrence when the character right before it is `>` or `"`,
//! or when the next angle bracket after it is `>` (the occurrence sits inside a tag). This is
//! what keeps an already-wrapped term from being wrapped again by a later sweep.

use super::InlinePass;
use crate::config::RendererConfig;
use crate::constants::{ENTITY_CLASS, HIGHLIGHT_CLASS};
use crate::{RenderError, RenderResult};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// `**X**` becomes a highlight span around `X`. Non-greedy, single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoldSpans;

/// Wraps every unguarded hot keyword in a highlight span.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotKeywords;

/// Wraps every unguarded entity term in a clickable search tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityTags;

fn bold_regex() -> RenderResult<&'static Regex> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*"))
        .as_ref()
        .map_err(|e| RenderError::Pass {
            pass: "bold",
            reason: e.to_string(),
        })
}

impl InlinePass for BoldSpans {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn apply(&self, html: &str, _cfg: &RendererConfig) -> RenderResult<String> {
        let re = bold_regex()?;
        Ok(re
            .replace_all(html, |caps: &Captures<'_>| highlight(&caps[1]))
            .into_owned())
    }
}

impl InlinePass for HotKeywords {
    fn name(&self) -> &'static str {
        "hot-keywords"
    }

    fn apply(&self, html: &str, cfg: &RendererConfig) -> RenderResult<String> {
        Ok(cfg
            .hot_keywords()
            .iter()
            .fold(html.to_owned(), |acc, term| wrap_unguarded(&acc, term, highlight)))
    }
}

impl InlinePass for EntityTags {
    fn name(&self) -> &'static str {
        "entity-tags"
    }

    fn apply(&self, html: &str, cfg: &RendererConfig) -> RenderResult<String> {
        Ok(cfg.entities().iter().fold(html.to_owned(), |acc, term| {
            wrap_unguarded(&acc, term, |matched| {
                entity_tag(matched, cfg.search_hook(), cfg.entity_glyph())
            })
        }))
    }
}

pub(crate) fn highlight(text: &str) -> String {
    format!("<span class=\"{HIGHLIGHT_CLASS}\">{text}</span>")
}

pub(crate) fn entity_tag(term: &str, hook: &str, glyph: &str) -> String {
    let label = if glyph.is_empty() {
        term.to_owned()
    } else {
        format!("{glyph} {term}")
    };
    format!("<span class=\"{ENTITY_CLASS}\" onclick=\"{hook}('{term}')\">{label}</span>")
}

/// Replaces each non-overlapping occurrence of `term` in `html` with `wrap(term)`, leaving
/// guarded occurrences untouched.
pub(crate) fn wrap_unguarded(html: &str, term: &str, wrap: impl Fn(&str) -> String) -> String {
    if term.is_empty() {
        return html.to_owned();
    }

    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for (start, matched) in html.match_indices(term) {
        let end = start + matched.len();
        if is_guarded(html, start, end) {
            continue;
        }
        out.push_str(&html[last..start]);
        out.push_str(&wrap(matched));
        last = end;
    }

    out.push_str(&html[last..]);
    out
}

fn is_guarded(html: &str, start: usize, end: usize) -> bool {
    let preceded = html[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c == '>' || c == '"');

    preceded || inside_tag(&html[end..])
}

/// True when the first angle bracket in `rest` closes a tag.
fn inside_tag(rest: &str) -> bool {
    match rest.find(['<', '>']) {
        Some(idx) => rest.as_bytes()[idx] == b'>',
        None => false,
    }
}
