//! Section detection.
//!
//! The raw text is scanned once into a stream of [`Token`]s (section markers and the plain
//! text between them), then a second pass groups the stream into [`Section`]s. Keyword rules
//! take precedence over generic header rules:
//!
//! - a `## ` / `### ` line whose title starts with a section keyword opens that keyword's
//!   section, with the keyword's icon;
//! - any other `## ` / `### ` line opens a section titled with the whole header text;
//! - outside header lines, every occurrence of a section keyword, with an optional `:` or
//!   `：` after it, opens that keyword's section;
//! - a keyword label wrapped in `**` (`**推荐关注：**`) is read as the bare label.
//!
//! A header line with nothing after the hashes is not a marker and stays literal text.

use crate::config::{RendererConfig, SectionRule};

/// Title of a detected section. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionTitle(String);

impl SectionTitle {
    /// Trims `input`; returns `None` if nothing is left.
    pub(crate) fn new(input: impl AsRef<str>) -> Option<Self> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Marker { title: SectionTitle, icon: &'a str },
    Text(&'a str),
}

/// A titled run of text, ready to become a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    pub(crate) title: SectionTitle,
    pub(crate) icon: &'a str,
    pub(crate) body: String,
}

/// Result of segmenting a raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segments<'a> {
    /// No marker was found; the text is a single block.
    Unsectioned,
    /// At least one marker was found. `lead` holds any text before the first marker.
    Sectioned {
        lead: Option<String>,
        sections: Vec<Section<'a>>,
    },
}

/// Splits `text` into sections according to the configured section table.
pub(crate) fn segment<'a>(text: &'a str, cfg: &'a RendererConfig) -> Segments<'a> {
    assemble(tokenize(text, cfg))
}

pub(crate) fn tokenize<'a>(text: &'a str, cfg: &'a RendererConfig) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();

    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches('\n');
        let newline = &line[content.len()..];

        match header(content, cfg) {
            Some((rest, icon)) => {
                let rest_trimmed = rest.trim_start();
                let bold_label = rest_trimmed.strip_prefix("**").and_then(|label| {
                    let rule = keyword_at_start(label, cfg.sections())?;
                    let (after, closed) = label_tail(&label[rule.keyword.len()..], true);
                    closed.then_some((rule, after))
                });
                let label = bold_label.or_else(|| {
                    keyword_at_start(rest_trimmed, cfg.sections())
                        .map(|rule| (rule, skip_colon(&rest_trimmed[rule.keyword.len()..])))
                });

                if let Some((rule, after)) = label {
                    push_marker(&mut tokens, &rule.keyword, &rule.icon);
                    scan_keywords(after, cfg.sections(), &mut tokens);
                } else if let Some(title) = SectionTitle::new(rest) {
                    tokens.push(Token::Marker { title, icon });
                } else {
                    scan_keywords(content, cfg.sections(), &mut tokens);
                }
            }
            None => scan_keywords(content, cfg.sections(), &mut tokens),
        }

        if !newline.is_empty() {
            tokens.push(Token::Text(newline));
        }
    }

    tokens
}

pub(crate) fn assemble(tokens: Vec<Token<'_>>) -> Segments<'_> {
    let mut lead = String::new();
    let mut sections: Vec<Section<'_>> = Vec::new();

    for token in tokens {
        match token {
            Token::Marker { title, icon } => sections.push(Section {
                title,
                icon,
                body: String::new(),
            }),
            Token::Text(text) => match sections.last_mut() {
                Some(section) => section.body.push_str(text),
                None => lead.push_str(text),
            },
        }
    }

    if sections.is_empty() {
        return Segments::Unsectioned;
    }

    let lead = if lead.trim().is_empty() {
        None
    } else {
        Some(lead)
    };

    Segments::Sectioned { lead, sections }
}

/// Returns the header text and the generic header icon for `### ` / `## ` lines.
fn header<'a>(line: &'a str, cfg: &'a RendererConfig) -> Option<(&'a str, &'a str)> {
    if let Some(rest) = line.strip_prefix("### ") {
        Some((rest, cfg.h3_icon()))
    } else {
        line.strip_prefix("## ").map(|rest| (rest, cfg.h2_icon()))
    }
}

fn keyword_at_start<'a>(text: &str, rules: &'a [SectionRule]) -> Option<&'a SectionRule> {
    rules.iter().find(|rule| text.starts_with(rule.keyword.as_str()))
}

fn skip_colon(text: &str) -> &str {
    text.strip_prefix(':')
        .or_else(|| text.strip_prefix('：'))
        .unwrap_or(text)
}

/// Skips the colon after a label. When the label opened with `**`, also skips the closing
/// `**` (on either side of the colon) and reports whether it was found.
fn label_tail(after: &str, bold: bool) -> (&str, bool) {
    let after = skip_colon(after);
    if bold {
        if let Some(rest) = after.strip_prefix("**") {
            return (skip_colon(rest), true);
        }
    }
    (after, false)
}

fn push_marker<'a>(tokens: &mut Vec<Token<'a>>, keyword: &str, icon: &'a str) {
    if let Some(title) = SectionTitle::new(keyword) {
        tokens.push(Token::Marker { title, icon });
    }
}

/// Emits text and keyword markers for one line without a header prefix. The leftmost keyword
/// occurrence wins; at equal positions the earlier table entry wins. A label wrapped in `**`
/// absorbs both bold markers.
fn scan_keywords<'a>(mut text: &'a str, rules: &'a [SectionRule], tokens: &mut Vec<Token<'a>>) {
    loop {
        let next = rules
            .iter()
            .filter_map(|rule| text.find(rule.keyword.as_str()).map(|idx| (idx, rule)))
            .min_by_key(|(idx, _)| *idx);

        let Some((idx, rule)) = next else {
            break;
        };

        let before = &text[..idx];
        let opener = before.strip_suffix("**");
        let (after, closed) = label_tail(&text[idx + rule.keyword.len()..], opener.is_some());
        let before = match opener {
            Some(unbolded) if closed => unbolded,
            _ => before,
        };

        if !before.is_empty() {
            tokens.push(Token::Text(before));
        }
        push_marker(tokens, &rule.keyword, &rule.icon);
        text = after;
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
}
