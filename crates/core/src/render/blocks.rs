//! Line-level formatting: `- ` bullets and line breaks.

use super::InlinePass;
use crate::config::RendererConfig;
use crate::{RenderError, RenderResult};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const BULLET_OPEN: &str = "<div style=\"display:flex;gap:0.5rem;margin-bottom:0.25rem;\"><span style=\"color:var(--primary)\">•</span><span>";
const BULLET_CLOSE: &str = "</span></div>";
const LINE_BREAK: &str = "<br/>";

/// Turns `- ` lines into bullet rows, then every remaining `\n\n` and `\n` into `<br/>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBlocks;

fn bullet_regex() -> RenderResult<&'static Regex> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^- (.*)$"))
        .as_ref()
        .map_err(|e| RenderError::Pass {
            pass: "line-blocks",
            reason: e.to_string(),
        })
}

impl InlinePass for LineBlocks {
    fn name(&self) -> &'static str {
        "line-blocks"
    }

    fn apply(&self, html: &str, _cfg: &RendererConfig) -> RenderResult<String> {
        let re = bullet_regex()?;
        let bulleted = re.replace_all(html, |caps: &Captures<'_>| {
            format!("{BULLET_OPEN}{}{BULLET_CLOSE}", &caps[1])
        });

        Ok(bulleted
            .replace("\n\n", LINE_BREAK)
            .replace('\n', LINE_BREAK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks() {
        let cfg = RendererConfig::default();
        let out = LineBlocks.apply("第一段\n\n第二段\n第三行", &cfg).unwrap();
        assert_eq!(out, "第一段<br/>第二段<br/>第三行");
    }

    #[test]
    fn test_bullets() {
        let cfg = RendererConfig::default();
        let out = LineBlocks.apply("- 光伏\n- 储能", &cfg).unwrap();
        assert_eq!(
            out,
            format!("{BULLET_OPEN}光伏{BULLET_CLOSE}<br/>{BULLET_OPEN}储能{BULLET_CLOSE}")
        );
    }

    #[test]
    fn test_dash_without_space_is_not_a_bullet() {
        let cfg = RendererConfig::default();
        let out = LineBlocks.apply("-5% 回撤", &cfg).unwrap();
        assert_eq!(out, "-5% 回撤");
    }

    #[test]
    fn test_indented_dash_is_not_a_bullet() {
        let cfg = RendererConfig::default();
        let out = LineBlocks.apply("  - 子项", &cfg).unwrap();
        assert_eq!(out, "  - 子项");
    }
}
