//! Configuration validation utilities.
//!
//! Vocabulary terms and the search hook are spliced verbatim into HTML attributes and inline
//! JavaScript, so they are checked once when a configuration is loaded rather than escaped on
//! every render.

use crate::{RenderError, RenderResult};

/// Characters that would break out of an attribute value or a quoted JS string.
const FORBIDDEN_TERM_CHARS: &[char] = &['<', '>', '"', '\'', '\\', '&'];

/// Validates that a vocabulary term is safe to splice into generated markup.
///
/// # Arguments
///
/// * `kind` - What the term is used for, included in error messages.
/// * `term` - The vocabulary term.
///
/// # Errors
///
/// Returns `RenderError::InvalidConfig` if the term is empty, spans lines, or contains a
/// character that is significant inside an HTML attribute or a JS string literal.
pub fn validate_term(kind: &str, term: &str) -> RenderResult<()> {
    if term.trim().is_empty() {
        return Err(RenderError::InvalidConfig(format!(
            "{kind} terms cannot be empty"
        )));
    }

    if term.contains('\n') || term.contains('\r') {
        return Err(RenderError::InvalidConfig(format!(
            "{kind} term `{term}` must not contain line breaks"
        )));
    }

    if term.contains(FORBIDDEN_TERM_CHARS) {
        return Err(RenderError::InvalidConfig(format!(
            "{kind} term `{term}` contains markup characters"
        )));
    }

    Ok(())
}

/// Validates that the search hook is a dotted JavaScript identifier path such as
/// `window.appSearch`.
///
/// # Errors
///
/// Returns `RenderError::InvalidConfig` if the hook is empty, too long, or any segment is
/// not a plain ASCII identifier.
pub fn validate_search_hook(hook: &str) -> RenderResult<()> {
    const MAX_HOOK_LEN: usize = 128;

    if hook.trim().is_empty() {
        return Err(RenderError::InvalidConfig(
            "search hook cannot be empty".into(),
        ));
    }

    if hook.len() > MAX_HOOK_LEN {
        return Err(RenderError::InvalidConfig(format!(
            "search hook exceeds maximum length of {} characters",
            MAX_HOOK_LEN
        )));
    }

    let ok = hook.split('.').all(|segment| {
        let mut bytes = segment.bytes();
        match bytes.next() {
            Some(first) if first.is_ascii_alphabetic() || first == b'_' || first == b'$' => bytes
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$'),
            _ => false,
        }
    });

    if !ok {
        return Err(RenderError::InvalidConfig(
            "search hook must be a dotted identifier path (e.g. window.appSearch)".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_term_accepts_cjk_and_ascii() {
        assert!(validate_term("entity", "半导体").is_ok());
        assert!(validate_term("entity", "AI").is_ok());
        assert!(validate_term("section", "AI 预判").is_ok());
    }

    #[test]
    fn test_validate_term_rejects_empty() {
        assert!(validate_term("entity", "").is_err());
        assert!(validate_term("entity", "   ").is_err());
    }

    #[test]
    fn test_validate_term_rejects_markup() {
        for bad in ["<b>", "a\"b", "it's", "a&b", "x\\y", "line\nbreak"] {
            assert!(validate_term("hot keyword", bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn test_validate_search_hook() {
        assert!(validate_search_hook("window.appSearch").is_ok());
        assert!(validate_search_hook("$app._search2").is_ok());
        assert!(validate_search_hook("").is_err());
        assert!(validate_search_hook("window..appSearch").is_err());
        assert!(validate_search_hook("alert(1)").is_err());
        assert!(validate_search_hook("1abc").is_err());
        assert!(validate_search_hook(&"a".repeat(200)).is_err());
    }
}
