//! Free-text URL rewriter: replaces every absolute http(s) URL inside a
//! block of text with its tracked form, leaving all other text unchanged.

use crate::schema::Condition;
use crate::template;
use regex::Regex;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Candidate URLs: a maximal run of non-whitespace, non-angle-bracket,
/// non-quote characters starting with an http(s) scheme and containing at
/// least one `.` after it.
fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r#"(?i)https?://[^\s<>"']+\.[^\s<>"']+"#).unwrap())
}

/// True when the candidate sits inside markup: the text after the match
/// reaches a `>` before any `<`.
fn inside_markup(rest: &str) -> bool {
    for c in rest.chars() {
        match c {
            '>' => return true,
            '<' => return false,
            _ => {}
        }
    }
    false
}

/// Rewrite every URL in `text` to its tracked form.
///
/// A missing advertiser/partner selection fails before any scanning; empty
/// or all-whitespace text is `NoContent`. Text with zero matches comes back
/// unchanged, and malformed URL-like tokens pass through untouched.
pub fn rewrite_text(progid: &str, partid: &str, text: &str) -> Result<String, Condition> {
    let (progid, partid) = template::require_ids(progid, partid)?;
    if text.trim().is_empty() {
        return Err(Condition::NoContent);
    }

    // Single left-to-right pass; skipped matches are copied through as-is,
    // so this splices manually instead of using replace_all.
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for mat in url_pattern().find_iter(text) {
        if inside_markup(&text[mat.end()..]) {
            continue;
        }
        out.push_str(&text[last..mat.start()]);
        out.push_str(&template::render(&progid, &partid, mat.as_str()));
        last = mat.end();
    }
    out.push_str(&text[last..]);

    Ok(out)
}

/// Count the URLs `rewrite_text` would replace.
pub fn count_candidates(text: &str) -> usize {
    url_pattern()
        .find_iter(text)
        .filter(|mat| !inside_markup(&text[mat.end()..]))
        .count()
}
