//! Render-time application of highlights onto reference text
//!
//! Longer highlights are applied first so an overlapping shorter one cannot
//! fragment them. Text already inside a mark wrapper is never wrapped
//! again, which also makes repeated application a no-op.

use regex_lite::Regex;

use super::Highlight;

/// Wrap every occurrence of each stored highlight in `text` with a
/// `<mark data-highlight-id="...">` wrapper.
///
/// Matching is case-insensitive; a whole-word match is attempted first and
/// falls back to a plain substring match. A highlight whose text spans
/// multiple lines is matched one non-empty line at a time.
pub fn apply(text: &str, highlights: &[Highlight]) -> String {
    if text.is_empty() || highlights.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&Highlight> = highlights.iter().collect();
    ordered.sort_by(|a, b| b.text.len().cmp(&a.text.len()));

    let mut result = text.to_string();
    for highlight in ordered {
        for line in highlight
            .text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
        {
            // One wrapper per highlight: stop once any line has applied.
            if result.contains(&applied_marker(&highlight.id)) {
                break;
            }
            result = wrap_occurrences(&result, line, &highlight.id);
        }
    }
    result
}

fn applied_marker(highlight_id: &str) -> String {
    format!("data-highlight-id=\"{}\"", highlight_id)
}

/// Wrap every occurrence of `line` in `text` that is not already inside a
/// mark wrapper. Returns `text` unchanged when nothing matches.
fn wrap_occurrences(text: &str, line: &str, highlight_id: &str) -> String {
    let escaped = regex_lite::escape(line);

    let word_bounded = Regex::new(&format!(r"(?i)\b{}\b", escaped)).ok();
    let pattern = match word_bounded.filter(|re| re.is_match(text)) {
        Some(re) => re,
        None => match Regex::new(&format!("(?i){}", escaped)) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Failed to build highlight pattern: {}", e);
                return text.to_string();
            }
        },
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if inside_mark(text, m.start()) {
            out.push_str(m.as_str());
        } else {
            out.push_str("<mark data-highlight-id=\"");
            out.push_str(highlight_id);
            out.push_str("\">");
            out.push_str(m.as_str());
            out.push_str("</mark>");
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// True when `offset` falls between an opening `<mark` and its `</mark>`
fn inside_mark(text: &str, offset: usize) -> bool {
    let before = &text[..offset];
    before.matches("<mark").count() > before.matches("</mark>").count()
}
