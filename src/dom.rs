//! Content reveal: locate the page's real content container and swap in
//! decrypted markup.
//!
//! Selector support covers exactly what `params::CONTENT_SELECTORS` needs:
//! tag names, class selectors (including stacked classes), and id
//! selectors. The TOC builder searches headings inside the same container,
//! so both sides walk the one shared list.

use regex::Regex;

use crate::params::{CONTENT_SELECTORS, PLACEHOLDER_ID};

/// Byte offsets of a matched element within the page markup.
#[derive(Debug, Clone, Copy)]
struct ElementSpan {
    start: usize,
    inner_start: usize,
    inner_end: usize,
    end: usize,
}

/// Replace the inner content of the first container matched by the
/// prioritized selector list. Falls back to replacing the protected
/// placeholder element whole, and appends as a last resort; decrypted
/// content is never silently dropped.
pub fn reveal_content(page_html: &str, decrypted: &str) -> String {
    for selector in CONTENT_SELECTORS {
        if let Some(span) = find_element(page_html, selector) {
            let mut out = String::with_capacity(page_html.len() + decrypted.len());
            out.push_str(&page_html[..span.inner_start]);
            out.push_str(decrypted);
            out.push_str(&page_html[span.inner_end..]);
            return out;
        }
    }
    if let Some(span) = find_by(page_html, None, &[], Some(PLACEHOLDER_ID)) {
        let mut out = String::with_capacity(page_html.len() + decrypted.len());
        out.push_str(&page_html[..span.start]);
        out.push_str(decrypted);
        out.push_str(&page_html[span.end..]);
        return out;
    }
    let mut out = page_html.to_string();
    out.push_str(decrypted);
    out
}

/// Return the container matched by the shared selector list, if any.
/// Used by the TOC rebuild to scope its heading search.
pub fn find_content_container(page_html: &str) -> Option<(usize, usize)> {
    for selector in CONTENT_SELECTORS {
        if let Some(span) = find_element(page_html, selector) {
            return Some((span.inner_start, span.inner_end));
        }
    }
    None
}

fn find_element(html: &str, selector: &str) -> Option<ElementSpan> {
    if let Some(id) = selector.strip_prefix('#') {
        return find_by(html, None, &[], Some(id));
    }
    if selector.starts_with('.') {
        let classes: Vec<&str> = selector.split('.').filter(|s| !s.is_empty()).collect();
        return find_by(html, None, &classes, None);
    }
    find_by(html, Some(selector), &[], None)
}

/// Scan opening tags for one matching tag name / class tokens / id, then
/// balance-match its closing tag.
fn find_by(
    html: &str,
    tag: Option<&str>,
    classes: &[&str],
    id: Option<&str>,
) -> Option<ElementSpan> {
    let open_re = Regex::new(r"(?is)<([a-z][a-z0-9]*)\b([^>]*)>").unwrap();
    let class_re = Regex::new(r#"(?i)\bclass\s*=\s*"([^"]*)""#).unwrap();
    let id_re = Regex::new(r#"(?i)\bid\s*=\s*"([^"]*)""#).unwrap();

    for caps in open_re.captures_iter(html) {
        let whole = caps.get(0)?;
        let name = caps[1].to_lowercase();
        let attrs = &caps[2];

        if attrs.trim_end().ends_with('/') {
            continue;
        }
        if let Some(t) = tag {
            if name != t.to_lowercase() {
                continue;
            }
        }
        if let Some(wanted) = id {
            match id_re.captures(attrs) {
                Some(id_caps) if &id_caps[1] == wanted => {}
                _ => continue,
            }
        }
        if !classes.is_empty() {
            let tokens: Vec<String> = class_re
                .captures(attrs)
                .map(|c| c[1].split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();
            if !classes.iter().all(|c| tokens.iter().any(|t| t == c)) {
                continue;
            }
        }

        if let Some((inner_end, end)) = find_closing(html, whole.end(), &name) {
            return Some(ElementSpan {
                start: whole.start(),
                inner_start: whole.end(),
                inner_end,
                end,
            });
        }
    }
    None
}

/// Find the closing tag matching an element opened just before `from`,
/// counting nested elements of the same name.
fn find_closing(html: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let pair_re =
        Regex::new(&format!(r"(?is)<(/?)\s*{}\b[^>]*>", regex::escape(name))).unwrap();
    let mut depth = 1usize;
    for caps in pair_re.captures_iter(&html[from..]) {
        let whole = caps.get(0)?;
        let closing = !caps[1].is_empty();
        let self_closing = whole.as_str().trim_end_matches('>').ends_with('/');
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some((from + whole.start(), from + whole.end()));
            }
        } else if !self_closing {
            depth += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_most_specific_selector() {
        let page = concat!(
            "<div class=\"content e-content\">inner</div>",
            "<div class=\"content\">other</div>",
        );
        let out = reveal_content(page, "REVEALED");
        assert_eq!(
            out,
            "<div class=\"content e-content\">REVEALED</div><div class=\"content\">other</div>"
        );
    }

    #[test]
    fn falls_back_through_the_selector_list() {
        let page = "<article><p>old</p></article>";
        let out = reveal_content(page, "REVEALED");
        assert_eq!(out, "<article>REVEALED</article>");
    }

    #[test]
    fn replaces_placeholder_when_no_container_matches() {
        let page = concat!(
            "<body><div id=\"password-protected-content\"><p>prompt</p></div></body>",
        );
        let out = reveal_content(page, "<p>secret</p>");
        assert_eq!(out, "<body><p>secret</p></body>");
    }

    #[test]
    fn appends_when_nothing_matches() {
        let out = reveal_content("<div class=\"unrelated\">x</div>", "SECRET");
        assert!(out.ends_with("SECRET"));
        assert!(out.contains("unrelated"));
    }

    #[test]
    fn handles_nested_same_tag_elements() {
        let page = "<div class=\"content\"><div>nested</div></div><p>after</p>";
        let out = reveal_content(page, "R");
        assert_eq!(out, "<div class=\"content\">R</div><p>after</p>");
    }

    #[test]
    fn container_lookup_matches_reveal_target() {
        let page = "<article class=\"post-content\">text</article>";
        let (start, end) = find_content_container(page).unwrap();
        assert_eq!(&page[start..end], "text");
    }
}
