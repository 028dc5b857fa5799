//! TOC builder: a single left-to-right pass over the heading sequence of
//! revealed content.
//!
//! State: current nesting depth, one counter per heading level, and the
//! mode. Nesting markers are emitted from depth deltas between consecutive
//! headings; every opened marker is closed exactly once, in reverse order
//! of opening, by the end of the pass. The generated client script mirrors
//! this pass statement for statement.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::params::HEADING_ID_PREFIX;

/// TOC rendering mode, decided once at build time and threaded into the
/// fragment. No runtime probing of existing TOC markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocMode {
    /// Dot-joined numeric prefixes, numbering anchored at the minimum
    /// heading level present. `<ol>`-based markup.
    Hierarchical,
    /// No numbering, plain nested `<ul>` markup.
    Generic,
}

impl Default for TocMode {
    fn default() -> Self {
        TocMode::Hierarchical
    }
}

impl TocMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hierarchical => "hierarchical",
            Self::Generic => "generic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hierarchical" => Some(Self::Hierarchical),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

/// A heading in document order. `id` always resolves: it is either the
/// markup's own id or a synthesized `heading-<index>` anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Collect headings in document order, rewriting any heading that lacks an
/// id with a `heading-<index>` anchor so that TOC links resolve. Returns
/// the annotated markup together with the heading sequence.
pub fn annotate_headings(html: &str) -> (String, Vec<Heading>) {
    let heading_re =
        Regex::new(r"(?is)<h([1-6])([^>]*)>(.*?)</h[1-6]\s*>").unwrap();
    let id_re = Regex::new(r#"(?i)\bid\s*=\s*"([^"]*)""#).unwrap();

    let mut headings = Vec::new();
    let annotated = heading_re
        .replace_all(html, |caps: &regex::Captures| {
            let level: u8 = caps[1].parse().unwrap_or(6);
            let attrs = caps[2].to_string();
            let inner = caps[3].to_string();
            let text = strip_tags(&inner).trim().to_string();
            let index = headings.len();

            if let Some(id_caps) = id_re.captures(&attrs) {
                headings.push(Heading {
                    level,
                    text,
                    id: id_caps[1].to_string(),
                });
                caps[0].to_string()
            } else {
                let id = format!("{HEADING_ID_PREFIX}{index}");
                headings.push(Heading {
                    level,
                    text,
                    id: id.clone(),
                });
                format!("<h{level}{attrs} id=\"{id}\">{inner}</h{level}>")
            }
        })
        .into_owned();
    (annotated, headings)
}

/// Render TOC markup for a heading sequence, or `None` when there are no
/// headings (the caller hides the TOC container instead of leaving it
/// stale or visibly empty).
pub fn render_toc(headings: &[Heading], mode: TocMode) -> Option<String> {
    if headings.is_empty() {
        return None;
    }
    Some(match mode {
        TocMode::Hierarchical => render_hierarchical(headings),
        TocMode::Generic => render_generic(headings),
    })
}

/// Annotate heading anchors in revealed content and render its TOC.
pub fn rebuild(container_html: &str, mode: TocMode) -> (String, Option<String>) {
    let (annotated, headings) = annotate_headings(container_html);
    let toc = render_toc(&headings, mode);
    (annotated, toc)
}

fn render_hierarchical(headings: &[Heading]) -> String {
    // `level` is a public field, so values outside 1..6 are clamped
    // rather than trusted as counter indexes.
    let min_level = headings
        .iter()
        .map(|h| h.level.clamp(1, 6))
        .min()
        .unwrap_or(1);
    let mut counters = [0u32; 6];
    let mut out = String::from("<ol class=\"toc\">");
    let mut current: u8 = 0;

    for h in headings {
        let level = h.level.clamp(1, 6);
        let depth = level - min_level + 1;

        counters[(level - 1) as usize] += 1;
        for c in counters[level as usize..].iter_mut() {
            *c = 0;
        }

        // Dot-joined prefix over min..=level; skipped levels stay at zero
        // and are omitted.
        let mut number = String::new();
        for l in min_level..=level {
            let n = counters[(l - 1) as usize];
            if n > 0 {
                number.push_str(&n.to_string());
                number.push('.');
            }
        }

        emit_transition(&mut out, current, depth, HIERARCHICAL_MARKERS);
        out.push_str(&format!(
            "<li class=\"toc-item toc-level-{}\"><a class=\"toc-link\" href=\"#{}\">\
             <span class=\"toc-number\">{}</span> <span class=\"toc-text\">{}</span></a>",
            level, h.id, number, h.text
        ));
        current = depth;
    }

    close_remaining(&mut out, current, HIERARCHICAL_MARKERS);
    out.push_str("</ol>");
    out
}

fn render_generic(headings: &[Heading]) -> String {
    // Depth is anchored at the first heading; levels below it clamp to 1.
    let base = headings[0].level;
    let mut out = String::from("<ul>");
    let mut current: u8 = 0;

    for h in headings {
        let depth = if h.level > base { h.level - base + 1 } else { 1 };
        emit_transition(&mut out, current, depth, GENERIC_MARKERS);
        out.push_str(&format!("<li><a href=\"#{}\">{}</a>", h.id, h.text));
        current = depth;
    }

    close_remaining(&mut out, current, GENERIC_MARKERS);
    out.push_str("</ul>");
    out
}

/// Open/close marker pair for one nesting level, plus the wrapper used
/// when the pass starts deeper than the root list.
struct Markers {
    open: &'static str,
    close: &'static str,
    wrapper_open: &'static str,
}

const HIERARCHICAL_MARKERS: &Markers = &Markers {
    open: "<ol class=\"toc-child\">",
    close: "</ol></li>",
    wrapper_open: "<li class=\"toc-item\"><ol class=\"toc-child\">",
};

const GENERIC_MARKERS: &Markers = &Markers {
    open: "<ul>",
    close: "</ul></li>",
    wrapper_open: "<li><ul>",
};

/// Emit nesting markers for the transition from `current` to `depth`.
/// `current == 0` means no item has been emitted yet; a deep start opens
/// wrapper items so that every close marker matches an open one.
///
/// Every close is the pair `</X></li>`, so on an increase only the first
/// new level nests inside the still-open item; each further level (a
/// skipped heading level) gets a wrapper item of its own.
fn emit_transition(out: &mut String, current: u8, depth: u8, markers: &Markers) {
    if current == 0 {
        for _ in 1..depth {
            out.push_str(markers.wrapper_open);
        }
    } else if depth > current {
        out.push_str(markers.open);
        for _ in (current + 1)..depth {
            out.push_str(markers.wrapper_open);
        }
    } else {
        out.push_str("</li>");
        for _ in depth..current {
            out.push_str(markers.close);
        }
    }
}

/// Close the trailing item and every still-open nesting level.
fn close_remaining(out: &mut String, current: u8, markers: &Markers) {
    out.push_str("</li>");
    for _ in 1..current {
        out.push_str(markers.close);
    }
}

fn strip_tags(text: &str) -> String {
    Regex::new(r"<[^>]+>").unwrap().replace_all(text, "").to_string()
}
