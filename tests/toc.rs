use pagelock::toc::{annotate_headings, rebuild, render_toc, Heading, TocMode};

fn headings(levels: &[u8]) -> Vec<Heading> {
    levels
        .iter()
        .enumerate()
        .map(|(i, &level)| Heading {
            level,
            text: format!("H{i}"),
            id: format!("heading-{i}"),
        })
        .collect()
}

fn numbers(toc: &str) -> Vec<String> {
    toc.split("<span class=\"toc-number\">")
        .skip(1)
        .filter_map(|rest| rest.split("</span>").next())
        .map(str::to_string)
        .collect()
}

#[test]
fn hierarchical_numbering_for_2_3_3_2() {
    let toc = render_toc(&headings(&[2, 3, 3, 2]), TocMode::Hierarchical).unwrap();
    assert_eq!(numbers(&toc), vec!["1.", "1.1.", "1.2.", "2."]);
}

#[test]
fn numbering_anchors_at_minimum_level_present() {
    // Only level-3+ headings: the first number is still "1.".
    let toc = render_toc(&headings(&[3, 4, 3]), TocMode::Hierarchical).unwrap();
    assert_eq!(numbers(&toc), vec!["1.", "1.1.", "2."]);
}

#[test]
fn deeper_counters_reset_on_return() {
    let toc = render_toc(&headings(&[2, 3, 2, 3]), TocMode::Hierarchical).unwrap();
    assert_eq!(numbers(&toc), vec!["1.", "1.1.", "2.", "2.1."]);
}

#[test]
fn generic_two_same_level_headings_are_flat() {
    let toc = render_toc(&headings(&[2, 2]), TocMode::Generic).unwrap();
    assert_eq!(toc.matches("<ul>").count(), 1);
    assert_eq!(toc.matches("<li>").count(), 2);
    assert!(!toc.contains("toc-number"));
}

#[test]
fn every_open_marker_is_closed() {
    for levels in [
        &[2u8, 3, 3, 2][..],
        &[1, 2, 3, 4, 5, 6],
        &[6, 5, 4, 3, 2, 1],
        &[3, 2],
        &[2, 4, 2],
        &[2],
    ] {
        for mode in [TocMode::Hierarchical, TocMode::Generic] {
            let toc = render_toc(&headings(levels), mode).unwrap();
            for tag in ["ol", "ul", "li"] {
                let opens = toc.matches(&format!("<{tag}")).count();
                let closes = toc.matches(&format!("</{tag}>")).count();
                assert_eq!(opens, closes, "unbalanced <{tag}> for {levels:?} ({mode:?})");
            }
        }
    }
}

#[test]
fn anchors_point_at_heading_ids() {
    let html = "<h2>Alpha</h2><h3 id=\"beta\">Beta</h3>";
    let (annotated, toc) = rebuild(html, TocMode::Hierarchical);
    let toc = toc.unwrap();
    assert!(annotated.contains("<h2 id=\"heading-0\">Alpha</h2>"));
    assert!(toc.contains("href=\"#heading-0\""));
    assert!(toc.contains("href=\"#beta\""));
}

#[test]
fn synthesized_ids_follow_document_order() {
    let html = "<h4>a</h4><h2 id=\"own\">b</h2><h2>c</h2>";
    let (_, found) = annotate_headings(html);
    assert_eq!(found[0].id, "heading-0");
    assert_eq!(found[1].id, "own");
    assert_eq!(found[2].id, "heading-2");
}

#[test]
fn zero_headings_suppress_the_toc() {
    let (_, toc) = rebuild("<p>no headings at all</p>", TocMode::Hierarchical);
    assert_eq!(toc, None);
}
