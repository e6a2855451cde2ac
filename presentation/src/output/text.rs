//! Markup to plain text, for the console

use scraper::{ElementRef, Html, Node};

const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];
const BLOCK_TAGS: [&str; 12] = [
    "p", "div", "br", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "section",
];

/// Reduce trusted markup (summary, benefits) to readable lines.
///
/// Block elements start a new line, list items get a bullet.
pub fn markup_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    collect_text(fragment.root_element(), &mut out);
    clean_lines(&out)
}

fn collect_text(element: ElementRef, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }

    let is_block = BLOCK_TAGS.contains(&tag);
    if is_block || tag == "li" {
        out.push('\n');
    }
    if tag == "li" {
        out.push_str("• ");
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if is_block {
        out.push('\n');
    }
}

/// Collapse runs of whitespace inside lines and drop empty lines
fn clean_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
