use scraper::node::{Element, Node};
use scraper::ElementRef;

/// Elements whose contents never render as text
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript", "head"];

/// Elements that start a new line when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Collapse every run of whitespace to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of an element as a reader would see it on the page.
///
/// Adjacent inline text is concatenated as-is, so `<b>1</b><i>cup</i>`
/// reads `1cup`, while block boundaries and `<br>` separate words.
pub fn rendered_text(element: ElementRef<'_>) -> String {
    let mut buffer = String::new();
    push_rendered(element, &mut buffer);
    normalize_whitespace(&buffer)
}

/// `hidden` attribute or an inline style that removes the element
fn is_hidden(element: &Element) -> bool {
    if element.attr("hidden").is_some() {
        return true;
    }
    element.attr("style").is_some_and(|style| {
        let style: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        style.contains("display:none") || style.contains("visibility:hidden")
    })
}

fn push_rendered(element: ElementRef<'_>, buffer: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buffer.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if HIDDEN_ELEMENTS.contains(&name) || is_hidden(el) {
                    continue;
                }
                if name == "br" {
                    buffer.push(' ');
                    continue;
                }
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    buffer.push(' ');
                }
                push_rendered(child_ref, buffer);
                if block {
                    buffer.push(' ');
                }
            }
            _ => {}
        }
    }
}
