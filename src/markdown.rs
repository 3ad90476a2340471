//! Canvas HTML to Markdown rendering.
//!
//! An alternative, even leaner output for text-oriented consumers. Render
//! the raw canvas export, not a sanitized fragment: sanitizing removes every
//! `br` (including the line breaks inside `pre` and `blockquote`) and the
//! `embedded-link` class, so code and quote lines run together and embedded
//! links degrade to plain text. Headings, lists, checklists, tables and
//! embedded files come out the same either way.
//!
//! Canvas lists are flat `ul` elements grouped under a
//! `div[data-section-style]` whose value picks the list kind:
//!
//! | value | rendering |
//! |-------|-----------|
//! | `5`   | `- item` |
//! | `6`   | `1. item` |
//! | `7`   | `- [ ] item` / `- [x] item` (`li.checked`) |

use crate::dom::{self, NodeRef};
use regex::Regex;
use std::sync::LazyLock;

/// Collapse runs of blank lines
#[allow(clippy::expect_used)]
static EXCESS_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

const ZERO_WIDTH_SPACE: &str = "\u{200b}";

/// List kind selected by a section container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListStyle {
    Bullet,
    Numbered,
    Checklist,
}

impl ListStyle {
    fn from_section_style(value: &str) -> Option<Self> {
        match value.trim() {
            "5" => Some(Self::Bullet),
            "6" => Some(Self::Numbered),
            "7" => Some(Self::Checklist),
            _ => None,
        }
    }
}

/// Render canvas HTML as Markdown.
///
/// Conversion never fails; unknown elements contribute their text.
///
/// # Example
///
/// ```rust
/// use canvas_sanitizer::to_markdown;
///
/// let html = r#"<h1>Plan</h1><div data-section-style="7"><ul>
///   <li class="checked">Draft</li><li>Review</li></ul></div>"#;
/// assert_eq!(to_markdown(html), "# Plan\n\n- [x] Draft\n- [ ] Review");
/// ```
#[must_use]
pub fn to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let doc = dom::parse(html);
    let Some(body) = dom::body(&doc) else {
        return String::new();
    };

    let mut renderer = Renderer::default();
    let raw = renderer.children(&body);
    cleanup_markdown(&raw)
}

/// Collapse three or more newlines into a blank line and trim the ends.
#[must_use]
pub fn cleanup_markdown(markdown: &str) -> String {
    EXCESS_NEWLINES_RE
        .replace_all(markdown, "\n\n")
        .trim()
        .to_string()
}

#[derive(Debug, Default)]
struct Renderer {
    list_depth: usize,
    list_style: Option<ListStyle>,
}

impl Renderer {
    fn node(&mut self, node: &NodeRef) -> String {
        if node.is_text() {
            let text = dom::text_content(node);
            if &*text == ZERO_WIDTH_SPACE {
                return String::new();
            }
            if text.trim().is_empty() {
                // Newlines separate blocks in the export; a bare space separates words.
                return if text.contains('\n') { String::new() } else { " ".to_string() };
            }
            return text.to_string();
        }
        if node.is_element() {
            return self.element(node);
        }
        String::new()
    }

    fn children(&mut self, node: &NodeRef) -> String {
        dom::child_nodes(node)
            .iter()
            .map(|child| self.node(child))
            .collect()
    }

    fn element(&mut self, node: &NodeRef) -> String {
        let tag = dom::tag_name(node).unwrap_or_default();
        match tag.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = usize::from(tag.as_bytes()[1] - b'0');
                format!("{} {}\n\n", "#".repeat(level), self.children(node).trim())
            }

            "p" => self.paragraph(node),

            "div" => match attribute(node, "data-section-style") {
                Some(style) => self.section(node, ListStyle::from_section_style(&style)),
                None => self.children(node),
            },

            "ul" => self.list(node, false),
            "ol" => self.list(node, true),
            "li" => self.list_item(node),

            "table" => format!("{}\n\n", self.table(node)),
            "blockquote" => format!("{}\n\n", self.blockquote(node)),
            "pre" => format!("```\n{}\n```\n\n", code_text(node)),

            "b" | "strong" => format!("**{}**", self.children(node)),
            "i" | "em" => format!("*{}*", self.children(node)),
            "u" => format!("<u>{}</u>", self.children(node)),
            "del" | "s" | "strike" => format!("~~{}~~", self.children(node)),

            "a" => {
                let text = self.children(node);
                match attribute(node, "href").filter(|href| !href.is_empty()) {
                    Some(href) => format!("[{text}]({href})"),
                    None => text,
                }
            }

            "br" => "\n".to_string(),

            // span, control, html structure and unknown elements: text only
            _ => self.children(node),
        }
    }

    fn paragraph(&mut self, node: &NodeRef) -> String {
        if has_class(node, "embedded-file") {
            return format!("{}\n\n", embedded(node, "File URL:", "![File]"));
        }
        if has_class(node, "embedded-link") {
            return format!("{}\n\n", embedded(node, "Link URL:", "[Link]"));
        }

        let text = self.children(node);
        let text = text.trim();
        if text.is_empty() {
            String::new()
        } else {
            format!("{text}\n\n")
        }
    }

    fn section(&mut self, node: &NodeRef, style: Option<ListStyle>) -> String {
        let saved = std::mem::replace(&mut self.list_style, style);
        let out = self.children(node);
        self.list_style = saved;
        out
    }

    fn list(&mut self, node: &NodeRef, ordered: bool) -> String {
        let nested = node
            .parent()
            .and_then(|parent| dom::tag_name(&parent))
            .is_some_and(|tag| matches!(tag.as_str(), "li" | "ul" | "ol"));

        let saved_style = self.list_style;
        if ordered && self.list_style.is_none() {
            self.list_style = Some(ListStyle::Numbered);
        }
        if nested {
            self.list_depth += 1;
        }

        // Only items count; stray whitespace between them is layout.
        let out: String = dom::child_nodes(node)
            .iter()
            .filter(|child| child.is_element())
            .map(|child| self.node(child))
            .collect();

        if nested {
            self.list_depth -= 1;
        }
        self.list_style = saved_style;
        out
    }

    fn list_item(&mut self, node: &NodeRef) -> String {
        let mut text = String::new();
        let mut nested = String::new();

        for child in dom::child_nodes(node) {
            if dom::is_tag(&child, "ul") || dom::is_tag(&child, "ol") {
                nested.push_str(&self.node(&child));
            } else {
                text.push_str(&self.node(&child));
            }
        }

        let marker = match self.list_style {
            Some(ListStyle::Numbered) => "1. ",
            Some(ListStyle::Checklist) if has_class(node, "checked") => "- [x] ",
            Some(ListStyle::Checklist) => "- [ ] ",
            Some(ListStyle::Bullet) | None => "- ",
        };

        format!(
            "{}{marker}{}\n{nested}",
            "  ".repeat(self.list_depth),
            text.trim()
        )
    }

    fn table(&mut self, node: &NodeRef) -> String {
        let mut rows: Vec<Vec<String>> = Vec::new();

        for child in dom::child_nodes(node) {
            match dom::tag_name(&child).as_deref() {
                Some("tr") => rows.push(self.table_row(&child)),
                Some("thead" | "tbody" | "tfoot") => {
                    for row in dom::child_nodes(&child) {
                        if dom::is_tag(&row, "tr") {
                            rows.push(self.table_row(&row));
                        }
                    }
                }
                _ => {}
            }
        }
        rows.retain(|row| !row.is_empty());

        let Some(columns) = rows.iter().map(Vec::len).max() else {
            return String::new();
        };

        let mut out = String::new();
        for (i, row) in rows.iter_mut().enumerate() {
            row.resize(columns, String::new());
            out.push_str("| ");
            out.push_str(&row.join(" | "));
            out.push_str(" |\n");
            if i == 0 {
                out.push('|');
                out.push_str(&" --- |".repeat(columns));
                out.push('\n');
            }
        }
        out
    }

    fn table_row(&mut self, row: &NodeRef) -> Vec<String> {
        dom::child_nodes(row)
            .iter()
            .filter(|cell| dom::is_tag(cell, "td") || dom::is_tag(cell, "th"))
            .map(|cell| {
                self.children(cell)
                    .trim()
                    .replace('\n', " ")
                    .replace('|', "\\|")
            })
            .collect()
    }

    fn blockquote(&mut self, node: &NodeRef) -> String {
        self.children(node)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    dom::get_all_attributes(node)
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn has_class(node: &NodeRef, class: &str) -> bool {
    attribute(node, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

/// Render an embedded file/link paragraph of the form
/// `File ID: F123 File URL: https://...` as a Markdown reference.
fn embedded(node: &NodeRef, label: &str, prefix: &str) -> String {
    let text = Renderer::default().children(node);
    match text.split_once(label) {
        Some((_, url)) => format!("{prefix}({})", url.trim()),
        None => text,
    }
}

/// Raw text of a code block, with `br` turned into newlines.
fn code_text(node: &NodeRef) -> String {
    let mut out = String::new();
    for child in dom::child_nodes(node) {
        if child.is_text() {
            out.push_str(&dom::text_content(&child));
        } else if dom::is_tag(&child, "br") {
            out.push('\n');
        } else if child.is_element() {
            out.push_str(&code_text(&child));
        }
    }
    out
}
