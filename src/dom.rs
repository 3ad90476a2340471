//! DOM Operations Adapter
//!
//! The tree builder and serializer behind the sanitizer, wrapped around the
//! `dom_query` crate. `dom_query` keeps nodes in an arena addressed by
//! `NodeId`, so detaching and re-appending a node is an index splice and a
//! detached subtree simply stays unreachable until the document is dropped.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// html5ever is a tolerant parser: it always produces a tree, synthesizing
/// the `html`/`head`/`body` wrapper around bare fragments.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase). `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether the node is an element with the given tag (ASCII case-insensitive).
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Get all attributes as key-value pairs, in source order.
///
/// Keys are qualified names: a namespaced foreign attribute such as SVG's
/// `xlink:href` keeps its prefix and never reads as a plain `href`.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| {
            let key = match &attr.name.prefix {
                Some(prefix) => format!("{prefix}:{}", attr.name.local),
                None => attr.name.local.to_string(),
            };
            (key, attr.value.to_string())
        })
        .collect()
}

/// Check if attribute exists, whatever its value.
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.attrs()
        .iter()
        .any(|attr| str::eq_ignore_ascii_case(&attr.name.local, name))
}

/// Replace the element's attribute list with `attrs`, keeping their order.
///
/// Keys are written back as given; a kept prefixed key comes out under the
/// same qualified name but without its namespace.
pub fn replace_attributes(node: &NodeRef, attrs: &[(String, String)]) {
    let sel = Selection::from(*node);
    let locals: Vec<String> = node
        .attrs()
        .iter()
        .map(|attr| attr.name.local.to_string())
        .collect();
    for local in locals {
        sel.remove_attr(&local);
    }
    for (key, value) in attrs {
        sel.set_attr(key, value);
    }
}

// === Text Content ===

/// Get the literal payload of a text node, or the concatenated text of an
/// element's descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Tree Navigation ===

/// All child nodes (elements, text and comments) in document order.
#[inline]
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
}

/// First element child with the given tag.
#[must_use]
pub fn find_child<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    node.children().into_iter().find(|child| is_tag(child, tag))
}

/// The `body` element synthesized (or kept) by the parser: the `body` child
/// of the root `html` element. `None` for pathological shapes such as a
/// frameset document.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    let html = find_child(&doc.root(), "html")?;
    find_child(&html, "body")
}

// === Tree Manipulation ===

/// Create a detached text node owned by the document's arena.
#[inline]
#[must_use]
pub fn new_text<'a>(doc: &'a Document, text: &str) -> NodeRef<'a> {
    doc.tree.new_text(text)
}

/// Replace the children of `parent` with `children`, in order.
///
/// Every current child is detached first; nodes left out of `children`
/// stay detached. Nodes in `children` may come from anywhere in the tree
/// (e.g. grandchildren promoted out of an unwrapped wrapper).
pub fn replace_children(parent: &NodeRef, children: &[NodeRef]) {
    for child in parent.children() {
        child.remove_from_parent();
    }
    for child in children {
        child.remove_from_parent();
        parent.append_child(&child.id);
    }
}

// === Serialization ===

/// Serialize the children of a node, concatenated.
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

/// Serialize a node including its own tag.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}
