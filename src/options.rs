//! Whitelist policy for sanitization.
//!
//! The `Options` struct is the immutable policy consulted by the attribute
//! filter, the tag classifier and the emoji detector. Build it once and
//! share it by reference; nothing in the sanitizer mutates it.

/// Attribute keys kept verbatim on every retained element.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &["href", "data-section-style"];

/// Class tokens that survive the `class` value filter.
pub const DEFAULT_ALLOWED_CLASSES: &[&str] = &["checked", "embedded-file"];

/// Elements discarded together with their whole subtree.
pub const DEFAULT_REMOVED_TAGS: &[&str] = &["script", "style", "link", "meta", "noscript", "iframe"];

/// Sanitization policy.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the canvas export policy.
///
/// # Example
///
/// ```rust
/// use canvas_sanitizer::{sanitize_with_options, Options};
///
/// let options = Options {
///     allowed_classes: vec!["checked".into(), "embedded-file".into(), "embedded-link".into()],
///     ..Options::default()
/// };
/// let html = sanitize_with_options("<p class='embedded-link line'>x</p>", &options)?;
/// assert_eq!(html, r#"<p class="embedded-link">x</p>"#);
/// # Ok::<(), canvas_sanitizer::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Attribute keys copied through unchanged.
    ///
    /// Default: `href`, `data-section-style`
    pub allowed_attributes: Vec<String>,

    /// Tokens allowed inside a `class` attribute.
    ///
    /// A `class` attribute whose tokens are all filtered out is dropped.
    ///
    /// Default: `checked`, `embedded-file`
    pub allowed_classes: Vec<String>,

    /// Tags removed along with everything inside them.
    ///
    /// Default: `script`, `style`, `link`, `meta`, `noscript`, `iframe`
    pub removed_tags: Vec<String>,

    /// Tags removed without replacement (line breaks carry no text).
    ///
    /// Default: `br`
    pub line_break_tags: Vec<String>,

    /// Wrapper tags replaced by their own children.
    ///
    /// Default: `span`
    pub unwrap_tags: Vec<String>,

    /// Element that wraps an inline emoji construct.
    ///
    /// Default: `control`
    pub emoji_container_tag: String,

    /// Image-like leaf inside the emoji container.
    ///
    /// Default: `img`
    pub emoji_image_tag: String,

    /// Boolean attribute marking the image as an emoji glyph. Presence alone
    /// qualifies; the value is ignored.
    ///
    /// Default: `data-is-slack`
    pub emoji_marker_attribute: String,
}

impl Options {
    /// Whether an attribute key is copied through verbatim.
    #[must_use]
    pub fn is_allowed_attribute(&self, key: &str) -> bool {
        contains_ignore_case(&self.allowed_attributes, key)
    }

    /// Whether a single class token survives filtering. Tokens are case-sensitive.
    #[must_use]
    pub fn is_allowed_class(&self, token: &str) -> bool {
        self.allowed_classes.iter().any(|c| c == token)
    }

    #[must_use]
    pub(crate) fn is_removed_tag(&self, tag: &str) -> bool {
        contains_ignore_case(&self.removed_tags, tag)
    }

    #[must_use]
    pub(crate) fn is_line_break_tag(&self, tag: &str) -> bool {
        contains_ignore_case(&self.line_break_tags, tag)
    }

    #[must_use]
    pub(crate) fn is_unwrap_tag(&self, tag: &str) -> bool {
        contains_ignore_case(&self.unwrap_tags, tag)
    }
}

fn contains_ignore_case(list: &[String], needle: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(needle))
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allowed_attributes: owned(DEFAULT_ALLOWED_ATTRIBUTES),
            allowed_classes: owned(DEFAULT_ALLOWED_CLASSES),
            removed_tags: owned(DEFAULT_REMOVED_TAGS),
            line_break_tags: owned(&["br"]),
            unwrap_tags: owned(&["span"]),
            emoji_container_tag: "control".to_string(),
            emoji_image_tag: "img".to_string(),
            emoji_marker_attribute: "data-is-slack".to_string(),
        }
    }
}
