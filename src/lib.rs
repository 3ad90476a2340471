//! # canvas-sanitizer
//!
//! Rewrites HTML exported from collaborative canvas documents into the
//! smallest HTML subset that still carries the document's meaning, for
//! consumers that pay per token.
//!
//! ## Quick Start
//!
//! ```rust
//! use canvas_sanitizer::sanitize;
//!
//! let html = r#"<ul id="temp:C:A"><li class="checked" style=""><span>Done</span><br/></li></ul>"#;
//! assert_eq!(sanitize(html)?, r#"<ul><li class="checked">Done</li></ul>"#);
//! # Ok::<(), canvas_sanitizer::Error>(())
//! ```
//!
//! ## What is removed
//!
//! - **Attributes**: everything except `href` and `data-section-style`;
//!   `class` keeps only the `checked` and `embedded-file` tokens
//! - **Line breaks**: `br` elements disappear
//! - **Wrappers**: `span` elements are replaced by their children
//! - **Emoji**: `control` wrappers around a marked emoji image become the
//!   plain `:name:` token
//! - **Non-content**: `script`, `style`, `link`, `meta`, `noscript`, `iframe`
//! - **Document wrapper**: only the body fragment is returned
//!
//! Unknown elements are kept, with their attributes filtered.

mod error;
mod options;
mod sanitize;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Attribute and class whitelist filtering.
pub mod attributes;

/// Tag classification for the rewriter.
pub mod tags;

/// Inline emoji recognition.
pub mod emoji;

/// Structural rewriting of the parsed tree.
pub mod rewrite;

/// Character encoding detection and strict decoding.
pub mod encoding;

/// Canvas HTML to Markdown rendering.
pub mod markdown;

/// Canvas result records for batch responses.
pub mod canvas;

// Public API - re-exports
pub use canvas::{CanvasBatch, CanvasContent};
pub use error::{Error, Result};
pub use markdown::to_markdown;
pub use options::Options;

/// Sanitizes canvas HTML using the default policy.
///
/// Empty input yields an empty string without parsing. The result is the
/// body fragment only, never a full document.
///
/// # Example
///
/// ```rust
/// use canvas_sanitizer::sanitize;
///
/// let html = r#"<control><img data-is-slack alt="x">:wave:</img></control>"#;
/// assert_eq!(sanitize(html)?, ":wave:");
/// # Ok::<(), canvas_sanitizer::Error>(())
/// ```
pub fn sanitize(html: &str) -> Result<String> {
    sanitize_with_options(html, &Options::default())
}

/// Sanitizes canvas HTML with a custom policy.
///
/// # Example
///
/// ```rust
/// use canvas_sanitizer::{sanitize_with_options, Options};
///
/// let options = Options {
///     allowed_attributes: vec!["href".into(), "title".into()],
///     ..Options::default()
/// };
/// let html = r#"<a href="/x" title="t" id="i">x</a>"#;
/// assert_eq!(sanitize_with_options(html, &options)?, r#"<a href="/x" title="t">x</a>"#);
/// # Ok::<(), canvas_sanitizer::Error>(())
/// ```
pub fn sanitize_with_options(html: &str, options: &Options) -> Result<String> {
    sanitize::sanitize_content(html, options)
}

/// Sanitizes raw canvas bytes, detecting the character encoding.
///
/// The encoding comes from a byte order mark, then from
/// `<meta charset>`/`http-equiv` declarations, defaulting to UTF-8. Bytes
/// that are malformed in that encoding return [`Error::ParseError`].
///
/// # Example
///
/// ```rust
/// use canvas_sanitizer::{sanitize_bytes, Error};
///
/// assert_eq!(sanitize_bytes("<h1 id='x'>タイトル</h1>".as_bytes())?, "<h1>タイトル</h1>");
/// assert!(matches!(sanitize_bytes(b"<p>\xFF</p>"), Err(Error::ParseError(_))));
/// # Ok::<(), canvas_sanitizer::Error>(())
/// ```
pub fn sanitize_bytes(html: &[u8]) -> Result<String> {
    sanitize_bytes_with_options(html, &Options::default())
}

/// Sanitizes raw canvas bytes with a custom policy.
pub fn sanitize_bytes_with_options(html: &[u8], options: &Options) -> Result<String> {
    sanitize::sanitize_bytes(html, options)
}
