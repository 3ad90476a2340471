//! Character encoding detection and strict decoding.
//!
//! Canvas downloads arrive as raw bytes. This module picks the encoding
//! (byte order mark, then HTML meta declarations, then UTF-8) and decodes
//! without replacement: bytes that are malformed in the chosen encoding
//! cannot be tokenized and surface as [`Error::ParseError`].

use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Only the head of the document is scanned for a declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks for, in order:
/// 1. a byte order mark
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 3. `<meta charset="...">`
/// 4. UTF-8 when nothing is declared
///
/// A meta declaration of UTF-16 is read as UTF-8: bytes that could be
/// scanned as ASCII are not UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    let declared = extract_content_type_charset(&head)
        .or_else(|| extract_charset(&head))
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    match declared {
        Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => UTF_8,
        Some(encoding) => encoding,
        None => UTF_8,
    }
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string, refusing malformed input.
///
/// # Examples
///
/// ```
/// use canvas_sanitizer::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html)?.contains("Café"));
///
/// assert!(decode_html(b"<p>\xFF\xFE broken</p>").is_err());
/// # Ok::<(), canvas_sanitizer::Error>(())
/// ```
pub fn decode_html(html: &[u8]) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(html) {
        Some((encoding, bom_len)) => (encoding, &html[bom_len..]),
        None => (detect_encoding(html), html),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| {
            Error::ParseError(format!("input is not valid {}", encoding.name()))
        })
}
