//! The sanitize pipeline: parse, rewrite, serialize the body fragment.

use crate::dom;
use crate::encoding;
use crate::error::Result;
use crate::options::Options;
use crate::rewrite;
use tracing::{debug, warn};

/// Main entry point for sanitization.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn sanitize_content(html: &str, options: &Options) -> Result<String> {
    if html.is_empty() {
        return Ok(String::new());
    }

    let doc = dom::parse(html);
    let stats = rewrite::rewrite(&doc, options);

    let Some(body) = dom::body(&doc) else {
        warn!(input_len = html.len(), "parsed canvas has no body; returning empty fragment");
        return Ok(String::new());
    };
    let fragment = dom::inner_html(&body).to_string();

    debug!(
        input_len = html.len(),
        output_len = fragment.len(),
        elements = stats.elements,
        unwrapped = stats.unwrapped,
        line_breaks = stats.line_breaks,
        discarded = stats.discarded,
        emoji = stats.emoji,
        "sanitized canvas html"
    );

    Ok(fragment)
}

/// Byte entry point: decode first, then sanitize.
pub(crate) fn sanitize_bytes(html: &[u8], options: &Options) -> Result<String> {
    if html.is_empty() {
        return Ok(String::new());
    }
    let text = encoding::decode_html(html)?;
    sanitize_content(&text, options)
}
