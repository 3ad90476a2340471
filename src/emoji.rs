//! Inline emoji recognition.
//!
//! Canvas exports render an emoji as a decorative image wrapped in a
//! container element, with the readable `:name:` token as trailing text:
//!
//! ```html
//! <control data-remapped="true"><img src="..." alt="wave" data-is-slack>:wave:</control>
//! ```
//!
//! The image is marked with a boolean provenance attribute. Only the token is
//! worth keeping.

use crate::dom::{self, NodeRef};
use crate::options::Options;

/// Whether the container has a direct image child carrying the marker
/// attribute. The attribute's value is ignored.
#[must_use]
pub fn has_marked_image(container: &NodeRef, opts: &Options) -> bool {
    dom::child_nodes(container).iter().any(|child| {
        dom::is_tag(child, &opts.emoji_image_tag)
            && dom::has_attribute(child, &opts.emoji_marker_attribute)
    })
}

/// Recognize an emoji construct and return its token.
///
/// The token is the first direct text child of the container that is
/// non-empty after trimming, in document order. Returns `None` when there is
/// no marked image, or when there is one but no usable text; either way the
/// container is then treated as an ordinary element.
#[must_use]
pub fn detect(container: &NodeRef, opts: &Options) -> Option<String> {
    if !has_marked_image(container, opts) {
        return None;
    }

    dom::child_nodes(container)
        .iter()
        .filter(|child| child.is_text())
        .find_map(|child| token(&dom::text_content(child)))
}

/// The trimmed text, taken as written. Whitespace-only text is no token.
fn token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
