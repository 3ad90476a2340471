//! Attribute and class filtering.
//!
//! Maps an element's raw attribute list to the reduced list the policy
//! allows. The filter is pure: it never touches the tree, which keeps it
//! usable on its own output (filtering twice is the same as filtering once).

use crate::options::Options;

/// Filter an attribute list against the policy.
///
/// - keys in `allowed_attributes` are copied verbatim;
/// - `class` keeps only the tokens in `allowed_classes`, joined by a single
///   space, and is dropped entirely when no token survives;
/// - everything else (`id`, `style`, `value`, `src`, `alt`, ...) is dropped.
///
/// Retained entries keep their input order.
///
/// # Example
///
/// ```rust
/// use canvas_sanitizer::{attributes::filter_attributes, Options};
///
/// let raw = vec![
///     ("id".to_string(), "temp:C:XXX".to_string()),
///     ("class".to_string(), "line checked".to_string()),
///     ("style".to_string(), String::new()),
/// ];
/// let kept = filter_attributes(&raw, &Options::default());
/// assert_eq!(kept, vec![("class".to_string(), "checked".to_string())]);
/// ```
#[must_use]
pub fn filter_attributes(attrs: &[(String, String)], opts: &Options) -> Vec<(String, String)> {
    attrs
        .iter()
        .filter_map(|(key, value)| {
            if key.eq_ignore_ascii_case("class") {
                filter_class(value, opts).map(|classes| (key.clone(), classes))
            } else if opts.is_allowed_attribute(key) {
                Some((key.clone(), value.clone()))
            } else {
                None
            }
        })
        .collect()
}

/// Filter a `class` value down to its allowed tokens.
///
/// Tokens are separated by ASCII whitespace only, as in HTML; a no-break
/// space is part of a token.
///
/// Returns `None` when nothing survives, meaning the attribute should be
/// omitted rather than emitted empty.
#[must_use]
pub fn filter_class(value: &str, opts: &Options) -> Option<String> {
    let kept: Vec<&str> = value
        .split_ascii_whitespace()
        .filter(|token| opts.is_allowed_class(token))
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}
