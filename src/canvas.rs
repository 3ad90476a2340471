//! Canvas result records.
//!
//! The sanitized fragment is usually embedded in a structured response next
//! to metadata about the canvas. Failures are reported per item so that one
//! broken canvas never aborts a batch.

use crate::error::{Error, Result};
use crate::options::Options;
use serde::{Deserialize, Serialize};

/// Maximum number of canvases in one request.
pub const MAX_CANVAS_IDS: usize = 20;

/// Canvas file identifiers start with this prefix.
const CANVAS_ID_PREFIX: char = 'F';

/// One canvas in a batch response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasContent {
    /// Canvas file identifier.
    pub id: String,

    /// Canvas title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Sanitized HTML fragment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,

    /// Link to the canvas in the source workspace.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub permalink: String,

    /// Why this canvas could not be produced. Empty on success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl CanvasContent {
    /// Validate the id and sanitize `html` into a record.
    ///
    /// Never fails: an invalid id or a sanitization error ends up in the
    /// `error` field, and title/content/permalink are left empty.
    #[must_use]
    pub fn from_html(id: &str, title: &str, permalink: &str, html: &str) -> Self {
        Self::from_html_with_options(id, title, permalink, html, &Options::default())
    }

    /// Like [`CanvasContent::from_html`] with a custom policy.
    #[must_use]
    pub fn from_html_with_options(
        id: &str,
        title: &str,
        permalink: &str,
        html: &str,
        options: &Options,
    ) -> Self {
        Self::build(id, title, permalink, || crate::sanitize_with_options(html, options))
    }

    /// Like [`CanvasContent::from_html`] for downloaded bytes; undecodable
    /// bytes become a per-item error.
    #[must_use]
    pub fn from_bytes(id: &str, title: &str, permalink: &str, html: &[u8]) -> Self {
        Self::build(id, title, permalink, || crate::sanitize_bytes(html))
    }

    fn build(
        id: &str,
        title: &str,
        permalink: &str,
        sanitize: impl FnOnce() -> Result<String>,
    ) -> Self {
        if let Err(err) = validate_canvas_id(id) {
            return Self::failed(id, err.to_string());
        }

        match sanitize() {
            Ok(content) => Self {
                id: id.to_string(),
                title: title.to_string(),
                content,
                permalink: permalink.to_string(),
                error: String::new(),
            },
            Err(err) => {
                tracing::warn!(canvas_id = id, error = %err, "canvas sanitization failed");
                Self::failed(id, format!("failed to strip HTML: {err}"))
            }
        }
    }

    /// A record carrying only an error, for failures outside sanitization
    /// (lookup, download).
    #[must_use]
    pub fn failed(id: &str, error: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            error: error.into(),
            ..Self::default()
        }
    }

    /// Whether this record carries an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// A batch of canvas records, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasBatch {
    pub canvases: Vec<CanvasContent>,
}

impl CanvasBatch {
    /// Serialize the batch as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<CanvasContent> for CanvasBatch {
    fn from_iter<I: IntoIterator<Item = CanvasContent>>(iter: I) -> Self {
        Self {
            canvases: iter.into_iter().collect(),
        }
    }
}

/// Check that an id looks like a canvas file id (`F...`).
pub fn validate_canvas_id(id: &str) -> Result<()> {
    if id.starts_with(CANVAS_ID_PREFIX) {
        Ok(())
    } else {
        Err(Error::InvalidCanvasId(id.to_string()))
    }
}

/// Check the size of a canvas request. Individual ids are validated per
/// item so that one bad id does not reject the whole batch.
pub fn validate_canvas_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::InvalidRequest(
            "canvas_ids is required and cannot be empty".to_string(),
        ));
    }
    if ids.len() > MAX_CANVAS_IDS {
        return Err(Error::InvalidRequest(format!(
            "canvas_ids cannot exceed {MAX_CANVAS_IDS} entries"
        )));
    }
    Ok(())
}
