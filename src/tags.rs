//! Tag classification.
//!
//! Every element child is resolved once to a [`TagKind`]; the rewriter then
//! matches on the kind instead of comparing tag strings.

use crate::options::Options;

/// How the rewriter treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Detached without replacement (`br`).
    LineBreak,
    /// Replaced by its own children (`span`).
    SpanWrapper,
    /// Candidate inline emoji construct (`control`).
    EmojiControl,
    /// Detached together with its subtree (`script`, `style`, ...).
    Discarded,
    /// Kept, attributes filtered, children rewritten.
    Generic,
}

impl TagKind {
    /// Resolve a tag name against the policy.
    ///
    /// Line breaks win over every other classification, then removal, then
    /// unwrapping, so a policy listing a tag twice still resolves to one kind.
    #[must_use]
    pub fn classify(tag: &str, opts: &Options) -> Self {
        if opts.is_line_break_tag(tag) {
            Self::LineBreak
        } else if opts.is_removed_tag(tag) {
            Self::Discarded
        } else if opts.is_unwrap_tag(tag) {
            Self::SpanWrapper
        } else if opts.emoji_container_tag.eq_ignore_ascii_case(tag) {
            Self::EmojiControl
        } else {
            Self::Generic
        }
    }
}
