//! Structural rewriting of the parsed canvas tree.
//!
//! The walk is pre-order. For each element it filters the element's own
//! attributes, then rebuilds its child list in two phases:
//!
//! 1. **Resolve**: read the current children and decide, per child, whether
//!    it is kept, dropped, unwrapped (its children are resolved in its place),
//!    or replaced by an emoji token. Nothing is mutated in this phase.
//! 2. **Commit**: splice the resolved sequence in as the new child list.
//!
//! Kept elements are then queued and visited the same way. Unwrapped
//! children are resolved from the new parent's perspective, so nested
//! wrappers flatten in a single pass and an unwrapped `control` still gets
//! emoji detection.

use crate::attributes::filter_attributes;
use crate::dom::{self, Document, NodeRef};
use crate::emoji;
use crate::options::Options;
use crate::tags::TagKind;

/// Counters collected during a rewrite, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Elements kept and visited (attributes filtered).
    pub elements: usize,
    /// Wrapper elements replaced by their children.
    pub unwrapped: usize,
    /// Line-break elements removed.
    pub line_breaks: usize,
    /// Elements removed with their subtree.
    pub discarded: usize,
    /// Emoji constructs replaced by their token.
    pub emoji: usize,
}

/// One entry of a resolved child list.
enum Slot<'a> {
    /// Non-element node, kept untouched.
    Keep(NodeRef<'a>),
    /// Element kept and queued for its own rewrite.
    Visit(NodeRef<'a>),
    /// Emoji token replacing a whole container subtree.
    Emoji(String),
}

/// Rewrite the whole document in place, starting at its root.
pub fn rewrite(doc: &Document, opts: &Options) -> RewriteStats {
    let mut rewriter = Rewriter {
        doc,
        opts,
        stats: RewriteStats::default(),
    };
    rewriter.run(doc.root());
    rewriter.stats
}

struct Rewriter<'a> {
    doc: &'a Document,
    opts: &'a Options,
    stats: RewriteStats,
}

impl<'a> Rewriter<'a> {
    fn run(&mut self, root: NodeRef<'a>) {
        // Explicit stack instead of recursion: canvas exports can nest deeply.
        let mut pending = vec![root];

        while let Some(node) = pending.pop() {
            if node.is_element() {
                self.stats.elements += 1;
                let kept = filter_attributes(&dom::get_all_attributes(&node), self.opts);
                dom::replace_attributes(&node, &kept);
            }

            let resolved = self.resolve_children(&node);
            self.commit(&node, &resolved);

            // Reverse so the first child is visited next (pre-order).
            pending.extend(resolved.iter().rev().filter_map(|slot| match slot {
                Slot::Visit(child) => Some(*child),
                Slot::Keep(_) | Slot::Emoji(_) => None,
            }));
        }
    }

    /// Phase 1: compute the replacement child sequence of `parent`.
    fn resolve_children(&mut self, parent: &NodeRef<'a>) -> Vec<Slot<'a>> {
        let mut resolved = Vec::new();
        let mut stack: Vec<NodeRef<'a>> = dom::child_nodes(parent).into_iter().rev().collect();

        while let Some(child) = stack.pop() {
            let Some(tag) = dom::tag_name(&child) else {
                resolved.push(Slot::Keep(child));
                continue;
            };

            match TagKind::classify(&tag, self.opts) {
                TagKind::LineBreak => self.stats.line_breaks += 1,
                TagKind::Discarded => self.stats.discarded += 1,
                TagKind::SpanWrapper => {
                    self.stats.unwrapped += 1;
                    stack.extend(dom::child_nodes(&child).into_iter().rev());
                }
                TagKind::EmojiControl => match emoji::detect(&child, self.opts) {
                    Some(token) => {
                        self.stats.emoji += 1;
                        resolved.push(Slot::Emoji(token));
                    }
                    None => resolved.push(Slot::Visit(child)),
                },
                TagKind::Generic => resolved.push(Slot::Visit(child)),
            }
        }

        resolved
    }

    /// Phase 2: install the resolved sequence as `parent`'s children.
    fn commit(&self, parent: &NodeRef<'a>, resolved: &[Slot<'a>]) {
        let unchanged = {
            let current = dom::child_nodes(parent);
            current.len() == resolved.len()
                && current.iter().zip(resolved).all(|(node, slot)| match slot {
                    Slot::Keep(kept) | Slot::Visit(kept) => kept.id == node.id,
                    Slot::Emoji(_) => false,
                })
        };
        if unchanged {
            return;
        }

        let children: Vec<NodeRef<'a>> = resolved
            .iter()
            .map(|slot| match slot {
                Slot::Keep(node) | Slot::Visit(node) => *node,
                Slot::Emoji(token) => dom::new_text(self.doc, token),
            })
            .collect();
        dom::replace_children(parent, &children);
    }
}
