//! Recursive structural comparison of two canonical trees
//!
//! The differ borrows both trees and both original texts read-only; it
//! emits replacements keyed on the base tree's spans, with replacement
//! text sliced from the other tree's source. Spans come from the parse
//! that preceded normalization, so a node that normalized identically on
//! both sides is never flagged even when its original spelling differed.

use phpsd_syntax::kinds::field;
use phpsd_syntax::node::masked_fields_eq;
use phpsd_syntax::{FieldValue, SyntaxNode};

use crate::replacement::{Replacement, ReplacementSet};

/// The per-file verdict of the differ.
#[derive(Debug)]
pub enum FileDiff {
    /// Top-level shape differs (declaration added, removed, or reordered),
    /// or a difference could not be anchored to spanned nodes: replace the
    /// whole file. A policy branch, not an error.
    Wholesale,
    /// The per-node replacements to splice; empty means no semantic change.
    Partial(ReplacementSet),
}

/// Outcome of comparing one node pair.
enum Delta {
    Equal,
    /// Replacements for strictly descendant spans were emitted.
    Patched(Vec<Replacement>),
    /// The pair differs as a whole; the caller replaces the subtree.
    Differs,
}

/// Compare two canonical `program` trees.
///
/// The ordered kind list of top-level statements must match exactly before
/// any recursive comparison happens; a mismatch means the file's shape
/// changed and partial patching is off the table.
pub fn diff_programs(a: &SyntaxNode, b: &SyntaxNode, text_b: &str) -> FileDiff {
    let tops_a = top_level(a);
    let tops_b = top_level(b);

    let kinds_a: Vec<&str> = tops_a.iter().map(|n| n.kind).collect();
    let kinds_b: Vec<&str> = tops_b.iter().map(|n| n.kind).collect();
    if kinds_a != kinds_b {
        tracing::debug!(?kinds_a, ?kinds_b, "top-level shape mismatch");
        return FileDiff::Wholesale;
    }

    let mut set = ReplacementSet::new();
    for (na, nb) in tops_a.iter().zip(tops_b.iter()) {
        match diff_pair(na, nb, text_b) {
            Delta::Equal => {}
            Delta::Patched(replacements) => set.extend(replacements),
            Delta::Differs => match (na.span, nb.span) {
                (Some(sa), Some(sb)) => {
                    set.push(Replacement {
                        span: sa,
                        text: sb.slice(text_b).to_string(),
                    });
                }
                // a synthesized top-level statement cannot anchor a
                // replacement; give up on partial patching
                _ => return FileDiff::Wholesale,
            },
        }
    }
    FileDiff::Partial(set)
}

fn top_level(program: &SyntaxNode) -> Vec<&SyntaxNode> {
    program.nodes_under(field::CHILDREN)
}

/// Compare one pair. Kind or masked-field differences make the pair
/// differ as a whole; otherwise recursion proceeds into node children
/// pairwise, and a differing child pair becomes a replacement right there
/// when both sides carry spans. A span-less difference bubbles up to the
/// nearest spanned ancestor pair, discarding sibling patches that the
/// ancestor replacement subsumes.
fn diff_pair(a: &SyntaxNode, b: &SyntaxNode, text_b: &str) -> Delta {
    if a.kind != b.kind {
        return Delta::Differs;
    }
    if !masked_fields_eq(a, b) {
        return Delta::Differs;
    }

    // masked equality guarantees aligned field names, list lengths, and
    // value shapes; only node-typed positions remain to compare
    let mut patches: Vec<Replacement> = Vec::new();
    for ((_, va), (_, vb)) in a.fields().iter().zip(b.fields().iter()) {
        match (va, vb) {
            (FieldValue::Node(ca), FieldValue::Node(cb)) => {
                if !diff_child(ca, cb, text_b, &mut patches) {
                    return Delta::Differs;
                }
            }
            (FieldValue::List(la), FieldValue::List(lb)) => {
                for (ia, ib) in la.iter().zip(lb.iter()) {
                    if let (FieldValue::Node(ca), FieldValue::Node(cb)) = (ia, ib) {
                        if !diff_child(ca, cb, text_b, &mut patches) {
                            return Delta::Differs;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    if patches.is_empty() {
        Delta::Equal
    } else {
        Delta::Patched(patches)
    }
}

/// Returns false when the difference must bubble to the parent.
fn diff_child(
    a: &SyntaxNode,
    b: &SyntaxNode,
    text_b: &str,
    patches: &mut Vec<Replacement>,
) -> bool {
    match diff_pair(a, b, text_b) {
        Delta::Equal => true,
        Delta::Patched(nested) => {
            patches.extend(nested);
            true
        }
        Delta::Differs => match (a.span, b.span) {
            (Some(sa), Some(sb)) => {
                patches.push(Replacement {
                    span: sa,
                    text: sb.slice(text_b).to_string(),
                });
                true
            }
            _ => false,
        },
    }
}
