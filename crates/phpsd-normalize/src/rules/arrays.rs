//! Collection literal canonicalization
//!
//! `array(...)` and `[...]` parse to the same kind; this rule pins the
//! field shape down to a single `elements` list so the two spellings are
//! indistinguishable in the canonical tree and always render as `[...]`.

use phpsd_syntax::SyntaxNode;
use phpsd_syntax::kinds::{self, field};

pub(crate) fn canonical_array_literals(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::ARRAY_CREATION_EXPRESSION {
        return node;
    }
    if node.field(field::ELEMENTS).is_some() {
        // already canonical
        return node;
    }
    let elements = node.take_values(field::CHILDREN);
    node.set_field_values(field::ELEMENTS, elements);
    node
}
