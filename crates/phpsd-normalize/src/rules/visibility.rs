//! Member visibility defaulting and modifier ordering

use phpsd_syntax::kinds::{self, field};
use phpsd_syntax::{FieldValue, SyntaxNode};

/// An absent visibility modifier on a class member means `public`; make
/// that explicit so the two spellings compare equal. Modifier lists are
/// also put into one canonical order, matching the order-insensitive
/// semantics PHP gives them.
pub(crate) fn default_member_visibility(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::METHOD_DECLARATION && node.kind != kinds::PROPERTY_DECLARATION {
        return node;
    }

    let mut values = node.take_values(field::CHILDREN);

    let has_visibility = values.iter().any(|v| {
        matches!(v, FieldValue::Node(n) if n.kind == kinds::VISIBILITY_MODIFIER)
    });
    if !has_visibility {
        values.insert(
            0,
            FieldValue::node(SyntaxNode::synthetic_token(
                kinds::VISIBILITY_MODIFIER,
                "public",
            )),
        );
    }

    // Stable sort: non-modifier children keep their relative order ahead
    // of the modifier block.
    values.sort_by_key(|v| match v {
        FieldValue::Node(n) if kinds::is_modifier(n.kind) => {
            10 + i32::from(kinds::modifier_rank(n.kind))
        }
        _ => 0,
    });

    node.set_field_values(field::CHILDREN, values);
    node
}
