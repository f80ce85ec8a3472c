//! Type annotation stripping
//!
//! Return and parameter types are erased before comparison. This is only
//! semantics-preserving when the two inputs already agree on types; that
//! is an assumption the caller accepts, not something verified here.

use phpsd_syntax::SyntaxNode;
use phpsd_syntax::kinds::{self, field};

const CALLABLE_KINDS: [&str; 5] = [
    kinds::FUNCTION_DEFINITION,
    kinds::METHOD_DECLARATION,
    kinds::ANONYMOUS_FUNCTION,
    // the closure node's name in older grammar revisions
    "anonymous_function",
    kinds::ARROW_FUNCTION,
];

const PARAMETER_KINDS: [&str; 3] = [
    kinds::SIMPLE_PARAMETER,
    kinds::VARIADIC_PARAMETER,
    kinds::PROPERTY_PROMOTION_PARAMETER,
];

pub(crate) fn strip_type_annotations(mut node: SyntaxNode) -> SyntaxNode {
    if CALLABLE_KINDS.contains(&node.kind) {
        node.remove_field(field::RETURN_TYPE);
    }
    if PARAMETER_KINDS.contains(&node.kind) {
        node.remove_field(field::TYPE);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use phpsd_syntax::FieldValue;

    #[test]
    fn test_strips_return_type() {
        let mut node = SyntaxNode::synthetic(kinds::FUNCTION_DEFINITION);
        node.fields.push((
            field::RETURN_TYPE,
            FieldValue::node(SyntaxNode::synthetic_token(kinds::NAME, "int")),
        ));
        let node = strip_type_annotations(node);
        assert!(node.field(field::RETURN_TYPE).is_none());
    }

    #[test]
    fn test_strips_parameter_type() {
        let mut node = SyntaxNode::synthetic(kinds::SIMPLE_PARAMETER);
        node.fields.push((
            field::TYPE,
            FieldValue::node(SyntaxNode::synthetic_token(kinds::NAME, "string")),
        ));
        let node = strip_type_annotations(node);
        assert!(node.field(field::TYPE).is_none());
    }
}
