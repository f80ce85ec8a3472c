//! Logical operator spelling and associative chain shape

use phpsd_syntax::kinds::{self, field};
use phpsd_syntax::{FieldValue, Scalar, SyntaxNode};

use super::strings::concat;

/// The worded, low-precedence logical operators mean the same thing as
/// their symbolic forms once they sit in an expression tree.
pub(crate) fn symbolic_logical_operators(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::BINARY_EXPRESSION {
        return node;
    }
    if let Some(FieldValue::Scalar(Scalar::Str(op))) = node.field_mut(field::OPERATOR) {
        if op.eq_ignore_ascii_case("and") {
            *op = "&&".to_string();
        } else if op.eq_ignore_ascii_case("or") {
            *op = "||".to_string();
        }
    }
    node
}

/// Operators safe to regroup: evaluation order is unaffected by
/// re-association. Arithmetic `+` and `*` stay out, floating point is not
/// associative under rounding.
const ASSOCIATIVE: [&str; 3] = [".", "&&", "||"];

/// Flatten the same-operator spine (looking through parentheses that wrap
/// a same-operator child) and rebuild it left-associatively. Operand nodes
/// keep their parsed spans; the rebuilt interior is span-less and the top
/// node inherits the original span.
pub(crate) fn reassociate_chains(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::BINARY_EXPRESSION {
        return node;
    }
    let Some(op) = operator_of(&node).map(str::to_string) else {
        return node;
    };
    if !ASSOCIATIVE.contains(&op.as_str()) {
        return node;
    }
    if node.node_field(field::LEFT).is_none() || node.node_field(field::RIGHT).is_none() {
        return node;
    }

    let span = node.span;
    let mut operands = Vec::new();
    let (Some(FieldValue::Node(left)), Some(FieldValue::Node(right))) =
        (node.take_field(field::LEFT), node.take_field(field::RIGHT))
    else {
        return node;
    };
    collect_spine(*left, &op, &mut operands);
    collect_spine(*right, &op, &mut operands);

    let mut acc = operands.remove(0);
    for next in operands {
        acc = rebuild(acc, &op, next);
    }
    acc.span = span;
    acc
}

fn operator_of(node: &SyntaxNode) -> Option<&str> {
    match node.field(field::OPERATOR)? {
        FieldValue::Scalar(s) => s.as_str(),
        _ => None,
    }
}

fn collect_spine(node: SyntaxNode, op: &str, out: &mut Vec<SyntaxNode>) {
    if node.kind == kinds::BINARY_EXPRESSION
        && operator_of(&node) == Some(op)
        && node.node_field(field::LEFT).is_some()
        && node.node_field(field::RIGHT).is_some()
    {
        let mut node = node;
        if let (Some(FieldValue::Node(left)), Some(FieldValue::Node(right))) =
            (node.take_field(field::LEFT), node.take_field(field::RIGHT))
        {
            collect_spine(*left, op, out);
            collect_spine(*right, op, out);
            return;
        }
        unreachable!("left and right were just checked");
    }
    if node.kind == kinds::PARENTHESIZED_EXPRESSION {
        let unwrap = matches!(
            node.node_field(field::CHILDREN),
            Some(inner)
                if inner.kind == kinds::BINARY_EXPRESSION && operator_of(inner) == Some(op)
        );
        if unwrap {
            let mut node = node.clone();
            if let Some(FieldValue::Node(inner)) = node.take_field(field::CHILDREN) {
                collect_spine(*inner, op, out);
                return;
            }
        }
    }
    out.push(node);
}

fn rebuild(left: SyntaxNode, op: &str, right: SyntaxNode) -> SyntaxNode {
    if op == "." {
        return concat(left, right);
    }
    let mut node = SyntaxNode::synthetic(kinds::BINARY_EXPRESSION);
    node.fields.push((field::LEFT, FieldValue::node(left)));
    node.fields
        .push((field::OPERATOR, FieldValue::Scalar(Scalar::str(op))));
    node.fields.push((field::RIGHT, FieldValue::node(right)));
    node
}
