//! Conditional branch canonicalization

use phpsd_syntax::kinds::{self, field};
use phpsd_syntax::{FieldValue, SyntaxNode};

use super::output;

const BRACED_BODY_KINDS: [&str; 6] = [
    kinds::IF_STATEMENT,
    kinds::ELSE_IF_CLAUSE,
    kinds::ELSE_CLAUSE,
    kinds::WHILE_STATEMENT,
    kinds::FOR_STATEMENT,
    kinds::FOREACH_STATEMENT,
];

/// A bare statement body and its braced single-statement form are the same
/// program; wrap the bare form in a block so bodies compare uniformly.
/// Alternative-syntax (`:` ... `endif`) blocks are folded into ordinary
/// blocks the same way. The wrapper inherits the statement's span.
pub(crate) fn brace_branch_bodies(mut node: SyntaxNode) -> SyntaxNode {
    if !BRACED_BODY_KINDS.contains(&node.kind) {
        return node;
    }
    if let Some(FieldValue::Node(body)) = node.field_mut(field::BODY) {
        if body.kind == kinds::COLON_BLOCK {
            body.kind = kinds::COMPOUND_STATEMENT;
        } else if body.kind != kinds::COMPOUND_STATEMENT {
            let stmt = std::mem::replace(
                body.as_mut(),
                SyntaxNode::synthetic(kinds::COMPOUND_STATEMENT),
            );
            let mut wrapper = SyntaxNode::synthetic(kinds::COMPOUND_STATEMENT);
            wrapper.span = stmt.span;
            wrapper.set_node_field(field::CHILDREN, vec![stmt]);
            // the bare body may itself have been a multi-expression echo
            *body.as_mut() = output::normalize_output_statements(wrapper);
        }
    }
    node
}

/// Collapse `else { if (...) ... }` (and the unbraced `else if` spelling)
/// into an `elseif` clause on the outer conditional, recursively pulling
/// up the inner alternatives; drop an `else` with an empty block.
pub(crate) fn collapse_else_chains(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::IF_STATEMENT {
        return node;
    }
    let values = node.take_values(field::ALTERNATIVE);
    if values.is_empty() {
        return node;
    }
    let mut out: Vec<SyntaxNode> = Vec::with_capacity(values.len());
    for value in values {
        let FieldValue::Node(clause) = value else {
            continue;
        };
        collapse_clause(*clause, &mut out);
    }
    node.set_node_field(field::ALTERNATIVE, out);
    node
}

fn collapse_clause(mut clause: SyntaxNode, out: &mut Vec<SyntaxNode>) {
    if clause.kind != kinds::ELSE_CLAUSE {
        out.push(clause);
        return;
    }
    let shape = {
        let Some(body) = clause.node_field(field::BODY) else {
            out.push(clause);
            return;
        };
        if body.kind != kinds::COMPOUND_STATEMENT {
            out.push(clause);
            return;
        }
        let stmts = body.nodes_under(field::CHILDREN);
        match stmts.as_slice() {
            [] => ElseShape::Empty,
            [only] if only.kind == kinds::IF_STATEMENT => ElseShape::SingleIf,
            _ => ElseShape::Keep,
        }
    };

    match shape {
        ElseShape::Empty => {
            // `else {}` says nothing
        }
        ElseShape::Keep => out.push(clause),
        ElseShape::SingleIf => {
            let Some(FieldValue::Node(mut body)) = clause.take_field(field::BODY) else {
                out.push(clause);
                return;
            };
            let mut values = body.take_values(field::CHILDREN);
            let FieldValue::Node(inner) = values.remove(0) else {
                unreachable!("shape was checked to be a single nested conditional");
            };
            let mut inner = *inner;

            let mut elseif = SyntaxNode::synthetic(kinds::ELSE_IF_CLAUSE);
            if let Some(condition) = inner.take_field(field::CONDITION) {
                elseif.fields.push((field::CONDITION, condition));
            }
            if let Some(body) = inner.take_field(field::BODY) {
                elseif.fields.push((field::BODY, body));
            }
            out.push(elseif);

            // the nested conditional's own clauses ride up with it
            for value in inner.take_values(field::ALTERNATIVE) {
                if let FieldValue::Node(clause) = value {
                    out.push(*clause);
                }
            }
        }
    }
}

enum ElseShape {
    Empty,
    SingleIf,
    Keep,
}
